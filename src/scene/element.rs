use crate::assets::animation::{AnimationAsset, FrameCursor};
use crate::assets::font::{FontAsset, TextBound};
use crate::assets::image::ImageAsset;
use crate::foundation::core::{Coord, Rect, Rgb24, TextAlign};
use crate::foundation::ident::IdGen;
use crate::render::surface::Surface;

/// Sentinel used when an element arrives without an ESPHome asset id.
pub const NO_ESPHOME_ID: &str = "noesphomeid";
/// Sentinel used when an element arrives without a user-facing name.
pub const NO_NAME: &str = "noname";

/// Element variant discriminator; doubles as the wire `type` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// A string rendered with a bitmap font.
    Text,
    /// A placed raster image.
    Image,
    /// A placed animation.
    Animation,
}

impl ElementKind {
    /// Wire/display name of the variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Animation => "animation",
        }
    }
}

/// The four resize handles of an element's bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeCorner {
    /// Top-left handle.
    TopLeft,
    /// Top-right handle.
    TopRight,
    /// Bottom-left handle.
    BottomLeft,
    /// Bottom-right handle.
    BottomRight,
}

impl ResizeCorner {
    /// Opposite handle across the vertical axis (Left <-> Right).
    pub fn mirror_horizontal(self) -> Self {
        match self {
            Self::TopLeft => Self::TopRight,
            Self::TopRight => Self::TopLeft,
            Self::BottomLeft => Self::BottomRight,
            Self::BottomRight => Self::BottomLeft,
        }
    }

    /// Opposite handle across the horizontal axis (Top <-> Bottom).
    pub fn mirror_vertical(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomLeft,
            Self::TopRight => Self::BottomRight,
            Self::BottomLeft => Self::TopLeft,
            Self::BottomRight => Self::TopRight,
        }
    }
}

/// Transient pointer-interaction state. Never serialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Gesture {
    #[default]
    Idle,
    Moving {
        last: Coord,
    },
    Resizing {
        corner: ResizeCorner,
        last: Coord,
    },
}

/// Payload of a text element: the font asset plus the string to render.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextPayload {
    /// Backing font asset (embedded wholesale so scenes round-trip without
    /// a library lookup).
    pub font: FontAsset,
    /// The string to rasterize.
    pub text: String,
    /// Footprint computed for `text`/`font`; refreshed on every edit.
    pub bounds: TextBound,
    /// Optional display tint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb24>,
    /// Optional ESPHome alignment anchor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
}

/// Payload of an image element.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImagePayload {
    /// Backing image asset.
    pub image: ImageAsset,
}

/// Payload of an animation element.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationPayload {
    /// Backing animation asset.
    pub animation: AnimationAsset,
    /// Playback cursor; transient, reset on scene load.
    #[serde(skip)]
    pub cursor: FrameCursor,
}

/// Variant payload of a scene element.
///
/// Serialization is internally tagged by `type`, so the persisted wire
/// shape stays flat and a missing discriminator fails the element
/// outright.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementPayload {
    /// Rendered text.
    Text(TextPayload),
    /// Placed image.
    Image(ImagePayload),
    /// Placed animation.
    Animation(AnimationPayload),
}

impl ElementPayload {
    /// Variant discriminator.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Text(_) => ElementKind::Text,
            Self::Image(_) => ElementKind::Image,
            Self::Animation(_) => ElementKind::Animation,
        }
    }

    /// ESPHome id of the backing asset, when the asset carries one.
    pub fn asset_id(&self) -> Option<&str> {
        match self {
            Self::Text(p) => p.font.id.as_deref(),
            Self::Image(p) => Some(&p.image.id),
            Self::Animation(p) => Some(&p.animation.id),
        }
    }
}

/// A placed, positioned instance of an asset within the edited scene.
///
/// Owns position, explicit size overrides, z-order and the move/resize
/// interaction state machine. Bitmap production is delegated to the payload
/// asset.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneElement {
    internal_id: String,
    /// Id of the underlying ESPHome resource; shared by all placements of
    /// that resource.
    pub esphome_id: String,
    /// User-chosen display name.
    pub name: String,
    /// Left edge in unscaled display pixels.
    pub x: i32,
    /// Top edge in unscaled display pixels.
    pub y: i32,
    /// Explicit width override; zero/unset falls back to the intrinsic
    /// asset width.
    pub width: Option<u32>,
    /// Explicit height override; zero/unset falls back to the intrinsic
    /// asset height.
    pub height: Option<u32>,
    /// Paint and list order key; ties break by insertion order.
    pub zorder: i32,
    payload: ElementPayload,
    gesture: Gesture,
    move_started_from: Coord,
}

impl SceneElement {
    /// Build a fresh element around `payload`.
    ///
    /// The internal id is drawn from `ids`; the ESPHome id falls back to
    /// the payload's asset id and then to the [`NO_ESPHOME_ID`] sentinel.
    pub fn new(payload: ElementPayload, at: Coord, zorder: i32, ids: &mut dyn IdGen) -> Self {
        let esphome_id = payload
            .asset_id()
            .unwrap_or(NO_ESPHOME_ID)
            .to_string();
        Self {
            internal_id: ids.next_id(),
            esphome_id,
            name: NO_NAME.to_string(),
            x: at.x,
            y: at.y,
            width: None,
            height: None,
            zorder,
            payload,
            gesture: Gesture::Idle,
            move_started_from: Coord::default(),
        }
    }

    pub(crate) fn from_parts(
        internal_id: String,
        esphome_id: String,
        name: String,
        at: Coord,
        width: Option<u32>,
        height: Option<u32>,
        zorder: i32,
        payload: ElementPayload,
    ) -> Self {
        Self {
            internal_id,
            esphome_id,
            name,
            x: at.x,
            y: at.y,
            width,
            height,
            zorder,
            payload,
            gesture: Gesture::Idle,
            move_started_from: Coord::default(),
        }
    }

    /// Stable unique id, assigned once at creation.
    pub fn internal_id(&self) -> &str {
        &self.internal_id
    }

    /// Variant discriminator.
    pub fn kind(&self) -> ElementKind {
        self.payload.kind()
    }

    /// Variant payload.
    pub fn payload(&self) -> &ElementPayload {
        &self.payload
    }

    /// Mutable variant payload (property edits from the settings panel).
    pub fn payload_mut(&mut self) -> &mut ElementPayload {
        &mut self.payload
    }

    /// Whether resize handles apply; only text elements resize.
    pub fn resizable(&self) -> bool {
        matches!(self.payload, ElementPayload::Text(_))
    }

    fn intrinsic_size(&self) -> (u32, u32) {
        match &self.payload {
            ElementPayload::Text(p) => (p.bounds.width, p.bounds.height),
            ElementPayload::Image(p) => (p.image.width, p.image.height),
            ElementPayload::Animation(p) => (p.animation.width, p.animation.height),
        }
    }

    /// Effective width: explicit non-zero override, else intrinsic size.
    pub fn get_width(&self) -> u32 {
        match self.width {
            Some(w) if w > 0 => w,
            _ => self.intrinsic_size().0,
        }
    }

    /// Effective height: explicit non-zero override, else intrinsic size.
    pub fn get_height(&self) -> u32 {
        match self.height {
            Some(h) if h > 0 => h,
            _ => self.intrinsic_size().1,
        }
    }

    /// Hit test against the element's bounding box.
    ///
    /// The left and top edges are exclusive; the right and bottom edges are
    /// inclusive.
    pub fn is_at(&self, coords: Coord) -> bool {
        let w = self.get_width() as i32;
        let h = self.get_height() as i32;
        coords.x > self.x
            && coords.x <= self.x + w
            && coords.y > self.y
            && coords.y <= self.y + h
    }

    /// Project grid coordinates to device pixels for a gridded canvas.
    ///
    /// The grid lines tile between cells, so a cell at `x` starts after
    /// `x + 1` grid lines and an extent of `n` cells spans `n - 1` interior
    /// lines.
    pub fn scaled_rect(&self, x: i32, y: i32, scale: i32, grid_width: i32) -> Rect {
        let w = self.get_width() as i32;
        let h = self.get_height() as i32;
        Rect {
            x: x * scale + grid_width * (x + 1),
            y: y * scale + grid_width * (y + 1),
            w: w * scale + grid_width * (w - 1),
            h: h * scale + grid_width * (h - 1),
        }
    }

    // --- interaction state machine -------------------------------------

    /// Whether a move gesture is active.
    pub fn is_moving(&self) -> bool {
        matches!(self.gesture, Gesture::Moving { .. })
    }

    /// Whether a resize gesture is active.
    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture, Gesture::Resizing { .. })
    }

    /// The active resize handle, if resizing.
    pub fn active_corner(&self) -> Option<ResizeCorner> {
        match self.gesture {
            Gesture::Resizing { corner, .. } => Some(corner),
            _ => None,
        }
    }

    /// Start a move gesture anchored at `coords`. No-op unless idle.
    pub fn begin_move(&mut self, coords: Coord) {
        if self.gesture != Gesture::Idle {
            return;
        }
        self.move_started_from = Coord::new(self.x, self.y);
        self.gesture = Gesture::Moving { last: coords };
    }

    /// Apply the pointer delta since the previous call.
    ///
    /// Each call shifts the element by `offset - last_anchor` only, so
    /// repeated reports of the same pointer position accumulate nothing.
    pub fn move_by(&mut self, offset: Coord) {
        let Gesture::Moving { last } = self.gesture else {
            return;
        };
        self.x += offset.x - last.x;
        self.y += offset.y - last.y;
        self.gesture = Gesture::Moving { last: offset };
    }

    /// Finish the move gesture.
    pub fn end_move(&mut self) {
        if self.is_moving() {
            self.gesture = Gesture::Idle;
        }
    }

    /// Whether the element position differs from where the most recent
    /// move gesture started.
    pub fn has_moved(&self) -> bool {
        self.x != self.move_started_from.x || self.y != self.move_started_from.y
    }

    /// Start a resize gesture on `corner` anchored at `coords`. No-op
    /// unless idle.
    pub fn begin_resize(&mut self, corner: ResizeCorner, coords: Coord) {
        if self.gesture != Gesture::Idle {
            return;
        }
        // Materialize the extent so deltas apply to a concrete size.
        self.width = Some(self.get_width());
        self.height = Some(self.get_height());
        self.gesture = Gesture::Resizing {
            corner,
            last: coords,
        };
    }

    /// Apply the pointer delta since the previous call to the active
    /// corner.
    ///
    /// A drag through zero extent flips the origin (the rectangle stays in
    /// positive-extent, top-left-origin form) and mirrors the active corner
    /// so the same physical corner keeps tracking the pointer.
    pub fn resize(&mut self, offset: Coord) {
        let Gesture::Resizing { corner, last } = self.gesture else {
            return;
        };
        let dx = offset.x - last.x;
        let dy = offset.y - last.y;
        // Read the raw override: a gesture passing through zero extent must
        // not snap back to the intrinsic size mid-drag.
        let mut w = self.width.unwrap_or_else(|| self.intrinsic_size().0) as i32;
        let mut h = self.height.unwrap_or_else(|| self.intrinsic_size().1) as i32;
        let mut corner = corner;

        match corner {
            ResizeCorner::TopLeft => {
                self.x += dx;
                self.y += dy;
                w -= dx;
                h -= dy;
            }
            ResizeCorner::TopRight => {
                self.y += dy;
                w += dx;
                h -= dy;
            }
            ResizeCorner::BottomLeft => {
                self.x += dx;
                w -= dx;
                h += dy;
            }
            ResizeCorner::BottomRight => {
                w += dx;
                h += dy;
            }
        }

        if w < 0 {
            self.x += w;
            w = -w;
            corner = corner.mirror_horizontal();
        }
        if h < 0 {
            self.y += h;
            h = -h;
            corner = corner.mirror_vertical();
        }

        self.width = Some(w as u32);
        self.height = Some(h as u32);
        self.gesture = Gesture::Resizing {
            corner,
            last: offset,
        };
    }

    /// Finish the resize gesture and clear the active corner.
    pub fn end_resize(&mut self) {
        if self.is_resizing() {
            self.gesture = Gesture::Idle;
        }
    }

    // --- rendering -----------------------------------------------------

    fn payload_surface(&self) -> Option<Surface> {
        match &self.payload {
            ElementPayload::Text(p) => p.font.render(&p.text),
            ElementPayload::Image(p) => p.image.surface(),
            ElementPayload::Animation(p) => p.animation.frame_surface(p.cursor.frame()),
        }
    }

    /// Paint the element at its own position.
    ///
    /// Animations step their playback cursor once per draw. Absent asset
    /// data paints nothing.
    pub fn draw_to(&mut self, surface: &mut Surface) {
        if let ElementPayload::Animation(p) = &mut self.payload {
            p.cursor.advance(&p.animation);
        }
        if let Some(bitmap) = self.payload_surface() {
            surface.blit(&bitmap, Coord::new(self.x, self.y));
        }
    }

    /// Paint a preview of the element at `coords` without committing any
    /// state (used while dragging).
    pub fn draw_ghost_to(&self, surface: &mut Surface, coords: Coord) {
        if let Some(bitmap) = self.payload_surface() {
            surface.blit(&bitmap, coords);
        }
    }

    // --- emission ------------------------------------------------------

    /// ESPHome YAML list entry describing this element's asset.
    pub fn to_yaml(&self) -> String {
        match &self.payload {
            ElementPayload::Text(p) => format!(
                "  #{}\n  - id: \"{}\"\n    file: \"{}\"\n    size: {}\n    glyphs: \"{}\"\n",
                self.name,
                self.esphome_id,
                p.font.path,
                p.font.height,
                p.font.glyphstr.replace('"', "\\\""),
            ),
            ElementPayload::Image(p) => format!(
                "  #{}\n  - id: \"{}\"\n    file: \"{}\"\n    type: {}\n",
                self.name, self.esphome_id, p.image.path, p.image.kind,
            ),
            ElementPayload::Animation(p) => format!(
                "  #{}\n  - id: \"{}\"\n    file: \"{}\"\n",
                self.name, self.esphome_id, p.animation.path,
            ),
        }
    }

    /// Illustrative display-lambda call for this element.
    pub fn to_cpp(&self) -> String {
        match &self.payload {
            ElementPayload::Text(p) => {
                let text = p.text.replace('"', "\\\"");
                match p.align {
                    Some(align) => format!(
                        "\t// {}\n\tit.print({}, {}, id({}), TextAlign::{}, \"{}\");\n",
                        self.name,
                        self.x,
                        self.y,
                        self.esphome_id,
                        align.cpp_name(),
                        text,
                    ),
                    None => format!(
                        "\t// {}\n\tit.print({}, {}, id({}), \"{}\");\n",
                        self.name, self.x, self.y, self.esphome_id, text,
                    ),
                }
            }
            ElementPayload::Image(_) => format!(
                "\t// {}\n\tit.image({}, {}, id({}));\n",
                self.name, self.x, self.y, self.esphome_id,
            ),
            ElementPayload::Animation(_) => format!(
                "\t// {}\n\tid({}).next_frame();\n\tit.image({}, {}, id({}));\n",
                self.name, self.esphome_id, self.x, self.y, self.esphome_id,
            ),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/element.rs"]
mod tests;
