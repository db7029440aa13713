use crate::foundation::core::{Coord, Rgba8};
use crate::render::surface::Surface;

/// One character's placement metadata within a packed font bitmap.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Glyph {
    /// The character this glyph renders.
    pub glyph: char,
    /// Horizontal placement offset in pixels.
    pub offset_x: i32,
    /// Vertical placement offset in pixels.
    pub offset_y: i32,
    /// Glyph bitmap width in pixels.
    pub width: u32,
    /// Glyph bitmap height in pixels.
    pub height: u32,
    /// Index of this glyph's first pixel in the packed data array.
    pub start: usize,
}

/// Computed footprint of a rendered string.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub struct TextBound {
    /// Total width in pixels.
    pub width: u32,
    /// Total height in pixels.
    pub height: u32,
}

/// A bitmap font asset as produced by the asset library pipeline.
///
/// `data` packs every glyph's pixels as 0/1 values, concatenated at each
/// glyph's `start` offset in row-major order. The asset is constructed once
/// from manifest JSON and never mutated by the editor.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FontAsset {
    /// ESPHome id of the font resource, when the manifest carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Font family name.
    pub name: String,
    /// Source file path referenced by generated YAML.
    pub path: String,
    /// Point size the glyphs were rasterized at.
    pub height: u32,
    /// The character set covered by the glyph table.
    pub glyphstr: String,
    /// Glyph table; lookup is first-match-wins.
    pub glyphs: Vec<Glyph>,
    /// Packed 1-bit-per-pixel bitmap data stored as 0/1 bytes.
    pub data: Vec<u8>,
}

impl FontAsset {
    /// Find the first glyph matching `ch`.
    ///
    /// Duplicate entries are legal; later duplicates are unreachable.
    pub fn glyph_for(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.iter().find(|g| g.glyph == ch)
    }

    /// Compute the footprint of `text` without rendering it.
    ///
    /// Width is the sum of matched glyph widths; height is the maximum of
    /// `height + offset_y` over matched glyphs. Characters with no glyph
    /// entry contribute nothing. Placement offsets never affect width.
    pub fn text_bound(&self, text: &str) -> TextBound {
        let mut w = 0u32;
        let mut h = 0u32;
        for ch in text.chars() {
            let Some(glyph) = self.glyph_for(ch) else {
                continue;
            };
            w += glyph.width;
            let extent = glyph.height.saturating_add_signed(glyph.offset_y);
            if h < extent {
                h = extent;
            }
        }
        TextBound {
            width: w,
            height: h,
        }
    }

    /// Synthesize the bitmap of one glyph block.
    ///
    /// Returns `None` when the extent is empty or the font carries no data.
    /// The packed array is indexed row-major (`start + y*width + x`); value
    /// 1 is opaque white, 0 opaque black. Any other value is a
    /// data-integrity fault: it is reported and the pixel stays black.
    pub fn glyph_bitmap(&self, start: usize, width: u32, height: u32) -> Option<Surface> {
        if width == 0 || height == 0 || self.data.is_empty() {
            return None;
        }
        let mut out = Surface::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let index = start + (y * width + x) as usize;
                let px = match self.data.get(index) {
                    Some(1) => Rgba8::WHITE,
                    Some(0) => Rgba8::BLACK,
                    Some(other) => {
                        tracing::warn!(font = %self.name, index, value = other, "font bitmap cell outside 0/1");
                        Rgba8::BLACK
                    }
                    None => {
                        tracing::warn!(font = %self.name, index, len = self.data.len(), "font bitmap index out of range");
                        Rgba8::BLACK
                    }
                };
                out.put(x, y, px);
            }
        }
        Some(out)
    }

    /// Rasterize `text` into a fresh surface sized by [`Self::text_bound`].
    ///
    /// Returns `None` when the font carries no data. Glyphs are placed at
    /// `(cursor + offset_x, offset_y)` and the cursor advances by the glyph
    /// width, so overlapping placements are possible; later glyphs
    /// overwrite earlier pixels outright.
    pub fn render(&self, text: &str) -> Option<Surface> {
        if self.data.is_empty() {
            return None;
        }
        let bound = self.text_bound(text);
        let mut canvas = Surface::new(bound.width, bound.height);
        let mut cursor = 0i32;
        for ch in text.chars() {
            let Some(glyph) = self.glyph_for(ch) else {
                continue;
            };
            if let Some(block) = self.glyph_bitmap(glyph.start, glyph.width, glyph.height) {
                canvas.blit(&block, Coord::new(cursor + glyph.offset_x, glyph.offset_y));
            }
            cursor += glyph.width as i32;
        }
        Some(canvas)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
