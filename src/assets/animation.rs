use crate::foundation::core::Rgba8;
use crate::render::surface::Surface;

/// An animation asset: frame count plus packed RGB24 frame data.
///
/// `data` concatenates `frames` full frames, each `width * height` RGB24
/// pixels, in playback order. The `dataurl` carries a preview raster for
/// list thumbnails and is not used for frame extraction.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnimationAsset {
    /// ESPHome id of the animation resource.
    pub id: String,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Asset display name.
    pub name: String,
    /// Source file path referenced by generated YAML.
    pub path: String,
    /// Number of frames in `data`.
    pub frames: u32,
    /// Packed RGB24 frame pixels.
    pub data: Vec<u8>,
    /// Embedded base64 preview raster.
    pub dataurl: String,
}

/// Playback cursor over an [`AnimationAsset`].
///
/// The asset itself stays immutable; the cursor is transient editor state
/// advanced once per canvas redraw and never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameCursor {
    frame: u32,
}

impl FrameCursor {
    /// Current frame index.
    pub fn frame(self) -> u32 {
        self.frame
    }

    /// Step to the next frame, wrapping at the asset's frame count.
    pub fn advance(&mut self, asset: &AnimationAsset) {
        if asset.frames == 0 {
            self.frame = 0;
            return;
        }
        self.frame = (self.frame + 1) % asset.frames;
    }
}

impl AnimationAsset {
    /// Extract one frame as a drawable surface.
    ///
    /// Returns `None` when the asset carries no frame data; a truncated
    /// data array is additionally reported as a data-integrity fault.
    pub fn frame_surface(&self, frame: u32) -> Option<Surface> {
        if self.data.is_empty() || self.frames == 0 {
            return None;
        }
        let frame = frame % self.frames;
        let px_per_frame = (self.width * self.height) as usize;
        let base = frame as usize * px_per_frame * 3;
        if self.data.len() < base + px_per_frame * 3 {
            tracing::warn!(
                animation = %self.id,
                frame,
                len = self.data.len(),
                "animation data shorter than declared frame count"
            );
            return None;
        }
        let mut out = Surface::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let i = base + ((y * self.width + x) as usize) * 3;
                out.put(
                    x,
                    y,
                    Rgba8 {
                        r: self.data[i],
                        g: self.data[i + 1],
                        b: self.data[i + 2],
                        a: 255,
                    },
                );
            }
        }
        Some(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/animation.rs"]
mod tests;
