use anyhow::Context as _;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::foundation::core::{Coord, Rgba8};
use crate::foundation::error::SceneResult;

/// A straight-alpha RGBA8 pixel surface in row-major order.
///
/// This is the one pixel-buffer type in the crate: the rasterizer produces
/// surfaces, elements blit onto them, and the data-URL helpers convert them
/// to and from the embedded PNG form used by asset manifests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Allocate a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// Wrap an existing RGBA8 buffer. Length must be `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> SceneResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(crate::SceneError::construction(format!(
                "surface buffer length {} does not match {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Read one pixel; `None` outside the surface.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some(Rgba8 {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        })
    }

    /// Write one pixel; out-of-bounds writes are dropped.
    pub fn put(&mut self, x: u32, y: u32, px: Rgba8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.data[i] = px.r;
        self.data[i + 1] = px.g;
        self.data[i + 2] = px.b;
        self.data[i + 3] = px.a;
    }

    /// Copy `src` onto this surface with its top-left corner at `at`.
    ///
    /// Pixels are replaced outright, alpha included (canvas `putImageData`
    /// semantics): no blending, last write wins. Portions falling outside
    /// the destination are clipped.
    pub fn blit(&mut self, src: &Surface, at: Coord) {
        for sy in 0..src.height {
            let dy = at.y + sy as i32;
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            for sx in 0..src.width {
                let dx = at.x + sx as i32;
                if dx < 0 || dx >= self.width as i32 {
                    continue;
                }
                let si = ((sy * src.width + sx) * 4) as usize;
                let di = ((dy as u32 * self.width + dx as u32) * 4) as usize;
                self.data[di..di + 4].copy_from_slice(&src.data[si..si + 4]);
            }
        }
    }

    /// Encode as PNG bytes.
    pub fn to_png(&self) -> SceneResult<Vec<u8>> {
        let mut out = std::io::Cursor::new(Vec::new());
        image::write_buffer_with_format(
            &mut out,
            &self.data,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .context("encode surface as png")?;
        Ok(out.into_inner())
    }

    /// Encode as a `data:image/png;base64,...` URL.
    pub fn to_data_url(&self) -> SceneResult<String> {
        let png = self.to_png()?;
        Ok(format!("data:image/png;base64,{}", BASE64.encode(png)))
    }

    /// Decode an embedded base64 raster (any `data:image/*` payload the
    /// `image` crate can sniff) into a surface.
    pub fn from_data_url(url: &str) -> SceneResult<Self> {
        let payload = url
            .split_once("base64,")
            .map(|(_, rest)| rest)
            .unwrap_or(url);
        let bytes = BASE64
            .decode(payload.trim())
            .context("decode data-url base64 payload")?;
        let img = image::load_from_memory(&bytes)
            .context("decode data-url image bytes")?
            .to_rgba8();
        let (width, height) = img.dimensions();
        Self::from_rgba8(width, height, img.into_raw())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
