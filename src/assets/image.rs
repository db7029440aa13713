use crate::render::surface::Surface;

/// A raster image asset as produced by the asset library pipeline.
///
/// The pixel payload travels as an embedded base64 data-URL; the scene core
/// treats it as opaque until an element needs pixels to draw.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageAsset {
    /// ESPHome id of the image resource.
    pub id: String,
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
    /// Asset display name.
    pub name: String,
    /// Source file path referenced by generated YAML.
    pub path: String,
    /// ESPHome image type, e.g. `RGB24`.
    #[serde(rename = "type", default = "default_image_type")]
    pub kind: String,
    /// Embedded base64 raster payload.
    pub dataurl: String,
}

fn default_image_type() -> String {
    "RGB24".to_string()
}

impl ImageAsset {
    /// Decode the embedded raster into a drawable surface.
    ///
    /// Returns `None` when the payload is absent or undecodable; callers
    /// treat that as "nothing to draw yet".
    pub fn surface(&self) -> Option<Surface> {
        if self.dataurl.is_empty() {
            return None;
        }
        match Surface::from_data_url(&self.dataurl) {
            Ok(surface) => Some(surface),
            Err(err) => {
                tracing::warn!(image = %self.id, %err, "undecodable image payload");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/image.rs"]
mod tests;
