use std::collections::HashMap;

use crate::assets::animation::{AnimationAsset, FrameCursor};
use crate::assets::font::FontAsset;
use crate::assets::image::ImageAsset;
use crate::foundation::core::Coord;
use crate::foundation::error::{SceneError, SceneResult};
use crate::foundation::ident::IdGen;
use crate::scene::element::{
    AnimationPayload, ElementPayload, ImagePayload, SceneElement, TextPayload,
};
use crate::scene::graph::SceneGraph;

/// Session-scoped asset lookup context.
///
/// Constructed once at startup from downloaded library manifests and passed
/// by reference to whatever needs asset lookup; torn down with the session.
/// Fonts without an explicit id are keyed by name.
#[derive(Clone, Debug, Default)]
pub struct AssetLibrary {
    fonts: HashMap<String, FontAsset>,
    images: HashMap<String, ImageAsset>,
    animations: HashMap<String, AnimationAsset>,
}

impl AssetLibrary {
    /// Build an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a font asset.
    pub fn insert_font(&mut self, font: FontAsset) {
        let key = font.id.clone().unwrap_or_else(|| font.name.clone());
        self.fonts.insert(key, font);
    }

    /// Register an image asset.
    pub fn insert_image(&mut self, image: ImageAsset) {
        self.images.insert(image.id.clone(), image);
    }

    /// Register an animation asset.
    pub fn insert_animation(&mut self, animation: AnimationAsset) {
        self.animations.insert(animation.id.clone(), animation);
    }

    /// Look up a font by id (or name for id-less fonts).
    pub fn font(&self, id: &str) -> Option<&FontAsset> {
        self.fonts.get(id)
    }

    /// Look up an image by id.
    pub fn image(&self, id: &str) -> Option<&ImageAsset> {
        self.images.get(id)
    }

    /// Look up an animation by id.
    pub fn animation(&self, id: &str) -> Option<&AnimationAsset> {
        self.animations.get(id)
    }

    /// Build a text element from a library font, named and z-ordered for
    /// dropping into `graph`.
    pub fn element_from_font(
        &self,
        font_id: &str,
        text: impl Into<String>,
        at: Coord,
        graph: &SceneGraph,
        ids: &mut dyn IdGen,
    ) -> SceneResult<SceneElement> {
        let font = self
            .font(font_id)
            .ok_or_else(|| SceneError::construction(format!("unknown font '{font_id}'")))?;
        let text = text.into();
        let bounds = font.text_bound(&text);
        let payload = ElementPayload::Text(TextPayload {
            font: font.clone(),
            text,
            bounds,
            color: None,
            align: None,
        });
        Ok(self.finish_element(payload, at, graph, ids))
    }

    /// Build an image element from a library image.
    pub fn element_from_image(
        &self,
        image_id: &str,
        at: Coord,
        graph: &SceneGraph,
        ids: &mut dyn IdGen,
    ) -> SceneResult<SceneElement> {
        let image = self
            .image(image_id)
            .ok_or_else(|| SceneError::construction(format!("unknown image '{image_id}'")))?;
        let payload = ElementPayload::Image(ImagePayload {
            image: image.clone(),
        });
        Ok(self.finish_element(payload, at, graph, ids))
    }

    /// Build an animation element from a library animation.
    pub fn element_from_animation(
        &self,
        animation_id: &str,
        at: Coord,
        graph: &SceneGraph,
        ids: &mut dyn IdGen,
    ) -> SceneResult<SceneElement> {
        let animation = self.animation(animation_id).ok_or_else(|| {
            SceneError::construction(format!("unknown animation '{animation_id}'"))
        })?;
        let payload = ElementPayload::Animation(AnimationPayload {
            animation: animation.clone(),
            cursor: FrameCursor::default(),
        });
        Ok(self.finish_element(payload, at, graph, ids))
    }

    fn finish_element(
        &self,
        payload: ElementPayload,
        at: Coord,
        graph: &SceneGraph,
        ids: &mut dyn IdGen,
    ) -> SceneElement {
        let name = graph.next_name(payload.kind());
        let mut element = SceneElement::new(payload, at, graph.next_zorder(), ids);
        element.name = name;
        element
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/library.rs"]
mod tests;
