//! Persisted scene format.
//!
//! The wire shapes mirror the web editor's stored JSON: camelCase common
//! fields plus a flat, `type`-tagged variant payload per element. Gesture
//! state never crosses this boundary.

use crate::foundation::core::Coord;
use crate::foundation::error::{SceneError, SceneResult};
use crate::foundation::ident::IdGen;
use crate::scene::element::{ElementPayload, NO_ESPHOME_ID, NO_NAME, SceneElement};

/// Version stamp written into newly saved scene files.
pub const SCENE_FORMAT_VERSION: &str = "1.0.0";

/// Wire shape of one persisted element.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementJson {
    /// Stable unique id; synthesized when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<String>,
    /// ESPHome asset id; defaults to the payload's asset id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub esphome_id: Option<String>,
    /// User-chosen name; defaults to a sentinel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Left edge in unscaled display pixels.
    pub x: i32,
    /// Top edge in unscaled display pixels.
    pub y: i32,
    /// Paint/list order key.
    pub zorder: i32,
    /// Explicit width override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Explicit height override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Variant payload, tagged by `type`.
    #[serde(flatten)]
    pub payload: ElementPayload,
}

/// A complete persisted scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneFile {
    /// Format version stamp.
    pub version: String,
    /// Persisted elements in insertion order.
    pub elements: Vec<ElementJson>,
}

impl SceneElement {
    /// Rebuild an element from its parsed wire shape.
    ///
    /// `ids` supplies the internal id when the wire shape carries none.
    pub fn from_json(json: ElementJson, ids: &mut dyn IdGen) -> Self {
        let esphome_id = json
            .esphome_id
            .or_else(|| json.payload.asset_id().map(str::to_string))
            .unwrap_or_else(|| NO_ESPHOME_ID.to_string());
        Self::from_parts(
            json.internal_id.unwrap_or_else(|| ids.next_id()),
            esphome_id,
            json.name.unwrap_or_else(|| NO_NAME.to_string()),
            Coord::new(json.x, json.y),
            json.width,
            json.height,
            json.zorder,
            json.payload,
        )
    }

    /// Parse an element from raw JSON.
    ///
    /// A missing `type` discriminator is a construction error (fatal to
    /// this element); any other malformation is a serialization error.
    pub fn from_value(value: serde_json::Value, ids: &mut dyn IdGen) -> SceneResult<Self> {
        if value.get("type").is_none() {
            return Err(SceneError::construction("type must be set"));
        }
        let json: ElementJson =
            serde_json::from_value(value).map_err(|e| SceneError::serde(e.to_string()))?;
        Ok(Self::from_json(json, ids))
    }

    /// Serialize to the persisted wire shape.
    ///
    /// Every field read at construction round-trips; transient interaction
    /// state does not exist on the wire.
    pub fn to_json(&self) -> ElementJson {
        ElementJson {
            internal_id: Some(self.internal_id().to_string()),
            esphome_id: Some(self.esphome_id.clone()),
            name: Some(self.name.clone()),
            x: self.x,
            y: self.y,
            zorder: self.zorder,
            width: self.width,
            height: self.height,
            payload: self.payload().clone(),
        }
    }
}

impl SceneFile {
    /// Capture a scene graph as a persisted file.
    pub fn from_graph(graph: &crate::SceneGraph) -> Self {
        Self {
            version: SCENE_FORMAT_VERSION.to_string(),
            elements: graph.elements().iter().map(SceneElement::to_json).collect(),
        }
    }

    /// Rebuild a scene graph, drawing missing internal ids from `ids`.
    pub fn into_graph(self, ids: &mut dyn IdGen) -> crate::SceneGraph {
        crate::SceneGraph::from_elements(
            self.elements
                .into_iter()
                .map(|json| SceneElement::from_json(json, ids))
                .collect(),
        )
    }

    /// Parse a scene file from JSON text.
    pub fn from_json_str(text: &str) -> SceneResult<Self> {
        serde_json::from_str(text).map_err(|e| SceneError::serde(e.to_string()))
    }

    /// Serialize to pretty JSON text.
    pub fn to_json_string(&self) -> SceneResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SceneError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/wire.rs"]
mod tests;
