use std::collections::HashSet;

use crate::scene::element::{ElementKind, SceneElement};

/// Output emitted when there is nothing to describe.
pub const EMPTY_SCENE_YAML: &str =
    "#/!\\ Scene is empty, add elements to canvas to generate ESPHome YAML config";

/// Generate the ESPHome YAML fragment describing a scene's assets.
///
/// YAML describes assets, not placements: elements sharing an `esphomeId`
/// collapse to the first occurrence, whatever their on-screen positions.
/// Survivors are bucketed by variant under `fonts:` / `images:` /
/// `animations:` (non-empty buckets only, list order preserved).
/// An empty scene yields the sentinel comment instead.
#[tracing::instrument(skip(elements), fields(count = elements.len()))]
pub fn generate_yaml(elements: &[SceneElement]) -> String {
    let mut seen = HashSet::new();
    let unique: Vec<&SceneElement> = elements
        .iter()
        .filter(|e| seen.insert(e.esphome_id.clone()))
        .collect();

    let mut yaml = String::new();
    for (key, kind) in [
        ("fonts:\n", ElementKind::Text),
        ("images:\n", ElementKind::Image),
        ("animations:\n", ElementKind::Animation),
    ] {
        let section: String = unique
            .iter()
            .filter(|e| e.kind() == kind)
            .map(|e| e.to_yaml())
            .collect();
        if !section.is_empty() {
            yaml.push_str(key);
            yaml.push_str(&section);
        }
    }

    if yaml.is_empty() {
        return EMPTY_SCENE_YAML.to_string();
    }
    yaml
}

#[cfg(test)]
#[path = "../../tests/unit/generate/yaml.rs"]
mod tests;
