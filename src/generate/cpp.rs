use crate::scene::element::{ElementKind, SceneElement};

/// Output emitted when there is nothing to draw.
pub const EMPTY_SCENE_CPP: &str =
    "//!\\ Scene is empty, add elements to canvas to generate sample lambda code";

/// Generate illustrative display-lambda code for a scene.
///
/// Unlike YAML generation this keeps every element: each placement draws,
/// so duplicates of one asset all contribute their own call. Buckets are
/// emitted in fixed order (text, image, animation) under comment headers,
/// skipping empty buckets. An empty scene yields the sentinel comment.
#[tracing::instrument(skip(elements), fields(count = elements.len()))]
pub fn generate_cpp(elements: &[SceneElement]) -> String {
    let mut cpp = String::new();
    for (header, kind) in [
        ("/* fonts */\n", ElementKind::Text),
        ("/* images */\n", ElementKind::Image),
        ("/* animations */\n", ElementKind::Animation),
    ] {
        let section: String = elements
            .iter()
            .filter(|e| e.kind() == kind)
            .map(|e| e.to_cpp())
            .collect();
        if !section.is_empty() {
            cpp.push_str(header);
            cpp.push_str(&section);
        }
    }

    if cpp.is_empty() {
        return EMPTY_SCENE_CPP.to_string();
    }
    cpp
}

#[cfg(test)]
#[path = "../../tests/unit/generate/cpp.rs"]
mod tests;
