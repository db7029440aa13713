use crate::scene::element::{ElementKind, SceneElement};

/// Ordered collection of scene elements with single selection.
///
/// Created at scene load and replaced wholesale on reload. All mutation
/// happens synchronously from the UI turn, so the graph is plain owned
/// state with no interior locking.
#[derive(Debug, Default)]
pub struct SceneGraph {
    elements: Vec<SceneElement>,
    selected: Option<String>,
}

impl SceneGraph {
    /// Build an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from already-constructed elements.
    pub fn from_elements(elements: Vec<SceneElement>) -> Self {
        Self {
            elements,
            selected: None,
        }
    }

    /// All elements in insertion order.
    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    /// Mutable access to all elements.
    pub fn elements_mut(&mut self) -> &mut [SceneElement] {
        &mut self.elements
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the graph holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append an element. The caller assigns its z-order, typically via
    /// [`Self::next_zorder`].
    pub fn add(&mut self, element: SceneElement) {
        self.elements.push(element);
    }

    /// Z-order one past the current top.
    pub fn next_zorder(&self) -> i32 {
        self.elements
            .iter()
            .map(|e| e.zorder)
            .max()
            .map_or(0, |z| z + 1)
    }

    /// Remove and return the element at `index`; clears the selection if it
    /// pointed at the removed element. `None` when out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<SceneElement> {
        if index >= self.elements.len() {
            return None;
        }
        let removed = self.elements.remove(index);
        if self.selected.as_deref() == Some(removed.internal_id()) {
            self.selected = None;
        }
        Some(removed)
    }

    /// Swap the element at `index` with its predecessor. No-op at the
    /// boundary.
    pub fn move_up(&mut self, index: usize) {
        if index > 0 && index < self.elements.len() {
            self.elements.swap(index, index - 1);
        }
    }

    /// Swap the element at `index` with its successor. No-op at the
    /// boundary.
    pub fn move_down(&mut self, index: usize) {
        if index + 1 < self.elements.len() {
            self.elements.swap(index, index + 1);
        }
    }

    /// Select an element by internal id, or clear the selection.
    pub fn select(&mut self, internal_id: Option<&str>) {
        self.selected = match internal_id {
            Some(id) if self.elements.iter().any(|e| e.internal_id() == id) => {
                Some(id.to_string())
            }
            _ => None,
        };
    }

    /// The selected element, if any.
    pub fn selected(&self) -> Option<&SceneElement> {
        let id = self.selected.as_deref()?;
        self.elements.iter().find(|e| e.internal_id() == id)
    }

    /// Mutable access to the selected element, if any.
    pub fn selected_mut(&mut self) -> Option<&mut SceneElement> {
        let id = self.selected.clone()?;
        self.elements.iter_mut().find(|e| e.internal_id() == id)
    }

    /// Elements of one variant, in insertion order.
    pub fn elements_of(&self, kind: ElementKind) -> impl Iterator<Item = &SceneElement> {
        self.elements.iter().filter(move |e| e.kind() == kind)
    }

    /// Elements in paint order: stable sort on z-order, so ties keep
    /// insertion order.
    pub fn by_zorder(&self) -> Vec<&SceneElement> {
        let mut ordered: Vec<&SceneElement> = self.elements.iter().collect();
        ordered.sort_by_key(|e| e.zorder);
        ordered
    }

    /// Topmost element whose bounding box contains `coords`, if any.
    pub fn element_at(&self, coords: crate::foundation::core::Coord) -> Option<&SceneElement> {
        self.by_zorder()
            .into_iter()
            .rev()
            .find(|e| e.is_at(coords))
    }

    /// Default name for a newly dropped element of `kind`:
    /// `{kind}{count + 1}` over the current graph contents.
    ///
    /// Counts are recomputed each call, so names can repeat after removals;
    /// the graph never requires name uniqueness.
    pub fn next_name(&self, kind: ElementKind) -> String {
        let count = self.elements_of(kind).count();
        format!("{}{}", kind.as_str(), count + 1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/graph.rs"]
mod tests;
