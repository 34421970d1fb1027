//! Standalone object-graph model.
//!
//! Mapping rules write into a [`Model`]: elements stored by ID with their
//! ownership tree and relationship endpoints. Relationships are elements
//! themselves, as in the KerML metamodel.
//!
//! ```text
//! Model
//! ├── elements: IndexMap<ElementId, Element>  (preserves insertion order)
//! └── roots: Vec<ElementId>
//! ```

mod element;
mod kind;

pub use element::{Element, ElementId, RelationshipData};
pub use kind::ElementKind;

use indexmap::IndexMap;

/// A SysML/KerML model built by the mapping pipeline.
#[derive(Clone, Debug, Default)]
pub struct Model {
    /// All elements by ID (IndexMap preserves insertion order).
    pub elements: IndexMap<ElementId, Element>,
    /// Root element IDs (elements without owner).
    pub roots: Vec<ElementId>,
}

impl Model {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element to the model.
    ///
    /// If the element has an owner already in the model, it is appended to
    /// that owner's `owned_elements`; otherwise it becomes a root.
    pub fn add_element(&mut self, element: Element) -> ElementId {
        let id = element.id.clone();
        match element.owner.as_ref().and_then(|o| self.elements.get_mut(o)) {
            Some(owner) => {
                if !owner.owned_elements.contains(&id) {
                    owner.owned_elements.push(id.clone());
                }
            }
            None => self.roots.push(id.clone()),
        }
        self.elements.insert(id.clone(), element);
        id
    }

    /// Get an element by ID.
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Get a mutable element by ID.
    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Iterate over all elements in insertion order.
    pub fn iter_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Iterate over the elements directly owned by `id`.
    pub fn owned_elements<'a>(&'a self, id: &ElementId) -> impl Iterator<Item = &'a Element> {
        self.get(id)
            .map(|e| e.owned_elements.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|child| self.elements.get(child))
    }

    /// Iterate over `id` and its owners, innermost first.
    pub fn owner_chain<'a>(&'a self, id: &ElementId) -> impl Iterator<Item = &'a Element> {
        std::iter::successors(self.get(id), |e| {
            e.owner.as_ref().and_then(|o| self.elements.get(o))
        })
    }

    /// Elements of the given kind (or a subtype of it).
    pub fn elements_of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &Element> {
        self.elements
            .values()
            .filter(move |e| e.kind.is_subtype_of(kind))
    }

    /// Get the number of elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Get the number of relationship elements.
    pub fn relationship_count(&self) -> usize {
        self.elements
            .values()
            .filter(|e| e.relationship.is_some())
            .count()
    }

    /// Names of `id` and its owners joined with `::`, outermost first.
    ///
    /// Anonymous owners are skipped.
    pub fn qualified_name(&self, id: &ElementId) -> Option<String> {
        let mut segments: Vec<&str> = self.owner_chain(id).filter_map(|e| e.name()).collect();
        if segments.is_empty() {
            return None;
        }
        segments.reverse();
        Some(segments.join("::"))
    }
}
