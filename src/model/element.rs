//! Element ids, elements, and relationship endpoints.

use std::sync::Arc;

use super::kind::ElementKind;

// ============================================================================
// IDs
// ============================================================================

/// Unique identifier for a model element.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub Arc<str>);

impl ElementId {
    /// Create a new element ID.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Generate a new UUID-based ID.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string().into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&ElementId> for ElementId {
    fn from(id: &ElementId) -> Self {
        id.clone()
    }
}

// ============================================================================
// RELATIONSHIP DATA
// ============================================================================

/// Source/target endpoints of a relationship element.
///
/// Either end may be unset while a mapping is in progress: a reference that
/// has not been resolved yet is `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelationshipData {
    pub source: Option<ElementId>,
    pub target: Option<ElementId>,
}

impl RelationshipData {
    pub fn new(source: impl Into<ElementId>, target: impl Into<ElementId>) -> Self {
        Self {
            source: Some(source.into()),
            target: Some(target.into()),
        }
    }

    /// Returns true once both ends are set.
    pub fn is_complete(&self) -> bool {
        self.source.is_some() && self.target.is_some()
    }
}

// ============================================================================
// ELEMENT
// ============================================================================

/// A model element with its properties.
#[derive(Clone, Debug)]
pub struct Element {
    /// Unique identifier.
    pub id: ElementId,
    /// The metatype.
    pub kind: ElementKind,
    /// The declared name (None for anonymous elements).
    pub declared_name: Option<Arc<str>>,
    /// Short name alias.
    pub declared_short_name: Option<Arc<str>>,
    /// The owning element's ID (None for root elements).
    pub owner: Option<ElementId>,
    /// IDs of directly owned elements, in ownership order.
    pub owned_elements: Vec<ElementId>,
    /// Present when this element is a relationship.
    pub relationship: Option<RelationshipData>,
}

impl Element {
    /// Create a new element with the given ID and kind.
    ///
    /// Relationship kinds start with empty endpoints.
    pub fn new(id: impl Into<ElementId>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            declared_name: None,
            declared_short_name: None,
            owner: None,
            owned_elements: Vec::new(),
            relationship: kind.is_relationship().then(RelationshipData::default),
        }
    }

    /// Set the declared name.
    pub fn with_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.declared_name = Some(name.into());
        self
    }

    /// Set the short name.
    pub fn with_short_name(mut self, short_name: impl Into<Arc<str>>) -> Self {
        self.declared_short_name = Some(short_name.into());
        self
    }

    /// Set the owner.
    pub fn with_owner(mut self, owner: impl Into<ElementId>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_owner_opt(mut self, owner: Option<ElementId>) -> Self {
        self.owner = owner;
        self
    }

    /// Set both relationship endpoints.
    pub fn with_relationship(
        mut self,
        source: impl Into<ElementId>,
        target: impl Into<ElementId>,
    ) -> Self {
        self.relationship = Some(RelationshipData::new(source, target));
        self
    }

    /// The name used for lookups: the declared name, falling back to the
    /// short name.
    pub fn name(&self) -> Option<&str> {
        self.declared_name
            .as_deref()
            .or(self.declared_short_name.as_deref())
    }

    /// Returns true if either the declared name or the short name is `name`.
    pub fn is_named(&self, name: &str) -> bool {
        self.declared_name.as_deref() == Some(name)
            || self.declared_short_name.as_deref() == Some(name)
    }

    pub fn source(&self) -> Option<&ElementId> {
        self.relationship.as_ref()?.source.as_ref()
    }

    pub fn target(&self) -> Option<&ElementId> {
        self.relationship.as_ref()?.target.as_ref()
    }

    fn relationship_mut(&mut self) -> &mut RelationshipData {
        self.relationship.get_or_insert_with(RelationshipData::default)
    }

    // ── Redefinition ────────────────────────────────────────────────

    fn is_redefinition(&self) -> bool {
        self.kind.is_subtype_of(ElementKind::Redefinition)
    }

    /// The feature doing the redefining (the relationship's source).
    pub fn redefining_feature(&self) -> Option<&ElementId> {
        self.is_redefinition().then(|| self.source()).flatten()
    }

    /// The feature being redefined (the relationship's target).
    pub fn redefined_feature(&self) -> Option<&ElementId> {
        self.is_redefinition().then(|| self.target()).flatten()
    }

    pub fn set_redefining_feature(&mut self, feature: Option<ElementId>) {
        self.relationship_mut().source = feature;
    }

    pub fn set_redefined_feature(&mut self, feature: Option<ElementId>) {
        self.relationship_mut().target = feature;
    }
}
