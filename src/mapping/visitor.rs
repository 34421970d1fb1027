//! Mapping rule trait.

use super::finder::ObjectFinder;
use super::state::{MappingContext, MappingElement};
use crate::model::Model;

/// A rule mapping one kind of AST node into the model.
///
/// Mapping runs in two passes. `mapping_visit` is called once per node
/// during the tree walk, when referenced elements may not exist yet; a rule
/// that needs them queues the node with
/// [`MappingState::push_to_resolve`](super::MappingState::push_to_resolve)
/// and receives it again in `reference_visit` once the whole tree is mapped.
pub trait MapperVisitor {
    /// Returns true if this rule handles `mapping`.
    fn can_visit(&self, model: &Model, mapping: &MappingElement<'_>) -> bool;

    /// First pass: fill in everything known from the node itself.
    fn mapping_visit<'a>(&self, ctx: &mut MappingContext<'a>, mapping: &MappingElement<'a>);

    /// Second pass: resolve references. The default does nothing.
    fn reference_visit<'a>(
        &self,
        _ctx: &mut MappingContext<'a>,
        _finder: &dyn ObjectFinder,
        _mapping: &MappingElement<'a>,
    ) {
    }
}
