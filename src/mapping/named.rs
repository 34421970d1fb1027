//! Names every mapped element from its `declaredName`/`declaredShortName`.

use super::state::{MappingContext, MappingElement};
use super::visitor::MapperVisitor;
use crate::ast;
use crate::model::Model;

#[derive(Debug, Default, Clone, Copy)]
pub struct NamedElementMapper;

impl MapperVisitor for NamedElementMapper {
    fn can_visit(&self, model: &Model, mapping: &MappingElement<'_>) -> bool {
        mapping.self_id.as_ref().is_some_and(|id| model.get(id).is_some())
            && (ast::has(mapping.main_node, ast::DECLARED_NAME)
                || ast::has(mapping.main_node, ast::DECLARED_SHORT_NAME))
    }

    fn mapping_visit<'a>(&self, ctx: &mut MappingContext<'a>, mapping: &MappingElement<'a>) {
        let Some(element) = mapping.self_id.as_ref().and_then(|id| ctx.model.get_mut(id)) else {
            return;
        };
        if let Some(name) = ast::string_field(mapping.main_node, ast::DECLARED_NAME) {
            element.declared_name = Some(name.into());
        }
        if let Some(short) = ast::string_field(mapping.main_node, ast::DECLARED_SHORT_NAME) {
            element.declared_short_name = Some(short.into());
        }
    }
}
