//! Mapping rule for `Redefinition` nodes.
//!
//! The redefining feature is the syntactic parent and is set while walking
//! the tree. The redefined feature is named by `targetRef` and may be
//! declared later in the source, so it is resolved in the second pass.

use tracing::debug;

use super::finder::ObjectFinder;
use super::state::{DiagnosticKind, MappingContext, MappingElement};
use super::visitor::MapperVisitor;
use crate::ast;
use crate::model::{ElementKind, Model};

#[derive(Debug, Default, Clone, Copy)]
pub struct RedefinitionMapper;

impl MapperVisitor for RedefinitionMapper {
    fn can_visit(&self, model: &Model, mapping: &MappingElement<'_>) -> bool {
        mapping
            .self_id
            .as_ref()
            .and_then(|id| model.get(id))
            .is_some_and(|e| e.kind.is_subtype_of(ElementKind::Redefinition))
    }

    fn mapping_visit<'a>(&self, ctx: &mut MappingContext<'a>, mapping: &MappingElement<'a>) {
        let redefining = mapping
            .parent
            .as_ref()
            .and_then(|id| ctx.model.get(id))
            .filter(|parent| parent.kind.is_feature())
            .map(|parent| parent.id.clone());
        if redefining.is_none() {
            let owner_kind = mapping
                .parent
                .as_ref()
                .and_then(|id| ctx.model.get(id))
                .map_or("<none>", |parent| parent.kind.name());
            ctx.state.report_error(
                DiagnosticKind::InvalidOwner,
                mapping.self_id.clone(),
                format!("Redefinition owned by {owner_kind}, expected a Feature"),
            );
        }

        let Some(element) = mapping.self_id.as_ref().and_then(|id| ctx.model.get_mut(id)) else {
            return;
        };
        debug!("Add Redefinition to map for {}", element.id);

        element.set_redefining_feature(redefining);
        if let Some(name) = mapping
            .main_node
            .get(ast::TARGET_REF)
            .and_then(ast::text_of)
        {
            element.declared_name = Some(name.into());
        }

        ctx.state.push_to_resolve(mapping.clone());
    }

    fn reference_visit<'a>(
        &self,
        ctx: &mut MappingContext<'a>,
        finder: &dyn ObjectFinder,
        mapping: &MappingElement<'a>,
    ) {
        let target_ref = mapping.main_node.get(ast::TARGET_REF);
        if target_ref.is_none() {
            ctx.state.report_error(
                DiagnosticKind::MissingReferenceField,
                mapping.self_id.clone(),
                format!("Expected {} on node: {}", ast::TARGET_REF, mapping.main_node),
            );
        }

        let target = finder.find_object(&ctx.model, mapping, target_ref, ElementKind::Feature);
        let Some(element) = mapping.self_id.as_ref().and_then(|id| ctx.model.get_mut(id)) else {
            return;
        };

        match target {
            Some(target) => {
                debug!("Reference Redefinition {} to {}", element.id, target);
                element.set_redefined_feature(Some(target));
            }
            None => {
                let shown = target_ref.map_or_else(|| "<none>".to_string(), |r| r.to_string());
                ctx.state.report_warning(
                    DiagnosticKind::ReferenceNotFound,
                    mapping.self_id.clone(),
                    format!("Reference Redefinition not found: {shown}"),
                );
            }
        }
    }
}
