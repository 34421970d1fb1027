//! Tree walk driving the mapping rules.

use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use super::error::MappingError;
use super::finder::{NameObjectFinder, ObjectFinder};
use super::named::NamedElementMapper;
use super::options::MappingOptions;
use super::redefinition::RedefinitionMapper;
use super::state::{DiagnosticKind, MappingContext, MappingElement, MappingOutcome};
use super::visitor::MapperVisitor;
use crate::ast;
use crate::model::{Element, ElementKind};

/// Maps a JSON node tree into a [`Model`](crate::model::Model).
pub struct AstTreeParser {
    mappers: Vec<Box<dyn MapperVisitor>>,
    finder: Box<dyn ObjectFinder>,
    options: MappingOptions,
}

impl Default for AstTreeParser {
    fn default() -> Self {
        Self::new(MappingOptions::default())
    }
}

impl AstTreeParser {
    /// Create a parser with the built-in rules and the name-based finder.
    pub fn new(options: MappingOptions) -> Self {
        Self {
            mappers: vec![Box::new(NamedElementMapper), Box::new(RedefinitionMapper)],
            finder: Box::new(NameObjectFinder),
            options,
        }
    }

    /// Create a parser with no rules registered.
    pub fn empty(options: MappingOptions) -> Self {
        Self {
            mappers: Vec::new(),
            finder: Box::new(NameObjectFinder),
            options,
        }
    }

    /// Register an additional rule. Rules run in registration order.
    pub fn with_mapper(mut self, mapper: impl MapperVisitor + 'static) -> Self {
        self.mappers.push(Box::new(mapper));
        self
    }

    /// Replace the object finder used by the resolution pass.
    pub fn with_finder(mut self, finder: impl ObjectFinder + 'static) -> Self {
        self.finder = Box::new(finder);
        self
    }

    pub fn options(&self) -> &MappingOptions {
        &self.options
    }

    // ============================================================
    // Entry points
    // ============================================================

    /// Map a parsed node tree.
    pub fn parse_value(&self, root: &Value) -> Result<MappingOutcome, MappingError> {
        let mut ctx = MappingContext::new();
        self.map_pass(&mut ctx, root)?;
        if self.options.resolve_references {
            self.resolve_pass(&mut ctx);
        }
        info!(
            "Mapped {} elements with {} diagnostics",
            ctx.model.element_count(),
            ctx.state.diagnostics().len()
        );
        Ok(MappingOutcome {
            diagnostics: ctx.state.take_diagnostics(),
            model: ctx.model,
        })
    }

    /// Map a node tree from JSON bytes.
    pub fn parse_slice(&self, input: &[u8]) -> Result<MappingOutcome, MappingError> {
        let root: Value = serde_json::from_slice(input)?;
        self.parse_value(&root)
    }

    /// Map a node tree read from `reader`.
    pub fn parse_reader(&self, reader: impl Read) -> Result<MappingOutcome, MappingError> {
        let root: Value = serde_json::from_reader(reader)?;
        self.parse_value(&root)
    }

    /// Map a node tree stored in a JSON file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<MappingOutcome, MappingError> {
        let path = path.as_ref();
        debug!("Reading AST from {}", path.display());
        let file = std::fs::File::open(path)?;
        self.parse_reader(std::io::BufReader::new(file))
    }

    // ============================================================
    // Passes
    // ============================================================

    /// First pass: create an element per node and run `mapping_visit`.
    ///
    /// Nodes are visited breadth-first; every node's element is owned by its
    /// syntactic parent's element.
    pub fn map_pass<'a>(
        &self,
        ctx: &mut MappingContext<'a>,
        root: &'a Value,
    ) -> Result<(), MappingError> {
        match root {
            Value::Object(_) => ctx.state.push_to_map(MappingElement::new(root, None)),
            Value::Array(nodes) => {
                for node in nodes {
                    ctx.state.push_to_map(MappingElement::new(node, None));
                }
            }
            other => {
                return Err(MappingError::invalid_root(format!(
                    "expected an object or an array, found {other}"
                )));
            }
        }

        while let Some(mut mapping) = ctx.state.pop_to_map() {
            let Some(kind) = self.node_kind(ctx, mapping.main_node)? else {
                continue;
            };

            let id = self.options.element_id(ctx.model.element_count());
            ctx.model
                .add_element(Element::new(id.clone(), kind).with_owner_opt(mapping.parent.clone()));
            mapping.self_id = Some(id.clone());

            for child in ast::children(mapping.main_node) {
                ctx.state
                    .push_to_map(MappingElement::new(child, Some(id.clone())));
            }

            for mapper in &self.mappers {
                if mapper.can_visit(&ctx.model, &mapping) {
                    mapper.mapping_visit(ctx, &mapping);
                }
            }
        }
        Ok(())
    }

    /// Second pass: run `reference_visit` for every queued element.
    pub fn resolve_pass(&self, ctx: &mut MappingContext<'_>) {
        let mut index = 0;
        while let Some(mapping) = ctx.state.to_resolve().get(index).cloned() {
            for mapper in &self.mappers {
                if mapper.can_visit(&ctx.model, &mapping) {
                    mapper.reference_visit(ctx, self.finder.as_ref(), &mapping);
                }
            }
            index += 1;
        }
        debug!("Resolved {} pending references", index);
    }

    /// The metaclass of `node`, or `None` if the node is skipped.
    fn node_kind(
        &self,
        ctx: &mut MappingContext<'_>,
        node: &Value,
    ) -> Result<Option<ElementKind>, MappingError> {
        let Some(type_name) = ast::node_type(node) else {
            if !self.options.skip_unknown_types {
                return Err(MappingError::MissingType(node.to_string()));
            }
            ctx.state.report_warning(
                DiagnosticKind::MissingType,
                None,
                format!("Skipping node without {}: {}", ast::TYPE, node),
            );
            return Ok(None);
        };

        match ElementKind::from_type_name(type_name) {
            Some(kind) => Ok(Some(kind)),
            None if self.options.skip_unknown_types => {
                ctx.state.report_warning(
                    DiagnosticKind::UnknownType,
                    None,
                    format!("Skipping node of unknown type {type_name}"),
                );
                Ok(None)
            }
            None => Err(MappingError::UnknownType(type_name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::options::IdStrategy;
    use crate::model::ElementId;
    use serde_json::json;

    fn sequential() -> MappingOptions {
        MappingOptions {
            id_strategy: IdStrategy::Sequential,
            ..MappingOptions::default()
        }
    }

    #[test]
    fn test_invalid_root() {
        let parser = AstTreeParser::default();
        let err = parser.parse_value(&json!("text")).unwrap_err();
        assert!(matches!(err, MappingError::InvalidRoot(_)));
    }

    #[test]
    fn test_ownership_follows_tree() {
        let tree = json!({
            "$type": "Package",
            "declaredName": "P",
            "children": [
                { "$type": "PartDefinition", "declaredName": "A" },
                { "$type": "PartDefinition", "declaredName": "B" }
            ]
        });
        let outcome = AstTreeParser::new(sequential()).parse_value(&tree).unwrap();
        let model = &outcome.model;
        assert_eq!(model.roots, vec![ElementId::new("e0")]);
        let names: Vec<_> = model
            .owned_elements(&ElementId::new("e0"))
            .filter_map(|e| e.name())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_unknown_type_skips_subtree() {
        let tree = json!({
            "$type": "Package",
            "children": [
                { "$type": "Mystery", "children": [{ "$type": "PartUsage" }] },
                { "children": [] }
            ]
        });
        let outcome = AstTreeParser::default().parse_value(&tree).unwrap();
        assert_eq!(outcome.model.element_count(), 1);
        let kinds: Vec<_> = outcome.warnings().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![DiagnosticKind::UnknownType, DiagnosticKind::MissingType]
        );
    }

    #[test]
    fn test_strict_mode_rejects_missing_type() {
        let options = MappingOptions {
            skip_unknown_types: false,
            ..MappingOptions::default()
        };
        let tree = json!({ "$type": "Package", "children": [{ "declaredName": "x" }] });
        let err = AstTreeParser::new(options).parse_value(&tree).unwrap_err();
        assert!(matches!(err, MappingError::MissingType(_)));
    }

    #[test]
    fn test_strict_mode_rejects_unknown_type() {
        let options = MappingOptions {
            skip_unknown_types: false,
            ..MappingOptions::default()
        };
        let err = AstTreeParser::new(options)
            .parse_value(&json!([{ "$type": "Mystery" }]))
            .unwrap_err();
        assert!(matches!(err, MappingError::UnknownType(name) if name == "Mystery"));
    }
}
