//! Name-based lookup of referenced elements.
//!
//! Lookup order for a simple name:
//! 1. Enclosing namespaces of the referencing element, innermost first
//! 2. The whole model, in insertion order
//!
//! Qualified names (`A::B::c`) start from the first segment found the same
//! way and then descend through owned elements. Only namespaces match the
//! qualifier segments.

use rustc_hash::FxHashSet;
use serde_json::Value;
use tracing::{debug, trace};

use super::state::MappingElement;
use crate::ast;
use crate::model::{Element, ElementId, ElementKind, Model};

/// Finds the element a reference node points to.
pub trait ObjectFinder {
    /// Find an element of `kind` (or a subtype) named by `node`.
    ///
    /// `node` is the reference sub-node (e.g. `targetRef`); `None` when the
    /// referencing node has no such field.
    fn find_object(
        &self,
        model: &Model,
        mapping: &MappingElement<'_>,
        node: Option<&Value>,
        kind: ElementKind,
    ) -> Option<ElementId>;
}

/// Default [`ObjectFinder`] resolving the cleaned `$text` of a reference.
///
/// Neither the referencing element nor the element that syntactically owns
/// it is ever returned.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameObjectFinder;

impl NameObjectFinder {
    /// Resolve `name` relative to `scope` without an AST node.
    pub fn find_by_name(
        &self,
        model: &Model,
        scope: Option<&ElementId>,
        excluded: &[&ElementId],
        name: &str,
        kind: ElementKind,
    ) -> Option<ElementId> {
        let lookup = Lookup {
            model,
            scope,
            excluded,
        };
        let found = if name.contains("::") {
            lookup.qualified(name, kind)
        } else {
            lookup.simple(name, kind)
        };
        found.map(|e| e.id.clone())
    }
}

impl ObjectFinder for NameObjectFinder {
    fn find_object(
        &self,
        model: &Model,
        mapping: &MappingElement<'_>,
        node: Option<&Value>,
        kind: ElementKind,
    ) -> Option<ElementId> {
        let name = ast::text_of(node?)?;
        let excluded: Vec<&ElementId> = mapping
            .self_id
            .iter()
            .chain(mapping.parent.iter())
            .collect();
        let found = self.find_by_name(model, mapping.parent.as_ref(), &excluded, &name, kind);
        trace!("[FIND_OBJECT] name='{}' kind={} -> {:?}", name, kind, found);
        found
    }
}

struct Lookup<'m, 'x> {
    model: &'m Model,
    scope: Option<&'x ElementId>,
    excluded: &'x [&'x ElementId],
}

impl<'m> Lookup<'m, '_> {
    fn accepts(&self, element: &Element, name: &str, kind: ElementKind) -> bool {
        element.is_named(name)
            && element.kind.is_subtype_of(kind)
            && !self.excluded.contains(&&element.id)
    }

    /// First match among `candidates`, logging when the name is ambiguous.
    fn first_match(
        &self,
        candidates: impl Iterator<Item = &'m Element>,
        name: &str,
        kind: ElementKind,
    ) -> Option<&'m Element> {
        let mut matches = candidates.filter(|e| self.accepts(e, name, kind));
        let first = matches.next()?;
        let others = matches.count();
        if others > 0 {
            debug!(
                "Ambiguous reference '{}': {} further candidates, using {}",
                name, others, first.id
            );
        }
        Some(first)
    }

    fn simple(&self, name: &str, kind: ElementKind) -> Option<&'m Element> {
        let mut visited = FxHashSet::default();
        if let Some(scope) = self.scope {
            for namespace in self.model.owner_chain(scope) {
                if !visited.insert(&namespace.id) {
                    break;
                }
                if !namespace.kind.is_namespace() {
                    continue;
                }
                let owned = self.model.owned_elements(&namespace.id);
                if let Some(found) = self.first_match(owned, name, kind) {
                    return Some(found);
                }
            }
        }
        self.first_match(self.model.iter_elements(), name, kind)
    }

    fn qualified(&self, name: &str, kind: ElementKind) -> Option<&'m Element> {
        let segments: Vec<&str> = name.split("::").map(str::trim).collect();
        let (last, path) = segments.split_last()?;
        let (first, rest) = path.split_first()?;

        // Qualifiers name namespaces; relationships named after their
        // target text never qualify.
        let mut current = self.simple(first, ElementKind::Namespace)?;
        for segment in rest {
            let owned = self.model.owned_elements(&current.id);
            current = self.first_match(owned, segment, ElementKind::Namespace)?;
        }
        let owned = self.model.owned_elements(&current.id);
        self.first_match(owned, last, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// ```text
    /// Root
    /// ├── Vehicle { mass }
    /// └── Car { mass (redefining), speed }
    /// ```
    fn vehicles() -> Model {
        let mut model = Model::new();
        model.add_element(Element::new("root", ElementKind::Package).with_name("Root"));
        model.add_element(
            Element::new("vehicle", ElementKind::PartDefinition)
                .with_name("Vehicle")
                .with_owner("root"),
        );
        model.add_element(
            Element::new("vehicle_mass", ElementKind::AttributeUsage)
                .with_name("mass")
                .with_owner("vehicle"),
        );
        model.add_element(
            Element::new("car", ElementKind::PartDefinition)
                .with_name("Car")
                .with_owner("root"),
        );
        model.add_element(
            Element::new("car_mass", ElementKind::AttributeUsage)
                .with_name("mass")
                .with_owner("car"),
        );
        model.add_element(
            Element::new("car_speed", ElementKind::AttributeUsage)
                .with_name("speed")
                .with_owner("car"),
        );
        model
    }

    fn find(model: &Model, parent: &str, text: &str, kind: ElementKind) -> Option<String> {
        let node = json!({ "targetRef": { "$text": text } });
        let mapping = MappingElement::new(&node, Some(ElementId::new(parent))).with_self("redef");
        NameObjectFinder
            .find_object(model, &mapping, node.get(ast::TARGET_REF), kind)
            .map(|id| id.to_string())
    }

    #[test]
    fn test_excludes_referencing_feature() {
        let model = vehicles();
        assert_eq!(
            find(&model, "car_mass", "mass", ElementKind::Feature).as_deref(),
            Some("vehicle_mass")
        );
    }

    #[test]
    fn test_inner_scope_wins() {
        let model = vehicles();
        assert_eq!(
            find(&model, "car_speed", "mass", ElementKind::Feature).as_deref(),
            Some("car_mass")
        );
    }

    #[test]
    fn test_qualified_name() {
        let model = vehicles();
        assert_eq!(
            find(&model, "car_speed", "Root::Vehicle::mass", ElementKind::Feature).as_deref(),
            Some("vehicle_mass")
        );
        assert_eq!(
            find(&model, "car_speed", "Vehicle::mass", ElementKind::Feature).as_deref(),
            Some("vehicle_mass")
        );
        assert_eq!(
            find(&model, "car_speed", "Vehicle::speed", ElementKind::Feature),
            None
        );
    }

    #[test]
    fn test_qualifier_skips_same_named_relationship() {
        let mut model = vehicles();
        // `redefines Vehicle` is named after its target text
        model.add_element(
            Element::new("redef_vehicle", ElementKind::Redefinition)
                .with_name("Vehicle")
                .with_owner("car_speed"),
        );
        assert_eq!(
            find(&model, "car_speed", "Vehicle::mass", ElementKind::Feature).as_deref(),
            Some("vehicle_mass")
        );
    }

    #[test]
    fn test_first_candidate_wins_in_scope() {
        let mut model = vehicles();
        model.add_element(
            Element::new("car_speed_dup", ElementKind::AttributeUsage)
                .with_name("speed")
                .with_owner("car"),
        );
        assert_eq!(
            find(&model, "car_mass", "speed", ElementKind::Feature).as_deref(),
            Some("car_speed")
        );
    }

    #[test]
    fn test_first_candidate_wins_globally() {
        let mut model = vehicles();
        for (id, owner) in [("truck", "truck_def"), ("bus", "bus_def")] {
            model.add_element(
                Element::new(owner, ElementKind::PartDefinition).with_owner("root"),
            );
            model.add_element(
                Element::new(id, ElementKind::AttributeUsage)
                    .with_name("wheels")
                    .with_owner(owner),
            );
        }
        assert_eq!(
            find(&model, "car_mass", "wheels", ElementKind::Feature).as_deref(),
            Some("truck")
        );
    }

    #[test]
    fn test_kind_filter() {
        let model = vehicles();
        assert_eq!(find(&model, "car_speed", "Vehicle", ElementKind::Feature), None);
        assert_eq!(
            find(&model, "car_speed", "Vehicle", ElementKind::Definition).as_deref(),
            Some("vehicle")
        );
    }

    #[test]
    fn test_missing_node_or_text() {
        let model = vehicles();
        let node = json!({ "$type": "Redefinition" });
        let mapping = MappingElement::new(&node, Some(ElementId::new("car_mass")));
        assert_eq!(
            NameObjectFinder.find_object(&model, &mapping, None, ElementKind::Feature),
            None
        );
        let empty_ref = json!({ "$type": "Reference" });
        assert_eq!(
            NameObjectFinder.find_object(&model, &mapping, Some(&empty_ref), ElementKind::Feature),
            None
        );
    }

    #[test]
    fn test_quoted_name() {
        let mut model = vehicles();
        model.add_element(
            Element::new("top_speed", ElementKind::AttributeUsage)
                .with_name("top speed")
                .with_owner("vehicle"),
        );
        assert_eq!(
            find(&model, "car_mass", "'top speed'", ElementKind::Feature).as_deref(),
            Some("top_speed")
        );
    }
}
