//! Names of diagram descriptions and creation tools.
//!
//! Diagram descriptions are identified by readable strings combining the
//! diagram prefix, a role and a type:
//!
//! ```text
//! "GV Node PartUsage"
//! "GV Compartment PartUsage ownedAttribute"
//! "GV CompartmentItem PartUsage ownedAttribute"
//! "GV Edge Redefinition"
//! ```
//!
//! Creation tools are named after the metaclass they create, split into
//! words (`"New Part"` for `PartUsage`).

use std::sync::LazyLock;

use regex::Regex;

use crate::model::ElementKind;

/// Words of a mixed-case identifier: a capitalized or lowercase run, or a
/// lone capital.
static WORD_FINDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]?[a-z]+)|([A-Z])").expect("valid word pattern"));

/// Prefix of creation tool names when none is given.
pub const DEFAULT_CREATION_TOOL_PREFIX: &str = "New ";

/// Usage kinds whose creation tool keeps the `Usage` suffix.
const KEEP_USAGE_SUFFIX: &[ElementKind] = &[
    ElementKind::ConnectorAsUsage,
    ElementKind::BindingConnectorAsUsage,
    ElementKind::SuccessionAsUsage,
];

/// Naming scheme shared by diagram description providers.
pub trait DescriptionNames {
    /// Creation tool name: `prefix` followed by the words of `kind`'s name.
    fn creation_tool_name_with_prefix(&self, prefix: &str, kind: ElementKind) -> String;

    /// Creation tool name starting with `"New "`.
    fn creation_tool_name(&self, kind: ElementKind) -> String {
        self.creation_tool_name_with_prefix(DEFAULT_CREATION_TOOL_PREFIX, kind)
    }

    fn node_name(&self, type_name: &str) -> String;

    fn node_name_for_kind(&self, kind: ElementKind) -> String {
        self.node_name(kind.name())
    }

    /// Name of the compartment listing `reference` of `kind`.
    fn compartment_name(&self, kind: ElementKind, reference: &str) -> String;

    /// Name of the items shown in the compartment listing `reference` of `kind`.
    fn compartment_item_name(&self, kind: ElementKind, reference: &str) -> String;

    fn edge_name(&self, type_name: &str) -> String;
}

/// [`DescriptionNames`] for one diagram, identified by its prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionNameGenerator {
    diagram_prefix: String,
}

impl DescriptionNameGenerator {
    pub fn new(diagram_prefix: impl Into<String>) -> Self {
        Self {
            diagram_prefix: diagram_prefix.into(),
        }
    }

    pub fn diagram_prefix(&self) -> &str {
        &self.diagram_prefix
    }

    fn name(prefix: &str, role: &str, type_name: &str) -> String {
        format!("{prefix} {role} {type_name}")
    }
}

impl DescriptionNames for DescriptionNameGenerator {
    fn creation_tool_name_with_prefix(&self, prefix: &str, kind: ElementKind) -> String {
        let mut name = kind.name();
        if kind.is_usage() && !KEEP_USAGE_SUFFIX.contains(&kind) {
            name = name.strip_suffix("Usage").unwrap_or(name);
        }
        format!("{prefix}{}", split_mixed_case(name).join(" "))
    }

    fn node_name(&self, type_name: &str) -> String {
        Self::name(&self.diagram_prefix, "Node", type_name)
    }

    fn compartment_name(&self, kind: ElementKind, reference: &str) -> String {
        Self::name(
            &self.diagram_prefix,
            "Compartment",
            &format!("{kind} {reference}"),
        )
    }

    fn compartment_item_name(&self, kind: ElementKind, reference: &str) -> String {
        Self::name(
            &self.diagram_prefix,
            "CompartmentItem",
            &format!("{kind} {reference}"),
        )
    }

    fn edge_name(&self, type_name: &str) -> String {
        Self::name(&self.diagram_prefix, "Edge", type_name)
    }
}

/// Split a mixed-case identifier into words.
///
/// Characters that belong to no word (digits, `_`) are dropped:
/// `"ConnectorAsUsage"` → `["Connector", "As", "Usage"]`,
/// `"IOPort2"` → `["I", "O", "Port"]`.
pub fn split_mixed_case(text: &str) -> Vec<&str> {
    WORD_FINDER.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ConnectorAsUsage", vec!["Connector", "As", "Usage"])]
    #[case("IOPort2", vec!["I", "O", "Port"])]
    #[case("partUsage", vec!["part", "Usage"])]
    #[case("", vec![])]
    fn test_split_mixed_case(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_mixed_case(input), expected);
    }

    #[test]
    fn test_creation_tool_name_default_prefix() {
        let names = DescriptionNameGenerator::new("GV");
        assert_eq!(names.creation_tool_name(ElementKind::PartUsage), "New Part");
    }

    #[test]
    fn test_node_name() {
        let names = DescriptionNameGenerator::new("Pkg");
        assert_eq!(names.node_name("type"), "Pkg Node type");
        assert_eq!(
            names.node_name_for_kind(ElementKind::PartDefinition),
            "Pkg Node PartDefinition"
        );
    }
}
