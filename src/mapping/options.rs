//! Mapping options

use serde::{Deserialize, Serialize};

use crate::model::ElementId;

/// How ids are assigned to mapped elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random UUID v4 per element.
    #[default]
    Uuid,
    /// `e0`, `e1`, ... in mapping order. Stable across runs on the same input.
    Sequential,
}

/// Options for an [`AstTreeParser`](super::AstTreeParser) run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingOptions {
    /// Run the resolution pass after mapping
    pub resolve_references: bool,
    /// Skip nodes with an unknown or missing `$type` (false = fail the run)
    pub skip_unknown_types: bool,
    /// Element id assignment
    pub id_strategy: IdStrategy,
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            resolve_references: true,
            skip_unknown_types: true,
            id_strategy: IdStrategy::Uuid,
        }
    }
}

impl MappingOptions {
    /// Id for the `index`-th mapped element.
    pub fn element_id(&self, index: usize) -> ElementId {
        match self.id_strategy {
            IdStrategy::Uuid => ElementId::generate(),
            IdStrategy::Sequential => ElementId::new(format!("e{index}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MappingOptions::default();
        assert!(options.resolve_references);
        assert!(options.skip_unknown_types);
        assert_eq!(options.id_strategy, IdStrategy::Uuid);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let options: MappingOptions =
            serde_json::from_str(r#"{ "id_strategy": "sequential" }"#).unwrap();
        assert_eq!(options.id_strategy, IdStrategy::Sequential);
        assert!(options.resolve_references);
        assert_eq!(options.element_id(3).as_str(), "e3");
    }
}
