//! # syster-mapping
//!
//! SysML v2 AST-to-model mapping rules and diagram description naming.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! naming    → Diagram description and creation tool names
//!   ↓
//! mapping   → Two-pass tree walk, mapping rules, object finder
//!   ↓
//! ast       → Node-key contract with the upstream parser
//!   ↓
//! model     → ElementId, ElementKind hierarchy, Element, Model
//! ```

// ============================================================================
// MODULES (dependency order: model → ast → mapping → naming)
// ============================================================================

/// Object-graph model: elements, metaclass hierarchy, ownership
pub mod model;

/// JSON node-tree contract: key names, text cleaning
pub mod ast;

/// AST-to-model mapping: tree walk, rules, reference resolution
pub mod mapping;

/// Diagram description naming
pub mod naming;

// Re-export commonly needed items
pub use mapping::{AstTreeParser, MappingError, MappingOptions, MappingOutcome};
pub use model::{Element, ElementId, ElementKind, Model};
pub use naming::{DescriptionNameGenerator, DescriptionNames};
