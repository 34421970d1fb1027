//! AST-to-model mapping.
//!
//! ## Architecture
//!
//! ```text
//! JSON node tree
//!      │
//!      ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │ AstTreeParser::map_pass                                   │
//! │  - one Element per node, owned by the parent's element   │
//! │  - MapperVisitor::mapping_visit for each matching rule   │
//! │  - rules queue forward references in `to_resolve`        │
//! └──────────────────────────────────────────────────────────┘
//!      │
//!      ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │ AstTreeParser::resolve_pass                               │
//! │  - MapperVisitor::reference_visit per queued element     │
//! │  - ObjectFinder looks up referenced elements by name     │
//! └──────────────────────────────────────────────────────────┘
//!      │
//!      ▼
//! MappingOutcome { model, diagnostics }
//! ```
//!
//! Problems with individual nodes never abort a run: they are logged and
//! collected as [`MappingDiagnostic`]s, leaving the affected relation unset.
//!
//! ## Usage
//!
//! ```
//! use syster_mapping::mapping::AstTreeParser;
//!
//! let input = br#"{ "$type": "Package", "declaredName": "Vehicles" }"#;
//! let outcome = AstTreeParser::default().parse_slice(input).unwrap();
//! assert_eq!(outcome.model.element_count(), 1);
//! ```

mod error;
mod finder;
mod named;
mod options;
mod parser;
mod redefinition;
mod state;
mod visitor;

pub use error::MappingError;
pub use finder::{NameObjectFinder, ObjectFinder};
pub use named::NamedElementMapper;
pub use options::{IdStrategy, MappingOptions};
pub use parser::AstTreeParser;
pub use redefinition::RedefinitionMapper;
pub use state::{
    DiagnosticKind, MappingContext, MappingDiagnostic, MappingElement, MappingOutcome,
    MappingState, Severity,
};
pub use visitor::MapperVisitor;
