//! Mapping worklists and diagnostics.

use std::collections::VecDeque;
use std::sync::Arc;

use serde_json::Value;

use crate::model::{ElementId, Model};

// ============================================================================
// MAPPING ELEMENT
// ============================================================================

/// One unit of mapping work: an AST node and the elements mapped for it.
#[derive(Clone, Debug)]
pub struct MappingElement<'a> {
    /// The AST node being mapped.
    pub main_node: &'a Value,
    /// The element created for `main_node` (None until created).
    pub self_id: Option<ElementId>,
    /// The element created for the node's syntactic parent.
    pub parent: Option<ElementId>,
}

impl<'a> MappingElement<'a> {
    pub fn new(main_node: &'a Value, parent: Option<ElementId>) -> Self {
        Self {
            main_node,
            self_id: None,
            parent,
        }
    }

    pub fn with_self(mut self, id: impl Into<ElementId>) -> Self {
        self.self_id = Some(id.into());
        self
    }
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

/// What went wrong while mapping a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A node lacks a reference field its mapper expects.
    MissingReferenceField,
    /// A reference names no element of the expected kind.
    ReferenceNotFound,
    /// A relationship sits under a parent of the wrong metaclass.
    InvalidOwner,
    /// A node's `$type` names no known metaclass.
    UnknownType,
    /// A node carries no `$type` tag.
    MissingType,
}

/// A non-fatal problem found while mapping.
#[derive(Clone, Debug)]
pub struct MappingDiagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    /// The element the problem is attached to, if one was created.
    pub element: Option<ElementId>,
    pub message: Arc<str>,
}

// ============================================================================
// STATE
// ============================================================================

/// Worklists of an in-progress mapping.
///
/// Mappers only append: nodes to map go to `to_map`, elements whose
/// references must wait for the whole graph go to `to_resolve`.
#[derive(Debug, Default)]
pub struct MappingState<'a> {
    to_map: VecDeque<MappingElement<'a>>,
    to_resolve: Vec<MappingElement<'a>>,
    diagnostics: Vec<MappingDiagnostic>,
}

impl<'a> MappingState<'a> {
    pub fn new() -> Self {
        Self {
            to_map: VecDeque::new(),
            to_resolve: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Queue a node for the mapping pass.
    pub fn push_to_map(&mut self, mapping: MappingElement<'a>) {
        self.to_map.push_back(mapping);
    }

    pub(crate) fn pop_to_map(&mut self) -> Option<MappingElement<'a>> {
        self.to_map.pop_front()
    }

    /// Queue a mapped element for the resolution pass.
    pub fn push_to_resolve(&mut self, mapping: MappingElement<'a>) {
        self.to_resolve.push(mapping);
    }

    /// Elements waiting for the resolution pass, in queue order.
    pub fn to_resolve(&self) -> &[MappingElement<'a>] {
        &self.to_resolve
    }

    pub fn diagnostics(&self) -> &[MappingDiagnostic] {
        &self.diagnostics
    }

    pub(crate) fn take_diagnostics(&mut self) -> Vec<MappingDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Record an error-level diagnostic.
    pub fn report_error(
        &mut self,
        kind: DiagnosticKind,
        element: Option<ElementId>,
        message: impl Into<Arc<str>>,
    ) {
        let message = message.into();
        tracing::error!(?kind, element = ?element, "{}", message);
        self.diagnostics.push(MappingDiagnostic {
            severity: Severity::Error,
            kind,
            element,
            message,
        });
    }

    /// Record a warning-level diagnostic.
    pub fn report_warning(
        &mut self,
        kind: DiagnosticKind,
        element: Option<ElementId>,
        message: impl Into<Arc<str>>,
    ) {
        let message = message.into();
        tracing::warn!(?kind, element = ?element, "{}", message);
        self.diagnostics.push(MappingDiagnostic {
            severity: Severity::Warning,
            kind,
            element,
            message,
        });
    }
}

/// The model under construction together with its worklists.
#[derive(Debug, Default)]
pub struct MappingContext<'a> {
    pub model: Model,
    pub state: MappingState<'a>,
}

impl<'a> MappingContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Result of a complete mapping run.
#[derive(Debug, Default)]
pub struct MappingOutcome {
    pub model: Model,
    pub diagnostics: Vec<MappingDiagnostic>,
}

impl MappingOutcome {
    pub fn errors(&self) -> impl Iterator<Item = &MappingDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &MappingDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Returns true if no diagnostic was reported.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
