//! Error types for mapping operations.

use thiserror::Error;

/// Errors that stop a whole mapping run.
///
/// Problems confined to a single node (missing or unresolved references)
/// are not errors; they are collected as
/// [`MappingDiagnostic`](super::MappingDiagnostic)s and mapping continues.
#[derive(Debug, Error)]
pub enum MappingError {
    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(String),

    /// IO error while reading the node tree.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The tree root is neither a node nor an array of nodes.
    #[error("Invalid root: {0}")]
    InvalidRoot(String),

    /// A node carries a `$type` that names no known metaclass.
    #[error("Unknown node type: {0}")]
    UnknownType(String),

    /// A node carries no `$type` tag.
    #[error("Node without type tag: {0}")]
    MissingType(String),
}

impl MappingError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create an invalid root error.
    pub fn invalid_root(message: impl Into<String>) -> Self {
        Self::InvalidRoot(message.into())
    }
}

impl From<serde_json::Error> for MappingError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}
