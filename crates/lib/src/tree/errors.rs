//! Error types for tree-index operations.
//!
//! Plain lookups on the index report "not found" as an absent value, never as an
//! error. The variants here cover structural misuse of the mutation surface:
//! addressing a node that is not in the tree, removing something that is not a direct
//! child, or colliding on a caller-assigned identifier.

use thiserror::Error;

/// Structured error types for tree-index operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TreeError {
    /// A key or identifier argument resolved to no node in the tree
    #[error("No node in the tree at '{key}'")]
    UnknownKey { key: String },

    /// The removal target exists but is not a direct child of the given parent
    #[error("Node '{key}' is not a direct child of '{parent}'")]
    NotAChild { parent: String, key: String },

    /// The identifier is already carried by another live node
    #[error("Duplicate node identifier: {id}")]
    DuplicateId { id: String },
}

impl TreeError {
    /// Check if this error indicates a key or id that resolved to nothing
    pub fn is_not_found(&self) -> bool {
        matches!(self, TreeError::UnknownKey { .. })
    }

    /// Check if this error indicates an identifier collision
    pub fn is_duplicate_id(&self) -> bool {
        matches!(self, TreeError::DuplicateId { .. })
    }

    /// Check if this error indicates misuse of the removal surface
    pub fn is_structural_error(&self) -> bool {
        matches!(
            self,
            TreeError::NotAChild { .. } | TreeError::UnknownKey { .. }
        )
    }
}

// Conversion from TreeError to the main Error type
impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}
