//!
//! Pathdex: an in-memory tree index addressed by structural position keys.
//!
//! ## Core Concepts
//!
//! Pathdex represents an arbitrary-arity tree of (identifier, payload) pairs as one
//! flat, globally ordered collection:
//!
//! * **Position keys (`key::Key`)**: The structural address of a node. A key records the
//!   chain of ancestor keys, the node's depth, and its ordinal among its siblings. Keys
//!   are totally ordered so that the direct children of any node occupy one contiguous
//!   run of the key space.
//! * **Node identifiers (`id::NodeId`)**: Caller-assigned string identifiers attached to
//!   each node, resolvable back to a position key through a secondary index.
//! * **Trees (`tree::Tree`)**: The arena owning every node of one tree instance. All
//!   structure lives in two maps: an ordered map from key to node, and an identifier
//!   index from `NodeId` to key. "Children of N" is a single ordered-range query; no
//!   node stores a child list.
//! * **Sources (`builder::TreeSource`)**: An external supplier of root/children/payload
//!   data. [`builder::build_tree`] populates a `Tree` from a source in one pre-order
//!   pass.

pub mod builder;
pub mod id;
pub mod key;
pub mod tree;

pub use builder::{TreeSource, build_tree};
pub use id::NodeId;
pub use key::Key;
pub use tree::{NodeRef, Tree};

/// Result type used throughout the Pathdex library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Pathdex library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured tree-index errors from the tree module
    #[error(transparent)]
    Tree(tree::TreeError),

    /// Structured builder errors from the builder module
    #[error(transparent)]
    Build(builder::BuildError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Tree(_) => "tree",
            Error::Build(_) => "builder",
        }
    }

    /// Check if this error indicates a key that resolves to no node.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates an identifier collision.
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_duplicate_id(),
            _ => false,
        }
    }

    /// Check if this error came from a misbehaving tree source.
    pub fn is_source_error(&self) -> bool {
        matches!(self, Error::Build(_))
    }
}
