//! Error types for source-driven tree builds.

use thiserror::Error;

/// Structured error types for tree builds.
///
/// Both variants mean the source violated the [`TreeSource`](super::TreeSource)
/// contract; a well-formed, finite, cycle-free source never fails a build.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BuildError {
    /// The source reported an identifier that was already placed in the tree
    #[error("Tree source revisited node '{id}'; the hierarchy contains a cycle or shared child")]
    CycleDetected { id: String },

    /// The source's hierarchy is deeper than the builder is willing to follow
    #[error("Tree source exceeded the maximum build depth of {limit}")]
    DepthExceeded { limit: usize },
}

impl BuildError {
    /// Check if this error indicates a cyclic or diamond-shaped source
    pub fn is_cycle(&self) -> bool {
        matches!(self, BuildError::CycleDetected { .. })
    }

    /// Check if this error indicates a source deeper than the build limit
    pub fn is_depth_exceeded(&self) -> bool {
        matches!(self, BuildError::DepthExceeded { .. })
    }
}

// Conversion from BuildError to the main Error type
impl From<BuildError> for crate::Error {
    fn from(err: BuildError) -> Self {
        crate::Error::Build(err)
    }
}
