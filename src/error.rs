//! Error types for tree operations.

use thiserror::Error;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything a tree operation can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation needs a state the tree is not in, e.g. reading the root
    /// of an empty tree.
    #[error("precondition violated: {0}")]
    Precondition(&'static str),

    /// The requested entry is not stored in the tree.
    #[error("entry not found")]
    NotFound,

    /// A structural invariant of the tree is broken.
    ///
    /// This indicates a bug in the tree itself. It never escapes the public
    /// API: operations that hit it panic with this message.
    #[error("internal invariant violated: {0}")]
    Invariant(&'static str),
}
