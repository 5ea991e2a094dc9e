//! Error type shared by every tree operation.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Insertion of a key that is already stored.
    #[error("duplicate key")]
    DuplicateKey,
    /// Removal of a key that is not stored, including removal from an empty tree.
    #[error("key not found")]
    NotFound,
    /// Reported by [`AvlTree::assert_valid`](crate::AvlTree::assert_valid) only.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, Error>;
