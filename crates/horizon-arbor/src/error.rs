//! Error types for tree, document and model operations.

use thiserror::Error;

/// Errors produced by structural operations on node trees and documents.
///
/// Every operation that returns one of these has left the tree, the
/// document and any pending notification exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The requested parent is the node itself or one of its descendants.
    #[error("cannot make a node a child of itself or of one of its descendants")]
    Cycle,

    /// A child position lies outside the valid range.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of valid positions below the limit.
        len: usize,
    },

    /// The target node holds a scalar and cannot own children.
    #[error("node value is not a list or map")]
    InvalidContainer,

    /// A sibling in the same map already uses the key.
    #[error("key {key:?} is already used by a sibling")]
    KeyCollision {
        /// The colliding key.
        key: String,
    },

    /// The node is not a child of the given parent.
    #[error("node is not a child of the given parent")]
    NotAChild,

    /// The node handle is stale or belongs to another tree.
    #[error("invalid or discarded node id")]
    InvalidNode,

    /// The value cannot be turned into a key or name.
    #[error("value cannot be used as a key")]
    InvalidKey,

    /// A container slot no longer matches the node tree.
    #[error("document out of sync at {path}")]
    OutOfSync {
        /// Path of the first mismatching node.
        path: String,
    },
}

/// Result type for tree operations.
pub type TreeResult<T> = std::result::Result<T, TreeError>;
