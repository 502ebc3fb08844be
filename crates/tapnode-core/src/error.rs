//! Error types for tapnode.

use thiserror::Error;

use crate::object::NodeId;

/// Errors that can occur when addressing nodes in a scene.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// The node ID is invalid or the node has been removed.
    #[error("invalid or removed node ID {0:?}")]
    InvalidNodeId(NodeId),

    /// The node exists but is not of the requested concrete type.
    #[error("node {id:?} is not a {expected}")]
    NodeTypeMismatch {
        /// The node that was looked up.
        id: NodeId,
        /// The type name that was requested.
        expected: &'static str,
    },
}

/// A specialized Result type for node operations.
pub type Result<T> = std::result::Result<T, NodeError>;
