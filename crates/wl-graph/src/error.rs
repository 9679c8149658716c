//! Graph-specific error types.

use thiserror::Error;
use wl_core::ContainerId;

pub type GraphResult<T> = Result<T, GraphError>;

/// Structural problems in the adjacency relation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge points at a container that has no adjacency entry.
    #[error("Container {from} is connected to unregistered container {to}")]
    DanglingEdge { from: ContainerId, to: ContainerId },

    /// `from -> to` exists but `to -> from` does not.
    #[error("Connection {from} -> {to} has no reverse entry")]
    AsymmetricEdge { from: ContainerId, to: ContainerId },

    /// A container lists itself as a neighbor.
    #[error("Container {id} is connected to itself")]
    SelfLoop { id: ContainerId },
}
