//! Error types for network operations.

use thiserror::Error;
use wl_core::{ContainerId, Real, WlError};
use wl_graph::GraphError;

/// Errors returned by [`WaterNetwork`](crate::WaterNetwork) operations.
///
/// All of these describe bad input or a request that does not fit the
/// current graph; none are transient. A failed call leaves the network
/// exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("Container {id} already exists")]
    DuplicateContainer { id: ContainerId },

    #[error("Unknown container {id}")]
    UnknownContainer { id: ContainerId },

    #[error("Containers {a} and {b} are already connected")]
    AlreadyConnected { a: ContainerId, b: ContainerId },

    #[error("Containers {a} and {b} are not connected")]
    NotConnected { a: ContainerId, b: ContainerId },

    #[error("Container {id} cannot be connected to itself")]
    SelfConnection { id: ContainerId },

    #[error("Invalid amount {amount} for container {id}: must be non-negative")]
    InvalidAmount { id: ContainerId, amount: Real },

    #[error("Container {id} has no level entry")]
    MissingLevel { id: ContainerId },

    #[error("Containers {a} ({level_a}) and {b} ({level_b}) share a group but not a level")]
    UnequalLevels {
        a: ContainerId,
        b: ContainerId,
        level_a: Real,
        level_b: Real,
    },

    #[error(transparent)]
    Core(#[from] WlError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
