//! wl-graph: connection graph layer for waterlevel.
//!
//! Provides:
//! - Undirected, symmetric adjacency between containers
//! - Breadth-first connected-component discovery
//! - Structural validation of the adjacency relation
//!
//! # Example
//!
//! ```
//! use wl_core::ContainerId;
//! use wl_graph::{ConnectionGraph, component_of};
//!
//! let (a, b, c) = (ContainerId::new(1), ContainerId::new(2), ContainerId::new(3));
//! let mut graph = ConnectionGraph::new();
//! graph.add_node(a);
//! graph.add_node(b);
//! graph.add_node(c);
//! graph.add_edge(a, b);
//!
//! assert_eq!(component_of(&graph, a).len(), 2);
//! assert_eq!(component_of(&graph, c), vec![c]);
//! ```

pub mod components;
pub mod error;
pub mod graph;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use components::{component_of, component_sizes, partition};
pub use error::{GraphError, GraphResult};
pub use graph::ConnectionGraph;
