//! Core graph data structure.

use std::collections::{BTreeMap, BTreeSet};
use wl_core::ContainerId;

use crate::error::GraphResult;
use crate::validate;

/// Undirected connection graph between containers.
///
/// Every registered container has an entry, possibly with an empty neighbor
/// set, so the key set doubles as the membership registry. Edges are stored
/// in both directions. Ordered maps keep iteration ascending by id, which is
/// the order status listings need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionGraph {
    pub(crate) adjacency: BTreeMap<ContainerId, BTreeSet<ContainerId>>,
}

impl ConnectionGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node. Returns `false` if it was already present.
    pub fn add_node(&mut self, id: ContainerId) -> bool {
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id, BTreeSet::new());
        true
    }

    pub fn contains(&self, id: ContainerId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Insert the undirected edge `a - b`.
    ///
    /// Both endpoints must already be registered; returns `false` when either
    /// is missing or the edge already exists, leaving the graph untouched.
    pub fn add_edge(&mut self, a: ContainerId, b: ContainerId) -> bool {
        if !self.contains(a) || !self.contains(b) || self.has_edge(a, b) {
            return false;
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        true
    }

    /// Remove the undirected edge `a - b`. Returns `false` if it was absent.
    pub fn remove_edge(&mut self, a: ContainerId, b: ContainerId) -> bool {
        if !self.has_edge(a, b) {
            return false;
        }
        if let Some(set) = self.adjacency.get_mut(&a) {
            set.remove(&b);
        }
        if let Some(set) = self.adjacency.get_mut(&b) {
            set.remove(&a);
        }
        true
    }

    pub fn has_edge(&self, a: ContainerId, b: ContainerId) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbors| neighbors.contains(&b))
    }

    /// Direct neighbors of a node, ascending. `None` if the node is unknown.
    pub fn neighbors(&self, id: ContainerId) -> Option<&BTreeSet<ContainerId>> {
        self.adjacency.get(&id)
    }

    /// All registered node ids, ascending.
    pub fn node_ids(&self) -> impl Iterator<Item = ContainerId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        let directed: usize = self.adjacency.values().map(BTreeSet::len).sum();
        directed / 2
    }

    /// Check that the adjacency relation is symmetric and closed.
    pub fn validate(&self) -> GraphResult<()> {
        validate::validate_symmetry(&self.adjacency)
    }
}
