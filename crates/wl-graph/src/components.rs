//! Connected-component discovery.
//!
//! All queries are breadth-first traversals over the adjacency relation with
//! a visited set, so each node is expanded at most once and the traversal
//! terminates on any finite graph, cycles included.

use std::collections::{BTreeMap, HashSet, VecDeque};
use wl_core::ContainerId;

use crate::graph::ConnectionGraph;

/// All containers reachable from `start` through any chain of connections,
/// `start` included, in discovery order.
///
/// Returns an empty vector if `start` is not registered.
pub fn component_of(graph: &ConnectionGraph, start: ContainerId) -> Vec<ContainerId> {
    if !graph.contains(start) {
        return Vec::new();
    }
    let mut visited = HashSet::from([start]);
    bfs_from(graph, start, &mut visited)
}

/// Split the graph into its connected components.
///
/// Each component is sorted ascending and components are ordered by their
/// smallest member.
pub fn partition(graph: &ConnectionGraph) -> Vec<Vec<ContainerId>> {
    let mut visited = HashSet::with_capacity(graph.node_count());
    let mut groups = Vec::new();

    // node_ids() is ascending, so the first unvisited id is the group minimum
    for id in graph.node_ids() {
        if !visited.insert(id) {
            continue;
        }
        let mut group = bfs_from(graph, id, &mut visited);
        group.sort_unstable();
        groups.push(group);
    }
    groups
}

/// Size of the component each container belongs to, in one pass.
pub fn component_sizes(graph: &ConnectionGraph) -> BTreeMap<ContainerId, usize> {
    let mut sizes = BTreeMap::new();
    for group in partition(graph) {
        let size = group.len();
        for id in group {
            sizes.insert(id, size);
        }
    }
    sizes
}

/// Expand from `start`, which the caller has already marked visited.
fn bfs_from(
    graph: &ConnectionGraph,
    start: ContainerId,
    visited: &mut HashSet<ContainerId>,
) -> Vec<ContainerId> {
    let mut order = vec![start];
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        let Some(neighbors) = graph.neighbors(current) else {
            continue;
        };
        for &next in neighbors {
            if visited.insert(next) {
                order.push(next);
                queue.push_back(next);
            }
        }
    }
    order
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn partition_covers_each_node_once(
            edges in prop::collection::vec((0_i64..12, 0_i64..12), 0..30)
        ) {
            let mut graph = ConnectionGraph::new();
            for n in 0..12 {
                graph.add_node(ContainerId::new(n));
            }
            for (a, b) in edges {
                if a != b {
                    graph.add_edge(ContainerId::new(a), ContainerId::new(b));
                }
            }

            let groups = partition(&graph);
            let total: usize = groups.iter().map(Vec::len).sum();
            prop_assert_eq!(total, 12);

            for group in &groups {
                for &member in group {
                    let mut found = component_of(&graph, member);
                    found.sort_unstable();
                    prop_assert_eq!(&found, group);
                }
            }
        }
    }
}
