//! Adjacency validation logic.

use std::collections::{BTreeMap, BTreeSet};
use wl_core::ContainerId;

use crate::error::{GraphError, GraphResult};

/// Every edge must point at a registered node, must not be a self loop, and
/// must have its reverse entry.
pub(crate) fn validate_symmetry(
    adjacency: &BTreeMap<ContainerId, BTreeSet<ContainerId>>,
) -> GraphResult<()> {
    for (&from, neighbors) in adjacency {
        for &to in neighbors {
            if from == to {
                return Err(GraphError::SelfLoop { id: from });
            }
            let Some(reverse) = adjacency.get(&to) else {
                return Err(GraphError::DanglingEdge { from, to });
            };
            if !reverse.contains(&from) {
                return Err(GraphError::AsymmetricEdge { from, to });
            }
        }
    }
    Ok(())
}
