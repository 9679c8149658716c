//! Unlocked network state and the leveling algorithm.
//!
//! [`NetworkState`] is only ever reached through the lock held by
//! [`WaterNetwork`](crate::WaterNetwork). Each mutating method validates its
//! inputs and reads every level it will touch before changing anything, so a
//! returned error always means nothing was modified.

use std::collections::BTreeMap;
use tracing::debug;
use wl_core::{ContainerId, Real, Tolerances, ensure_finite, mean, nearly_equal};
use wl_graph::{ConnectionGraph, component_of, component_sizes, partition};

use crate::error::{NetworkError, NetworkResult};
use crate::status::{ContainerStatus, NetworkStatus};

#[derive(Debug, Default)]
pub(crate) struct NetworkState {
    /// Membership and pipes. Every registered container has a node here.
    graph: ConnectionGraph,
    /// Liquid level per container, keyed exactly like `graph`.
    levels: BTreeMap<ContainerId, Real>,
}

impl NetworkState {
    pub(crate) fn add_container(&mut self, id: ContainerId) -> NetworkResult<()> {
        if !self.graph.add_node(id) {
            return Err(NetworkError::DuplicateContainer { id });
        }
        self.levels.insert(id, 0.0);
        debug!(container = %id, "container added");
        Ok(())
    }

    pub(crate) fn add_water(&mut self, id: ContainerId, amount: Real) -> NetworkResult<()> {
        self.require(id)?;
        ensure_finite(amount, "amount")?;
        if amount < 0.0 {
            return Err(NetworkError::InvalidAmount { id, amount });
        }

        let group = component_of(&self.graph, id);
        let share = amount / group.len() as Real;
        let updated = group
            .iter()
            .map(|&member| {
                let level = ensure_finite(self.level(member)? + share, "container level")?;
                Ok((member, level))
            })
            .collect::<NetworkResult<Vec<_>>>()?;

        self.levels.extend(updated);
        debug!(
            container = %id,
            amount,
            group_size = group.len(),
            share,
            "water added"
        );
        Ok(())
    }

    pub(crate) fn connect(&mut self, a: ContainerId, b: ContainerId) -> NetworkResult<()> {
        self.require(a)?;
        self.require(b)?;
        if a == b {
            return Err(NetworkError::SelfConnection { id: a });
        }
        if self.graph.has_edge(a, b) {
            return Err(NetworkError::AlreadyConnected { a, b });
        }

        // The union component is known before the edge exists: a's group
        // plus b's group, unless they were already joined by another path.
        let mut group = component_of(&self.graph, a);
        if !group.contains(&b) {
            group.extend(component_of(&self.graph, b));
        }
        let levels = group
            .iter()
            .map(|&member| self.level(member))
            .collect::<NetworkResult<Vec<_>>>()?;
        let pooled = ensure_finite(mean(&levels)?, "container level")?;

        self.graph.add_edge(a, b);
        for &member in &group {
            self.levels.insert(member, pooled);
        }
        debug!(
            a = %a,
            b = %b,
            group_size = group.len(),
            level = pooled,
            "containers connected"
        );
        Ok(())
    }

    pub(crate) fn disconnect(&mut self, a: ContainerId, b: ContainerId) -> NetworkResult<()> {
        if !self.graph.remove_edge(a, b) {
            return Err(NetworkError::NotConnected { a, b });
        }
        debug!(a = %a, b = %b, "containers disconnected");
        Ok(())
    }

    pub(crate) fn level(&self, id: ContainerId) -> NetworkResult<Real> {
        self.require(id)?;
        self.levels
            .get(&id)
            .copied()
            .ok_or(NetworkError::MissingLevel { id })
    }

    pub(crate) fn group_of(&self, id: ContainerId) -> NetworkResult<Vec<ContainerId>> {
        self.require(id)?;
        let mut group = component_of(&self.graph, id);
        group.sort_unstable();
        Ok(group)
    }

    pub(crate) fn groups(&self) -> Vec<Vec<ContainerId>> {
        partition(&self.graph)
    }

    pub(crate) fn total_volume(&self) -> Real {
        self.levels.values().sum()
    }

    pub(crate) fn container_count(&self) -> usize {
        self.graph.node_count()
    }

    pub(crate) fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn status(&self) -> NetworkResult<NetworkStatus> {
        let sizes = component_sizes(&self.graph);
        let containers = self
            .graph
            .node_ids()
            .map(|id| {
                Ok(ContainerStatus {
                    id,
                    level: self.level(id)?,
                    neighbors: self
                        .graph
                        .neighbors(id)
                        .map(|set| set.iter().copied().collect())
                        .unwrap_or_default(),
                    group_size: sizes.get(&id).copied().unwrap_or(1),
                })
            })
            .collect::<NetworkResult<Vec<_>>>()?;
        Ok(NetworkStatus { containers })
    }

    /// Verify that the three views of the network agree and that every
    /// group is level.
    pub(crate) fn check_invariants(&self, tol: Tolerances) -> NetworkResult<()> {
        self.graph.validate()?;

        for id in self.graph.node_ids() {
            let level = self.level(id)?;
            ensure_finite(level, "container level")?;
        }
        if let Some(&stray) = self.levels.keys().find(|id| !self.graph.contains(**id)) {
            return Err(NetworkError::UnknownContainer { id: stray });
        }

        for group in self.groups() {
            let Some((&first, rest)) = group.split_first() else {
                continue;
            };
            let level_a = self.level(first)?;
            for &other in rest {
                let level_b = self.level(other)?;
                if !nearly_equal(level_a, level_b, tol) {
                    return Err(NetworkError::UnequalLevels {
                        a: first,
                        b: other,
                        level_a,
                        level_b,
                    });
                }
            }
        }
        Ok(())
    }

    fn require(&self, id: ContainerId) -> NetworkResult<()> {
        if self.graph.contains(id) {
            Ok(())
        } else {
            Err(NetworkError::UnknownContainer { id })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wl_core::WlError;

    fn id(raw: i64) -> ContainerId {
        ContainerId::new(raw)
    }

    fn state_with(ids: &[i64]) -> NetworkState {
        let mut state = NetworkState::default();
        for &raw in ids {
            state.add_container(id(raw)).unwrap();
        }
        state
    }

    #[test]
    fn new_container_starts_empty() {
        let state = state_with(&[1]);
        assert_eq!(state.level(id(1)).unwrap(), 0.0);
        assert_eq!(state.container_count(), 1);
    }

    #[test]
    fn connect_within_existing_group_keeps_level() {
        // 1-2-3 chain, then close the triangle with 1-3
        let mut state = state_with(&[1, 2, 3]);
        state.connect(id(1), id(2)).unwrap();
        state.connect(id(2), id(3)).unwrap();
        state.add_water(id(1), 9.0).unwrap();
        state.connect(id(1), id(3)).unwrap();

        for raw in 1..=3 {
            assert!(nearly_equal(
                state.level(id(raw)).unwrap(),
                3.0,
                Tolerances::default()
            ));
        }
        assert_eq!(state.connection_count(), 3);
        assert_eq!(state.group_of(id(3)).unwrap().len(), 3);
    }

    #[test]
    fn failed_add_water_leaves_levels() {
        let mut state = state_with(&[1, 2]);
        state.connect(id(1), id(2)).unwrap();
        state.add_water(id(1), 4.0).unwrap();

        assert!(matches!(
            state.add_water(id(1), -1.0),
            Err(NetworkError::InvalidAmount { .. })
        ));
        assert!(matches!(
            state.add_water(id(1), Real::NAN),
            Err(NetworkError::Core(_))
        ));
        assert_eq!(state.level(id(1)).unwrap(), 2.0);
        assert_eq!(state.level(id(2)).unwrap(), 2.0);
    }

    #[test]
    fn overflowing_pour_is_rejected() {
        let mut state = state_with(&[1, 2]);
        state.connect(id(1), id(2)).unwrap();
        state.add_water(id(1), 1.6e308).unwrap();
        state.add_water(id(2), 1.6e308).unwrap();

        // Each pour is finite but the resulting level is not
        assert!(matches!(
            state.add_water(id(1), 1.6e308),
            Err(NetworkError::Core(WlError::NonFinite { .. }))
        ));
        assert_eq!(state.level(id(1)).unwrap(), 1.6e308);
        assert_eq!(state.level(id(2)).unwrap(), 1.6e308);
        assert!(state.check_invariants(Tolerances::default()).is_ok());
    }

    #[test]
    fn overflowing_merge_is_rejected() {
        let mut state = state_with(&[1, 2]);
        state.add_water(id(1), 1.5e308).unwrap();
        state.add_water(id(2), 1.5e308).unwrap();

        assert!(matches!(
            state.connect(id(1), id(2)),
            Err(NetworkError::Core(WlError::NonFinite { .. }))
        ));
        assert!(!state.graph.has_edge(id(1), id(2)));
        assert_eq!(state.level(id(1)).unwrap(), 1.5e308);
        assert_eq!(state.level(id(2)).unwrap(), 1.5e308);
        assert!(state.check_invariants(Tolerances::default()).is_ok());
    }

    #[test]
    fn zero_amount_is_a_no_op() {
        let mut state = state_with(&[1]);
        state.add_water(id(1), 0.0).unwrap();
        assert_eq!(state.level(id(1)).unwrap(), 0.0);
    }

    #[test]
    fn invariant_check_spots_uneven_group() {
        let mut state = state_with(&[1, 2]);
        state.connect(id(1), id(2)).unwrap();
        state.levels.insert(id(1), 3.0);

        assert!(matches!(
            state.check_invariants(Tolerances::default()),
            Err(NetworkError::UnequalLevels { .. })
        ));
    }

    #[test]
    fn invariant_check_spots_stray_level() {
        let mut state = state_with(&[1]);
        state.levels.insert(id(9), 0.0);

        assert_eq!(
            state.check_invariants(Tolerances::default()),
            Err(NetworkError::UnknownContainer { id: id(9) })
        );
    }

    #[test]
    fn invariant_check_spots_missing_level() {
        let mut state = state_with(&[1, 2]);
        state.levels.remove(&id(2));

        assert_eq!(
            state.check_invariants(Tolerances::default()),
            Err(NetworkError::MissingLevel { id: id(2) })
        );
        // Operations that would touch the missing entry fail before mutating
        assert!(state.connect(id(1), id(2)).is_err());
        assert!(!state.graph.has_edge(id(1), id(2)));
    }
}
