//! Read-only snapshots of the network.

use std::fmt;
use wl_core::{ContainerId, Real};

/// One container as seen by a status query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerStatus {
    pub id: ContainerId,
    pub level: Real,
    /// Directly connected containers, ascending.
    pub neighbors: Vec<ContainerId>,
    /// Number of containers in this container's group, itself included.
    pub group_size: usize,
}

/// Snapshot of every container, ascending by id.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkStatus {
    pub containers: Vec<ContainerStatus>,
}

impl NetworkStatus {
    pub fn get(&self, id: ContainerId) -> Option<&ContainerStatus> {
        self.containers.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContainerStatus> {
        self.containers.iter()
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    pub fn total_volume(&self) -> Real {
        self.containers.iter().map(|c| c.level).sum()
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neighbors: Vec<String> = self.neighbors.iter().map(|n| n.to_string()).collect();
        write!(
            f,
            "container {}: level={:.3} neighbors=[{}] group_size={}",
            self.id,
            self.level,
            neighbors.join(", "),
            self.group_size
        )
    }
}

impl fmt::Display for NetworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for container in &self.containers {
            writeln!(f, "{container}")?;
        }
        Ok(())
    }
}
