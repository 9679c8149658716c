//! The shared, lock-guarded water network.

use std::sync::{Mutex, MutexGuard, PoisonError};
use wl_core::{ContainerId, Real, Tolerances};

use crate::error::NetworkResult;
use crate::state::NetworkState;
use crate::status::NetworkStatus;

/// A network of containers joined by pipes.
///
/// All state sits behind one mutex and every operation, reads included,
/// holds it for its full duration. Operations are therefore atomic with
/// respect to each other: a status query never sees half of a connect, and
/// two mutations are fully serialized. Share across threads with
/// `Arc<WaterNetwork>`.
#[derive(Debug, Default)]
pub struct WaterNetwork {
    state: Mutex<NetworkState>,
}

impl WaterNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new, empty container.
    ///
    /// Fails with `DuplicateContainer` if `id` is taken.
    pub fn add_container(&self, id: ContainerId) -> NetworkResult<()> {
        self.lock().add_container(id)
    }

    /// Pour `amount` into `id`, spreading it evenly over the container's
    /// group so each member rises by `amount / group_size`.
    ///
    /// Fails with `UnknownContainer` for an unregistered id, `InvalidAmount`
    /// for a negative amount, and `Core` for a non-finite one.
    pub fn add_water(&self, id: ContainerId, amount: Real) -> NetworkResult<()> {
        self.lock().add_water(id, amount)
    }

    /// Lay a pipe between `a` and `b` and level the merged group at the mean
    /// of its members' levels. Total volume is unchanged.
    ///
    /// Fails with `UnknownContainer`, `SelfConnection` or `AlreadyConnected`.
    pub fn connect(&self, a: ContainerId, b: ContainerId) -> NetworkResult<()> {
        self.lock().connect(a, b)
    }

    /// Remove the pipe between `a` and `b`. Levels are left as they are.
    ///
    /// Fails with `NotConnected` if there is no such pipe.
    pub fn disconnect(&self, a: ContainerId, b: ContainerId) -> NetworkResult<()> {
        self.lock().disconnect(a, b)
    }

    /// Level, neighbors and group size of every container, ascending by id.
    pub fn status(&self) -> NetworkResult<NetworkStatus> {
        self.lock().status()
    }

    pub fn level(&self, id: ContainerId) -> NetworkResult<Real> {
        self.lock().level(id)
    }

    /// Members of `id`'s group, ascending.
    pub fn group_of(&self, id: ContainerId) -> NetworkResult<Vec<ContainerId>> {
        self.lock().group_of(id)
    }

    pub fn group_size(&self, id: ContainerId) -> NetworkResult<usize> {
        self.lock().group_of(id).map(|group| group.len())
    }

    /// Every group, each ascending, ordered by smallest member.
    pub fn groups(&self) -> Vec<Vec<ContainerId>> {
        self.lock().groups()
    }

    pub fn total_volume(&self) -> Real {
        self.lock().total_volume()
    }

    pub fn container_count(&self) -> usize {
        self.lock().container_count()
    }

    pub fn connection_count(&self) -> usize {
        self.lock().connection_count()
    }

    /// Check adjacency symmetry, level bookkeeping and per-group equality.
    pub fn check_invariants(&self, tol: Tolerances) -> NetworkResult<()> {
        self.lock().check_invariants(tol)
    }

    // Every operation checks before it writes, so state behind a poisoned
    // lock is still whole.
    fn lock(&self) -> MutexGuard<'_, NetworkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
