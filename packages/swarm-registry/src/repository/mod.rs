use std::fmt::Debug;
use std::sync::Arc;

use rendezvous_tracker_primitives::info_hash::InfoHash;
use rendezvous_tracker_primitives::peer;
use rendezvous_tracker_primitives::registry_metrics::RegistryMetrics;
use rendezvous_tracker_primitives::DurationSinceUnixEpoch;

use crate::RegistrySnapshot;

pub mod dash_map;
pub mod rw_lock_parking_lot;

/// Storage for the swarms of the tracker.
///
/// Implementations must make every operation atomic with respect to the
/// swarms it touches: no caller can observe a peer record half-written or a
/// swarm half-cleaned.
pub trait Repository: Debug + Default + Sized + 'static {
    /// It inserts (or replaces if it's already in the swarm) the peer and
    /// returns all the peers of the peer's swarm, including the given one.
    ///
    /// The returned peers are read while holding the same lock used for the
    /// update, so they reflect the swarm right after the upsert.
    fn upsert_peer(&self, peer: &peer::Peer) -> Vec<Arc<peer::Peer>>;

    /// It returns the peers of a swarm, or an empty list if the swarm does not
    /// exist.
    fn get_swarm_peers(&self, info_hash: &InfoHash) -> Vec<Arc<peer::Peer>>;

    /// It returns a copy of the registry. The copy does not borrow the
    /// registry, so later changes are not visible through it.
    fn get_snapshot(&self) -> RegistrySnapshot;

    /// It returns aggregate metrics for all the swarms.
    fn get_metrics(&self) -> RegistryMetrics;

    /// It removes the peers updated before the cutoff time from all the
    /// swarms and returns how many were removed.
    fn remove_inactive_peers(&self, current_cutoff: DurationSinceUnixEpoch) -> usize;

    /// It removes the swarms without peers and returns how many were removed.
    fn remove_peerless_swarms(&self) -> usize;
}

/// Read-write lock wrapper for a collection of swarms.
#[derive(Default, Debug)]
pub struct RwLockParkingLot<T> {
    swarms: parking_lot::RwLock<std::collections::BTreeMap<InfoHash, T>>,
}
