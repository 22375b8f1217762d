use std::sync::Arc;

use rendezvous_tracker_primitives::info_hash::InfoHash;
use rendezvous_tracker_primitives::peer;
use rendezvous_tracker_primitives::registry_metrics::RegistryMetrics;
use rendezvous_tracker_primitives::DurationSinceUnixEpoch;
use rendezvous_tracker_swarm_registry::repository::Repository as _;
use rendezvous_tracker_swarm_registry::{RegistryDashMap, RegistryRwLockParkingLot, RegistrySnapshot};

/// Wraps every repository implementation so the same tests run against all
/// of them.
#[derive(Debug)]
pub(crate) enum Repo {
    RwLockParkingLot(RegistryRwLockParkingLot),
    DashMap(RegistryDashMap),
}

impl Repo {
    pub(crate) fn upsert_peer(&self, peer: &peer::Peer) -> Vec<Arc<peer::Peer>> {
        match self {
            Repo::RwLockParkingLot(repo) => repo.upsert_peer(peer),
            Repo::DashMap(repo) => repo.upsert_peer(peer),
        }
    }

    pub(crate) fn get_swarm_peers(&self, info_hash: &InfoHash) -> Vec<Arc<peer::Peer>> {
        match self {
            Repo::RwLockParkingLot(repo) => repo.get_swarm_peers(info_hash),
            Repo::DashMap(repo) => repo.get_swarm_peers(info_hash),
        }
    }

    pub(crate) fn get_snapshot(&self) -> RegistrySnapshot {
        match self {
            Repo::RwLockParkingLot(repo) => repo.get_snapshot(),
            Repo::DashMap(repo) => repo.get_snapshot(),
        }
    }

    pub(crate) fn get_metrics(&self) -> RegistryMetrics {
        match self {
            Repo::RwLockParkingLot(repo) => repo.get_metrics(),
            Repo::DashMap(repo) => repo.get_metrics(),
        }
    }

    pub(crate) fn remove_inactive_peers(&self, current_cutoff: DurationSinceUnixEpoch) -> usize {
        match self {
            Repo::RwLockParkingLot(repo) => repo.remove_inactive_peers(current_cutoff),
            Repo::DashMap(repo) => repo.remove_inactive_peers(current_cutoff),
        }
    }

    pub(crate) fn remove_peerless_swarms(&self) -> usize {
        match self {
            Repo::RwLockParkingLot(repo) => repo.remove_peerless_swarms(),
            Repo::DashMap(repo) => repo.remove_peerless_swarms(),
        }
    }
}
