use std::collections::BTreeMap;
use std::sync::Arc;

use rendezvous_tracker_primitives::info_hash::InfoHash;
use rendezvous_tracker_primitives::peer;
use rendezvous_tracker_primitives::registry_metrics::RegistryMetrics;
use rendezvous_tracker_primitives::DurationSinceUnixEpoch;

use super::{Repository, RwLockParkingLot};
use crate::entry::Swarm;
use crate::RegistrySnapshot;

impl RwLockParkingLot<Swarm> {
    fn get_swarms(&self) -> parking_lot::RwLockReadGuard<'_, BTreeMap<InfoHash, Swarm>> {
        self.swarms.read()
    }

    fn get_swarms_mut(&self) -> parking_lot::RwLockWriteGuard<'_, BTreeMap<InfoHash, Swarm>> {
        self.swarms.write()
    }
}

impl Repository for RwLockParkingLot<Swarm> {
    fn upsert_peer(&self, peer: &peer::Peer) -> Vec<Arc<peer::Peer>> {
        let mut db = self.get_swarms_mut();

        let swarm = db.entry(peer.info_hash.clone()).or_default();

        swarm.upsert_peer(peer);

        swarm.get_peers()
    }

    fn get_swarm_peers(&self, info_hash: &InfoHash) -> Vec<Arc<peer::Peer>> {
        let db = self.get_swarms();

        match db.get(info_hash) {
            Some(swarm) => swarm.get_peers(),
            None => vec![],
        }
    }

    fn get_snapshot(&self) -> RegistrySnapshot {
        let db = self.get_swarms();

        db.iter()
            .filter(|(_, swarm)| !swarm.is_empty())
            .map(|(info_hash, swarm)| (info_hash.clone(), swarm.copy_peers()))
            .collect()
    }

    fn get_metrics(&self) -> RegistryMetrics {
        let mut metrics = RegistryMetrics::default();

        for swarm in self.get_swarms().values().filter(|swarm| !swarm.is_empty()) {
            metrics.swarms += 1;
            metrics.peers += swarm.get_peers_len() as u64;
        }

        metrics
    }

    fn remove_inactive_peers(&self, current_cutoff: DurationSinceUnixEpoch) -> usize {
        let mut db = self.get_swarms_mut();

        db.values_mut()
            .map(|swarm| swarm.remove_inactive_peers(current_cutoff))
            .sum()
    }

    fn remove_peerless_swarms(&self) -> usize {
        let mut db = self.get_swarms_mut();

        let before = db.len();

        db.retain(|_, swarm| !swarm.is_empty());

        before - db.len()
    }
}
