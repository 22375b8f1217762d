use std::sync::Arc;

use rendezvous_tracker_primitives::info_hash::InfoHash;
use rendezvous_tracker_primitives::peer;
use rendezvous_tracker_primitives::registry_metrics::RegistryMetrics;
use rendezvous_tracker_primitives::DurationSinceUnixEpoch;

use super::Repository;
use crate::entry::Swarm;
use crate::RegistrySnapshot;

/// Sharded map of swarms.
///
/// A swarm is only ever read or changed while holding its shard lock.
#[derive(Default, Debug)]
pub struct DashMap {
    swarms: dashmap::DashMap<InfoHash, Swarm>,
}

impl Repository for DashMap {
    fn upsert_peer(&self, peer: &peer::Peer) -> Vec<Arc<peer::Peer>> {
        let mut swarm = self.swarms.entry(peer.info_hash.clone()).or_default();

        swarm.upsert_peer(peer);

        swarm.get_peers()
    }

    fn get_swarm_peers(&self, info_hash: &InfoHash) -> Vec<Arc<peer::Peer>> {
        match self.swarms.get(info_hash) {
            Some(swarm) => swarm.get_peers(),
            None => vec![],
        }
    }

    fn get_snapshot(&self) -> RegistrySnapshot {
        self.swarms
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| (entry.key().clone(), entry.value().copy_peers()))
            .collect()
    }

    fn get_metrics(&self) -> RegistryMetrics {
        let mut metrics = RegistryMetrics::default();

        for entry in &self.swarms {
            if entry.value().is_empty() {
                continue;
            }
            metrics.swarms += 1;
            metrics.peers += entry.value().get_peers_len() as u64;
        }

        metrics
    }

    fn remove_inactive_peers(&self, current_cutoff: DurationSinceUnixEpoch) -> usize {
        let mut removed = 0;

        for mut entry in self.swarms.iter_mut() {
            removed += entry.value_mut().remove_inactive_peers(current_cutoff);
        }

        removed
    }

    fn remove_peerless_swarms(&self) -> usize {
        let mut removed = 0;

        self.swarms.retain(|_, swarm| {
            if swarm.is_empty() {
                removed += 1;
                false
            } else {
                true
            }
        });

        removed
    }
}
