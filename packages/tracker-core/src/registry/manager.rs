use std::sync::Arc;
use std::time::Duration;

use rendezvous_tracker_clock::clock::Time;
use rendezvous_tracker_configuration::Core;
use rendezvous_tracker_primitives::DurationSinceUnixEpoch;

use super::repository::in_memory::InMemoryPeerRegistry;
use crate::CurrentClock;

pub struct RegistryManager {
    /// The tracker configuration.
    config: Core,

    /// The in-memory peer registry.
    in_memory_peer_registry: Arc<InMemoryPeerRegistry>,
}

impl RegistryManager {
    #[must_use]
    pub fn new(config: &Core, in_memory_peer_registry: &Arc<InMemoryPeerRegistry>) -> Self {
        Self {
            config: config.clone(),
            in_memory_peer_registry: in_memory_peer_registry.clone(),
        }
    }

    /// Remove inactive peers and (optionally) peerless swarms.
    ///
    /// Returns the number of evicted peers.
    pub fn cleanup_peers(&self) -> usize {
        self.cleanup_peers_at(CurrentClock::now())
    }

    /// Same as [`RegistryManager::cleanup_peers`] but the current time is
    /// given by the caller, which owns the clock.
    pub fn cleanup_peers_at(&self, now: DurationSinceUnixEpoch) -> usize {
        let lifespan = Duration::from_secs(u64::from(self.config.tracker_policy.max_peer_timeout));

        let evicted = self.in_memory_peer_registry.sweep(now, lifespan);

        if self.config.tracker_policy.remove_peerless_swarms {
            let removed_swarms = self.in_memory_peer_registry.remove_peerless_swarms();

            if removed_swarms > 0 {
                tracing::debug!("Removed {removed_swarms} swarms without peers");
            }
        }

        evicted
    }
}
