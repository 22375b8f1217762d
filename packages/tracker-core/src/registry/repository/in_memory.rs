use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use rendezvous_tracker_primitives::info_hash::InfoHash;
use rendezvous_tracker_primitives::peer;
use rendezvous_tracker_primitives::registry_metrics::RegistryMetrics;
use rendezvous_tracker_primitives::DurationSinceUnixEpoch;
use rendezvous_tracker_swarm_registry::repository::Repository;
use rendezvous_tracker_swarm_registry::RegistrySnapshot;

use crate::error::{AnnounceError, RecordField};
use crate::registry::Swarms;

/// The in-memory peer registry.
///
/// It's the only shared state of the tracker. Announces, snapshots and
/// sweeps all go through it, and each of them takes effect atomically.
#[derive(Debug, Default)]
pub struct InMemoryPeerRegistry {
    /// The in-memory swarms repository implementation.
    swarms: Arc<Swarms>,
}

impl InMemoryPeerRegistry {
    /// It registers (or refreshes) a peer and returns all the peers in its
    /// swarm, including the announced one.
    ///
    /// The peer `updated` time is set to `now`, whatever the caller put
    /// there.
    ///
    /// # Errors
    ///
    /// Will return an `AnnounceError::InvalidRecord` if the info hash or the
    /// peer ID are empty. In that case the registry is not modified.
    #[track_caller]
    pub fn announce(
        &self,
        peer: &mut peer::Peer,
        now: DurationSinceUnixEpoch,
    ) -> Result<Vec<Arc<peer::Peer>>, AnnounceError> {
        validate(peer)?;

        peer.touch(now);

        Ok(self.swarms.upsert_peer(peer))
    }

    /// It returns a copy of the whole registry. Swarms without peers are not
    /// included.
    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        self.swarms.get_snapshot()
    }

    /// It removes every peer whose last announce plus the `lifespan` is
    /// before `now`. Swarms left without peers are kept; see
    /// [`remove_peerless_swarms`](Self::remove_peerless_swarms).
    ///
    /// Returns the number of evicted peers.
    pub fn sweep(&self, now: DurationSinceUnixEpoch, lifespan: Duration) -> usize {
        let current_cutoff = now.saturating_sub(lifespan);

        self.swarms.remove_inactive_peers(current_cutoff)
    }

    /// It removes the swarms without peers and returns how many were removed.
    pub fn remove_peerless_swarms(&self) -> usize {
        self.swarms.remove_peerless_swarms()
    }

    /// Get the peers of a swarm.
    #[must_use]
    pub fn get_swarm_peers(&self, info_hash: &InfoHash) -> Vec<Arc<peer::Peer>> {
        self.swarms.get_swarm_peers(info_hash)
    }

    /// It calculates and returns the general [`RegistryMetrics`].
    #[must_use]
    pub fn get_registry_metrics(&self) -> RegistryMetrics {
        self.swarms.get_metrics()
    }
}

#[track_caller]
fn validate(peer: &peer::Peer) -> Result<(), AnnounceError> {
    let field = if peer.info_hash.is_empty() {
        RecordField::InfoHash
    } else if peer.peer_id.is_empty() {
        RecordField::PeerId
    } else {
        return Ok(());
    };

    Err(AnnounceError::InvalidRecord {
        field,
        location: Location::caller(),
    })
}
