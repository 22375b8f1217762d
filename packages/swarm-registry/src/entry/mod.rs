//! A swarm entry: the peers that announced the same info hash.
use std::sync::Arc;

use rendezvous_tracker_primitives::peer::{self, PeerId};
use rendezvous_tracker_primitives::DurationSinceUnixEpoch;

use crate::SwarmPeers;

/// The peers of a single swarm, ordered by peer ID.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Swarm {
    peers: SwarmPeers,
}

impl Swarm {
    /// It inserts the peer, or replaces the record if a peer with the same ID
    /// is already in the swarm.
    ///
    /// The stored `updated` time never goes backwards: if the new record is
    /// older than the stored one (for example, because the system clock was
    /// adjusted) the stored time is kept.
    pub fn upsert_peer(&mut self, peer: &peer::Peer) -> Arc<peer::Peer> {
        let mut peer = peer.clone();

        if let Some(previous) = self.peers.get(&peer.peer_id) {
            peer.updated = peer.updated.max(previous.updated);
        }

        let peer = Arc::new(peer);

        self.peers.insert(peer.peer_id.clone(), peer.clone());

        peer
    }

    /// It returns all the peers in the swarm.
    #[must_use]
    pub fn get_peers(&self) -> Vec<Arc<peer::Peer>> {
        self.peers.values().cloned().collect()
    }

    #[must_use]
    pub fn get_peer(&self, peer_id: &PeerId) -> Option<Arc<peer::Peer>> {
        self.peers.get(peer_id).cloned()
    }

    #[must_use]
    pub fn get_peers_len(&self) -> usize {
        self.peers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    /// It returns a copy of the peers. Records are shared and immutable, so
    /// later changes in the swarm are never visible through the copy.
    #[must_use]
    pub fn copy_peers(&self) -> SwarmPeers {
        self.peers.clone()
    }

    /// It removes the peers that have not been updated since the cutoff
    /// time. A peer updated exactly at the cutoff time is kept.
    ///
    /// Returns the number of removed peers.
    pub fn remove_inactive_peers(&mut self, current_cutoff: DurationSinceUnixEpoch) -> usize {
        let before = self.peers.len();

        self.peers.retain(|_, peer| peer.get_updated() >= current_cutoff);

        before - self.peers.len()
    }
}
