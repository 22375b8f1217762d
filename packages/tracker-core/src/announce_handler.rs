//! Announce handler.
//!
//! Handling `announce` requests is the most important task for a rendezvous
//! tracker.
//!
//! A swarm is a group of peers that share an interest in the same resource,
//! identified by an info hash. When a peer wants to find other peers it
//! announces itself to the swarm via the tracker. The tracker adds it to the
//! swarm (or refreshes it, if it was already there) and responds with the
//! list of peers in the swarm so that the peer can contact them directly.
//!
//! The tracker never relays data between peers and never checks that the
//! announced address is reachable.
//!
//! ```text
//! let announce_data = announce_handler.announce(&mut peer)?;
//! ```
//!
//! The returned struct is:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use rendezvous_tracker_primitives::info_hash::InfoHash;
//! use rendezvous_tracker_primitives::peer;
//!
//! pub struct AnnounceData {
//!     pub info_hash: InfoHash,
//!     pub peers: Vec<Arc<peer::Peer>>, // all the peers in the swarm, the announcing one included
//! }
//! ```
//!
//! Peers must announce again before their lifespan expires, otherwise the
//! reaper removes them from the swarm.
use std::sync::Arc;

use rendezvous_tracker_clock::clock::Time;
use rendezvous_tracker_primitives::info_hash::InfoHash;
use rendezvous_tracker_primitives::peer;

use super::registry::repository::in_memory::InMemoryPeerRegistry;
use crate::error::AnnounceError;
use crate::CurrentClock;

/// The data returned to the peer after an announce.
#[derive(Debug, PartialEq, Clone)]
pub struct AnnounceData {
    /// The swarm the peer announced to.
    pub info_hash: InfoHash,
    /// The peers in the swarm, including the announcing peer.
    pub peers: Vec<Arc<peer::Peer>>,
}

/// Handles `announce` requests from peers.
pub struct AnnounceHandler {
    /// Repository for in-memory peer data.
    in_memory_peer_registry: Arc<InMemoryPeerRegistry>,
}

impl AnnounceHandler {
    /// Creates a new `AnnounceHandler`.
    #[must_use]
    pub fn new(in_memory_peer_registry: &Arc<InMemoryPeerRegistry>) -> Self {
        Self {
            in_memory_peer_registry: in_memory_peer_registry.clone(),
        }
    }

    /// Processes an announce request from a peer.
    ///
    /// # Parameters
    ///
    /// - `peer`: The peer announcing itself. Its `updated` time is set to the
    ///   tracker's current time.
    ///
    /// # Errors
    ///
    /// Will return an `AnnounceError` if the peer record is not valid.
    pub fn announce(&self, peer: &mut peer::Peer) -> Result<AnnounceData, AnnounceError> {
        let peers = self.in_memory_peer_registry.announce(peer, CurrentClock::now())?;

        tracing::debug!("Announced: {peer:?}");

        Ok(AnnounceData {
            info_hash: peer.info_hash.clone(),
            peers,
        })
    }
}
