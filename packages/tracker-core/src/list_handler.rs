//! List handler.
//!
//! The `list` request returns every swarm with all its peers. It's a
//! point-in-time copy of the registry: the caller can keep it for as long as
//! it wants without blocking announces and it will never see later changes.
//!
//! ## Example JSON Response
//!
//! The JSON representation of a sample `list` response would be like the
//! following:
//!
//! ```json
//! {
//!   "hashA": {
//!     "peer1": {"peerId": "peer1", "infoHash": "hashA", "publicIp": "1.2.3.4", "publicPort": "6000"},
//!     "peer2": {"peerId": "peer2", "infoHash": "hashA", "publicIp": "5.6.7.8", "publicPort": "6001"}
//!   }
//! }
//! ```
use std::sync::Arc;

use rendezvous_tracker_swarm_registry::RegistrySnapshot;

use super::registry::repository::in_memory::InMemoryPeerRegistry;

/// Handles list requests, providing a snapshot of all swarms.
pub struct ListHandler {
    /// The in-memory peer registry.
    in_memory_peer_registry: Arc<InMemoryPeerRegistry>,
}

impl ListHandler {
    #[must_use]
    pub fn new(in_memory_peer_registry: &Arc<InMemoryPeerRegistry>) -> Self {
        Self {
            in_memory_peer_registry: in_memory_peer_registry.clone(),
        }
    }

    /// It returns a snapshot of all the swarms with at least one peer.
    #[must_use]
    pub fn list(&self) -> RegistrySnapshot {
        self.in_memory_peer_registry.snapshot()
    }
}
