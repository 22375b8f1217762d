//! `List` response for the HTTP tracker.
//!
//! A map from info hash to a map from peer ID to peer record:
//!
//! ```json
//! {
//!     "hashA": {
//!         "peer1": {"peerId": "peer1", "infoHash": "hashA", "publicIp": "1.2.3.4", "publicPort": "6000"}
//!     }
//! }
//! ```
use std::collections::BTreeMap;

use rendezvous_tracker_swarm_registry::RegistrySnapshot;
use serde::{Deserialize, Serialize};

use super::announce::PeerRecord;

/// The `List` response: all the swarms with their peers.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
#[serde(transparent)]
pub struct List {
    pub swarms: BTreeMap<String, BTreeMap<String, PeerRecord>>,
}

impl From<RegistrySnapshot> for List {
    fn from(snapshot: RegistrySnapshot) -> Self {
        let swarms = snapshot
            .into_iter()
            .map(|(info_hash, peers)| {
                let peers = peers
                    .into_iter()
                    .map(|(peer_id, peer)| (peer_id.to_string(), PeerRecord::from(peer.as_ref())))
                    .collect();
                (info_hash.to_string(), peers)
            })
            .collect();

        Self { swarms }
    }
}
