//! `Announce` response for the HTTP tracker.
//!
//! ```json
//! {
//!     "infoHash": "hashA",
//!     "peers": [
//!         {"peerId": "peer1", "infoHash": "hashA", "publicIp": "1.2.3.4", "publicPort": "6000"}
//!     ]
//! }
//! ```
use rendezvous_tracker_core::announce_handler::AnnounceData;
use rendezvous_tracker_primitives::peer::Peer;
use serde::{Deserialize, Serialize};

/// A peer as it's sent to clients.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PeerRecord {
    pub peer_id: String,
    pub info_hash: String,
    pub public_ip: String,
    pub public_port: String,
}

impl From<&Peer> for PeerRecord {
    fn from(peer: &Peer) -> Self {
        Self {
            peer_id: peer.peer_id.to_string(),
            info_hash: peer.info_hash.to_string(),
            public_ip: peer.public_ip.clone(),
            public_port: peer.public_port.clone(),
        }
    }
}

/// The `Announce` response: the swarm the peer announced to.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Announce {
    pub info_hash: String,
    pub peers: Vec<PeerRecord>,
}

impl From<AnnounceData> for Announce {
    fn from(data: AnnounceData) -> Self {
        Self {
            info_hash: data.info_hash.to_string(),
            peers: data.peers.iter().map(|peer| PeerRecord::from(peer.as_ref())).collect(),
        }
    }
}
