//! `Announce` request for the HTTP tracker.
//!
//! Data structures and logic for parsing the `announce` request body.
//!
//! ```json
//! {
//!     "peerId": "peer1",
//!     "infoHash": "hashA",
//!     "publicIp": "1.2.3.4",
//!     "publicPort": "6000"
//! }
//! ```
//!
//! Every field is a free-form string. Missing fields are parsed as empty
//! strings; the core rejects records with an empty `peerId` or `infoHash`.
use rendezvous_tracker_primitives::info_hash::InfoHash;
use rendezvous_tracker_primitives::peer::{Peer, PeerId};
use rendezvous_tracker_primitives::DurationSinceUnixEpoch;
use serde::{Deserialize, Serialize};

/// The `Announce` request body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announce {
    #[serde(default)]
    pub peer_id: String,
    #[serde(default)]
    pub info_hash: String,
    #[serde(default)]
    pub public_ip: String,
    #[serde(default)]
    pub public_port: String,
}

impl From<Announce> for Peer {
    /// The `updated` time is left at zero. The tracker assigns it when it
    /// handles the announce.
    fn from(request: Announce) -> Self {
        Peer {
            peer_id: PeerId::from(request.peer_id),
            info_hash: InfoHash::from(request.info_hash),
            public_ip: request.public_ip,
            public_port: request.public_port,
            updated: DurationSinceUnixEpoch::ZERO,
        }
    }
}
