//! Peer struct used by the tracker to keep peers data.
//!
//! A sample peer:
//!
//! ```rust,no_run
//! use rendezvous_tracker_primitives::peer;
//! use rendezvous_tracker_primitives::DurationSinceUnixEpoch;
//!
//! peer::Peer {
//!     peer_id: "peer1".into(),
//!     info_hash: "hashA".into(),
//!     public_ip: "1.2.3.4".to_string(),
//!     public_port: "6000".to_string(),
//!     updated: DurationSinceUnixEpoch::new(1_669_397_478_934, 0),
//! };
//! ```
//!
//! The address fields are whatever the client claims they are. The tracker
//! never checks that they are valid or reachable network addresses.
use derive_more::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

use crate::info_hash::InfoHash;
use crate::DurationSinceUnixEpoch;

/// Client-supplied peer identifier. It's unique within a swarm.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, AsRef, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeerId(String);

impl PeerId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for PeerId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Peer record stored in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peer {
    /// ID used by the peer to identify itself inside the swarm.
    pub peer_id: PeerId,
    /// The swarm this peer belongs to.
    pub info_hash: InfoHash,
    /// The public IP the peer announced. Not validated.
    pub public_ip: String,
    /// The public port the peer announced. Not validated.
    pub public_port: String,
    /// The last time the tracker received an announce from this peer.
    ///
    /// It's always assigned by the tracker, never by the client.
    pub updated: DurationSinceUnixEpoch,
}

impl Peer {
    /// Sets the last time the peer was seen.
    pub fn touch(&mut self, now: DurationSinceUnixEpoch) {
        self.updated = now;
    }

    #[must_use]
    pub fn get_updated(&self) -> DurationSinceUnixEpoch {
        self.updated
    }
}

pub mod fixture {
    use super::{Peer, PeerId};
    use crate::info_hash::InfoHash;
    use crate::DurationSinceUnixEpoch;

    /// Builder used in tests to create peers.
    #[derive(PartialEq, Debug)]
    pub struct PeerBuilder {
        peer: Peer,
    }

    #[allow(clippy::derivable_impls)]
    impl Default for PeerBuilder {
        fn default() -> Self {
            Self { peer: Peer::default() }
        }
    }

    impl PeerBuilder {
        #[must_use]
        pub fn with_peer_id(mut self, peer_id: &str) -> Self {
            self.peer.peer_id = PeerId::from(peer_id);
            self
        }

        #[must_use]
        pub fn with_info_hash(mut self, info_hash: &str) -> Self {
            self.peer.info_hash = InfoHash::from(info_hash);
            self
        }

        #[must_use]
        pub fn with_public_address(mut self, ip: &str, port: &str) -> Self {
            ip.clone_into(&mut self.peer.public_ip);
            port.clone_into(&mut self.peer.public_port);
            self
        }

        #[must_use]
        pub fn last_updated_on(mut self, updated: DurationSinceUnixEpoch) -> Self {
            self.peer.updated = updated;
            self
        }

        #[must_use]
        pub fn build(self) -> Peer {
            self.into()
        }

        #[must_use]
        pub fn into(self) -> Peer {
            self.peer
        }
    }

    impl Default for Peer {
        fn default() -> Self {
            Self {
                peer_id: PeerId::from("peer1"),
                info_hash: InfoHash::from("hashA"),
                public_ip: "126.0.0.1".to_string(),
                public_port: "8080".to_string(),
                updated: DurationSinceUnixEpoch::new(1_669_397_478_934, 0),
            }
        }
    }
}
