//! The info hash is the key that groups peers into a swarm.
//!
//! Unlike `BitTorrent` info hashes it is not a 20-byte SHA-1 digest: clients
//! can use any non-empty string to name the resource or topic they share.
use derive_more::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

/// Opaque identifier of a swarm.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, AsRef, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InfoHash(String);

impl InfoHash {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for InfoHash {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
