//! `Error` response for the HTTP tracker.
//!
//! ```json
//! {"failureReason": "Invalid peer record: the peer ID is empty, src/servers/http/handlers/announce.rs:42:10"}
//! ```
use derive_more::Constructor;
use rendezvous_tracker_core::error::AnnounceError;
use serde::{Deserialize, Serialize};

/// `Error` response for the HTTP tracker.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Constructor)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// Human readable string which explains why the request failed.
    pub failure_reason: String,
}

impl From<AnnounceError> for Error {
    fn from(err: AnnounceError) -> Self {
        Error {
            failure_reason: format!("{err}"),
        }
    }
}
