//! HTTP tracker.
//!
//! It's a small JSON API with a single resource:
//!
//! Method | Path     | Request body      | Response body
//! -------|----------|-------------------|----------------------------------
//! `POST` | `/peers` | a peer record     | the swarm the peer announced to
//! `GET`  | `/peers` | (none)            | every swarm with all its peers
//!
//! Announce request:
//!
//! ```json
//! {"peerId": "peer1", "infoHash": "hashA", "publicIp": "1.2.3.4", "publicPort": "6000"}
//! ```
//!
//! Announce response (`200 OK`):
//!
//! ```json
//! {
//!     "infoHash": "hashA",
//!     "peers": [{"peerId": "peer1", "infoHash": "hashA", "publicIp": "1.2.3.4", "publicPort": "6000"}]
//! }
//! ```
//!
//! A peer record with an empty `peerId` or `infoHash` is rejected with
//! `400 Bad Request`:
//!
//! ```json
//! {"failureReason": "Invalid peer record: the info hash is empty, ..."}
//! ```
//!
//! Bodies that are not JSON objects are rejected by the JSON extractor before
//! they reach the handler.
//!
//! List response (`200 OK`), a map from info hash to a map from peer ID to
//! peer record:
//!
//! ```json
//! {"hashA": {"peer1": {"peerId": "peer1", "infoHash": "hashA", "publicIp": "1.2.3.4", "publicPort": "6000"}}}
//! ```
pub mod handlers;
pub mod routes;
pub mod server;
pub mod test_helpers;

pub const HTTP_TRACKER_LOG_TARGET: &str = "HTTP TRACKER";
