//! Swarm data structures.
//!
//! A "swarm" is the collection of peers that announced the same info hash.
//! The tracker keeps all swarms in memory, indexed by info hash, and each
//! swarm keeps its peers indexed by peer ID.
//!
//! We can represent the data stored in memory with this JSON object:
//!
//! ```json
//! {
//!     "hashA": {
//!         "peer1": {
//!             "peerId": "peer1",
//!             "infoHash": "hashA",
//!             "publicIp": "1.2.3.4",
//!             "publicPort": "6000",
//!             "updated": 1672419840
//!         },
//!         "peer2": {
//!             "peerId": "peer2",
//!             "infoHash": "hashA",
//!             "publicIp": "5.6.7.8",
//!             "publicPort": "6001",
//!             "updated": 1672419845
//!         }
//!     }
//! }
//! ```
//!
//! That JSON object does not exist, it's only a representation of the
//! registry. The `updated` time is internal and it's never sent to clients.
//!
//! A peer lives in the registry while it keeps announcing. Every announce
//! resets its `updated` time. The [`manager`] removes peers that have not
//! announced for longer than the configured lifespan. There is no way for a
//! peer to leave a swarm explicitly.
pub mod manager;
pub mod repository;

use rendezvous_tracker_swarm_registry::RegistryRwLockParkingLot;

/// Alias for the swarm collection used by the tracker: an ordered map of
/// swarms behind a single read-write lock.
pub(crate) type Swarms = RegistryRwLockParkingLot;
