//! Concurrent storage for swarms and their peers.
//!
//! A swarm is the set of peers that announced the same info hash. The
//! registry maps every info hash to its [`Swarm`](entry::Swarm) and offers
//! the operations a tracker needs: upsert a peer and get the swarm back,
//! take a snapshot of the whole registry, and remove inactive peers.
//!
//! There are two implementations of the [`Repository`](repository::Repository)
//! trait:
//!
//! - [`RegistryRwLockParkingLot`]: a single `parking_lot` read-write lock
//!   over an ordered map. Every operation is linearizable with respect to the
//!   whole registry. This is the one used in production.
//! - [`RegistryDashMap`]: a sharded map. Operations on different swarms don't
//!   block each other, and each swarm is linearizable on its own. A snapshot
//!   is consistent per swarm but not across swarms.
use std::collections::BTreeMap;
use std::sync::Arc;

use rendezvous_tracker_primitives::info_hash::InfoHash;
use rendezvous_tracker_primitives::peer::{self, PeerId};

pub mod entry;
pub mod repository;

pub type RegistryRwLockParkingLot = repository::RwLockParkingLot<entry::Swarm>;
pub type RegistryDashMap = repository::dash_map::DashMap;

/// The peers of one swarm indexed by peer ID.
pub type SwarmPeers = BTreeMap<PeerId, Arc<peer::Peer>>;

/// A point-in-time copy of the registry. Swarms without peers are never
/// included.
pub type RegistrySnapshot = BTreeMap<InfoHash, SwarmPeers>;
