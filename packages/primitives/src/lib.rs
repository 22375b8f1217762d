//! Primitive types for the rendezvous tracker.
//!
//! This module contains the basic data structures shared by the tracker
//! crates: the identifiers that partition the registry ([`InfoHash`](info_hash::InfoHash)
//! and [`PeerId`](peer::PeerId)), the announced [`Peer`](peer::Peer) record,
//! and the aggregate [`RegistryMetrics`](registry_metrics::RegistryMetrics).
use std::time::Duration;

pub mod info_hash;
pub mod peer;
pub mod registry_metrics;

/// Duration since the Unix Epoch.
pub type DurationSinceUnixEpoch = Duration;
