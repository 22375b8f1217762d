//! **Rendezvous Tracker** is a small service that lets the peers of a
//! peer-to-peer application find each other.
//!
//! Peers sharing a content identifier (an "info hash") announce their public
//! address to the tracker and get back the addresses of the other peers with
//! the same info hash. The tracker never stores or relays any content and it
//! doesn't verify the addresses it's given.
//!
//! # Table of contents
//!
//! - [Features](#features)
//! - [Services](#services)
//! - [Installation](#installation)
//! - [Configuration](#configuration)
//! - [Usage](#usage)
//! - [Components](#components)
//!
//! # Features
//!
//! - In-memory peer registry, partitioned by info hash.
//! - Eviction of the peers that stopped announcing.
//! - HTTP JSON API to announce and to list every swarm.
//! - Usage statistics.
//!
//! # Services
//!
//! From the end-user perspective the tracker exposes one service:
//!
//! - An HTTP tracker with the `POST /peers` (announce) and `GET /peers` (list)
//!   endpoints. See [`servers::http`].
//!
//! Internally a second job, the peer reaper, evicts the peers whose last
//! announce is older than the configured peer lifespan. See
//! [`bootstrap::jobs::peer_reaper`].
//!
//! # Installation
//!
//! ```text
//! cargo build --release
//! ./target/release/rendezvous-tracker
//! ```
//!
//! # Configuration
//!
//! The configuration is a TOML document. It's loaded from the
//! `RENDEZVOUS_TRACKER_CONFIG_TOML` env var or from the file whose path is in
//! `RENDEZVOUS_TRACKER_CONFIG_TOML_PATH`. When neither is set the defaults are
//! used:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [core]
//! inactive_peer_cleanup_interval = 1
//! tracker_usage_statistics = true
//!
//! [core.tracker_policy]
//! max_peer_timeout = 35
//! remove_peerless_swarms = true
//!
//! [http_tracker]
//! bind_address = "0.0.0.0:8080"
//! request_timeout = 10
//! max_body_size = 1048576
//! ```
//!
//! A copy of the default configuration lives in
//! `share/default/config/tracker.toml`.
//!
//! # Usage
//!
//! Announce a peer:
//!
//! ```text
//! curl -X POST http://127.0.0.1:8080/peers \
//!      -H "Content-Type: application/json" \
//!      -d '{"peerId":"peer1","infoHash":"hashA","publicIp":"1.2.3.4","publicPort":"6000"}'
//! ```
//!
//! ```json
//! {"infoHash":"hashA","peers":[{"peerId":"peer1","infoHash":"hashA","publicIp":"1.2.3.4","publicPort":"6000"}]}
//! ```
//!
//! List every swarm:
//!
//! ```text
//! curl http://127.0.0.1:8080/peers
//! ```
//!
//! ```json
//! {"hashA":{"peer1":{"peerId":"peer1","infoHash":"hashA","publicIp":"1.2.3.4","publicPort":"6000"}}}
//! ```
//!
//! Peers must keep announcing to stay in the registry. The
//! `rendezvous-tracker-client` package has a client with a heartbeat that
//! re-announces every 30 seconds.
//!
//! # Components
//!
//! ```text
//!                 +---------------+     +------------------------+
//! HTTP client --> |  HTTP tracker | --> | tracker core           |
//!                 +---------------+     |  announce/list handler |
//!                                       |  registry              |
//!                 +---------------+     |                        |
//!                 |  peer reaper  | --> |  registry manager      |
//!                 +---------------+     +------------------------+
//! ```
//!
//! - [`app`]: starts the jobs.
//! - [`bootstrap`]: loads the configuration, sets up logging and builds the
//!   [`container::AppContainer`].
//! - [`servers`]: the HTTP tracker.
//! - [`packages`]: usage statistics for the HTTP tracker.
//!
//! The domain logic lives in the `rendezvous-tracker-core` package and the
//! registry data structures in `rendezvous-tracker-swarm-registry`.
pub mod app;
pub mod bootstrap;
pub mod container;
pub mod packages;
pub mod servers;

use rendezvous_tracker_clock::clock;
/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;
