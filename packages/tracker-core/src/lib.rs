//! The core `rendezvous-tracker-core` crate contains the generic rendezvous
//! tracker logic which is independent of the delivery layer.
//!
//! It contains the tracker services and their dependencies. It's a domain layer
//! which does not specify how the end user should connect to the tracker.
//!
//! ```text
//!   Delivery layer  |   Domain layer
//! -----------------------------------
//!     HTTP tracker  |-> Core tracker
//!           Reaper  |
//! ```
//!
//! # Table of contents
//!
//! - [Introduction](#introduction)
//! - [Configuration](#configuration)
//! - [Announce handler](#announce-handler)
//! - [List handler](#list-handler)
//! - [Registry](#registry)
//!
//! # Introduction
//!
//! The tracker is a rendezvous point: peers that share an info hash announce
//! their public address and get back the addresses of the other peers in the
//! same swarm. The tracker never stores or relays any content.
//!
//! It has three responsibilities:
//!
//! - To handle **announce** requests.
//! - To handle **list** requests.
//! - To **evict** peers that stopped announcing.
//!
//! Nothing is persisted. The registry starts empty and it's discarded when
//! the process exits.
//!
//! # Configuration
//!
//! You can control the behavior of this crate with the `Core` settings:
//!
//! ```toml
//! [core]
//! inactive_peer_cleanup_interval = 1
//! tracker_usage_statistics = true
//!
//! [core.tracker_policy]
//! max_peer_timeout = 35
//! remove_peerless_swarms = true
//! ```
//!
//! # Announce handler
//!
//! Please refer to the [`announce_handler`] documentation.
//!
//! # List handler
//!
//! Please refer to the [`list_handler`] documentation.
//!
//! # Registry
//!
//! Please refer to the [`registry`] documentation.
pub mod announce_handler;
pub mod container;
pub mod error;
pub mod list_handler;
pub mod registry;

pub mod test_helpers;

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
