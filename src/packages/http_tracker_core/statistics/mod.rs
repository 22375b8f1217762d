//! HTTP tracker usage statistics.
//!
//! The HTTP handlers and the peer reaper send [`event::Event`]s through an
//! [`event::sender::Sender`]. A listener task receives them and updates the
//! [`metrics::Metrics`] kept in the [`repository::Repository`].
//!
//! ```text
//! handler -- Event --> Sender -- mpsc --> listener -> handle_event -> Repository
//! ```
//!
//! The whole pipeline is disabled when `tracker_usage_statistics` is `false`.
pub mod event;
pub mod keeper;
pub mod metrics;
pub mod repository;
pub mod setup;
