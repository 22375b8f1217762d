//! Rendezvous Tracker application.
//!
//! The tracker application has a global configuration for multiple jobs.
//! It's basically a container for other services.
//!
//! It starts these jobs:
//!
//! - HTTP tracker: the `announce` and `list` endpoints.
//! - Peer reaper: evicts the peers that stopped announcing.
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::bootstrap::jobs::{http_tracker, peer_reaper};
use crate::container::AppContainer;

/// # Panics
///
/// Will panic if the HTTP tracker can't be started.
pub async fn start(app_container: &Arc<AppContainer>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    // Start the HTTP tracker
    jobs.push(http_tracker::start_job(app_container).await);

    // Start the peer reaper
    jobs.push(peer_reaper::start_job(
        &app_container.core_config,
        &app_container.registry_manager(),
        &app_container.http_stats_event_sender,
    ));

    jobs
}
