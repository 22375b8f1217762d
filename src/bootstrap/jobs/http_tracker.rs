//! HTTP tracker job starter.
//!
//! The [`http_tracker::start_job`](crate::bootstrap::jobs::http_tracker::start_job)
//! function starts the HTTP tracker and returns a handle to a task that keeps
//! it running until the application receives a `ctrl_c` signal.
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::container::{AppContainer, HttpTrackerCoreContainer};
use crate::servers::http::server::HttpServer;
use crate::servers::http::HTTP_TRACKER_LOG_TARGET;

/// It starts a new HTTP server with the provided configuration.
///
/// # Panics
///
/// It would panic if the HTTP server can't bind to the configured address.
pub async fn start_job(app_container: &Arc<AppContainer>) -> JoinHandle<()> {
    let http_tracker_container = HttpTrackerCoreContainer::from_app_container(app_container);

    let running = HttpServer::new(app_container.http_tracker_config.bind_address)
        .start(http_tracker_container)
        .await
        .expect("it should be able to start the HTTP tracker");

    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(target: HTTP_TRACKER_LOG_TARGET, "Unable to listen for the shutdown signal: {err}");
        }

        if let Err(err) = running.stop().await {
            tracing::error!(target: HTTP_TRACKER_LOG_TARGET, "{err}");
        }
    })
}
