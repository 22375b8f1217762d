use std::sync::Arc;

use rendezvous_tracker::{app, bootstrap};

#[tokio::main]
async fn main() {
    let (_config, app_container) = bootstrap::app::setup();

    let app_container = Arc::new(app_container);

    let jobs = app::start(&app_container).await;

    // handle the signals
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Rendezvous tracker shutting down ...");

            // Await for all jobs to shutdown
            futures::future::join_all(jobs).await;

            tracing::info!("Rendezvous tracker successfully shutdown.");
        }
    }
}
