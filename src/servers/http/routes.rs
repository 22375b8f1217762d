//! HTTP tracker routes.
use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{announce, list};
use crate::container::HttpTrackerCoreContainer;

/// It adds the routes to the router.
///
/// > **NOTICE**: the body limit and the request timeout are taken from the
/// > HTTP tracker configuration.
#[allow(deprecated)]
pub fn router(http_tracker_container: Arc<HttpTrackerCoreContainer>) -> Router {
    let max_body_size = http_tracker_container.http_tracker_config.max_body_size;
    let request_timeout = Duration::from_secs(http_tracker_container.http_tracker_config.request_timeout);

    Router::new()
        .route("/peers", get(list::handle).post(announce::handle))
        .with_state(http_tracker_container)
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
