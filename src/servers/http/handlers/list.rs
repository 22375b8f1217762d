//! Axum [`handlers`](axum#handlers) for the `list` requests.
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, State};
use axum::Json;
use rendezvous_http_protocol::v1::responses;

use super::{by_ip_version, send_stats_event};
use crate::container::HttpTrackerCoreContainer;
use crate::packages::http_tracker_core::statistics::event::Event;

/// It handles the `list` request.
pub async fn handle(
    State(http_tracker_container): State<Arc<HttpTrackerCoreContainer>>,
    ConnectInfo(client_addr): ConnectInfo<SocketAddr>,
) -> Json<responses::List> {
    handle_list(&http_tracker_container, &client_addr).await
}

/// Responds with a snapshot of every swarm that has at least one peer.
pub async fn handle_list(http_tracker_container: &Arc<HttpTrackerCoreContainer>, client_addr: &SocketAddr) -> Json<responses::List> {
    let snapshot = http_tracker_container.list_handler.list();

    send_stats_event(
        &http_tracker_container.http_stats_event_sender,
        by_ip_version(client_addr, Event::Tcp4List, Event::Tcp6List),
    )
    .await;

    Json(responses::List::from(snapshot))
}
