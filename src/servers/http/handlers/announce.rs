//! Axum [`handlers`](axum#handlers) for the `announce` requests.
//!
//! The handler registers (or refreshes) the peer in its swarm and responds
//! with every peer in that swarm, including the announcing one.
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rendezvous_http_protocol::v1::requests::announce::Announce;
use rendezvous_http_protocol::v1::responses;
use rendezvous_tracker_primitives::peer::Peer;

use super::{by_ip_version, send_stats_event};
use crate::container::HttpTrackerCoreContainer;
use crate::packages::http_tracker_core::statistics::event::Event;
use crate::servers::http::HTTP_TRACKER_LOG_TARGET;

/// It handles the `announce` request.
pub async fn handle(
    State(http_tracker_container): State<Arc<HttpTrackerCoreContainer>>,
    ConnectInfo(client_addr): ConnectInfo<SocketAddr>,
    announce_request: Result<Json<Announce>, JsonRejection>,
) -> Response {
    match announce_request {
        Ok(Json(announce_request)) => handle_announce(&http_tracker_container, &client_addr, announce_request).await,
        Err(rejection) => {
            tracing::debug!(target: HTTP_TRACKER_LOG_TARGET, "Malformed announce request from {client_addr}: {rejection}");

            send_stats_event(&http_tracker_container.http_stats_event_sender, Event::InvalidAnnounce).await;

            (rejection.status(), Json(responses::Error::new(rejection.body_text()))).into_response()
        }
    }
}

/// Handles an announce request whose body was already parsed.
///
/// Peer records with an empty peer ID or info hash are rejected by the core
/// with a `400 Bad Request` response.
pub async fn handle_announce(
    http_tracker_container: &Arc<HttpTrackerCoreContainer>,
    client_addr: &SocketAddr,
    announce_request: Announce,
) -> Response {
    let mut peer = Peer::from(announce_request);

    match http_tracker_container.announce_handler.announce(&mut peer) {
        Ok(announce_data) => {
            send_stats_event(
                &http_tracker_container.http_stats_event_sender,
                by_ip_version(client_addr, Event::Tcp4Announce, Event::Tcp6Announce),
            )
            .await;

            (StatusCode::OK, Json(responses::Announce::from(announce_data))).into_response()
        }
        Err(error) => {
            tracing::debug!(target: HTTP_TRACKER_LOG_TARGET, "Rejected announce from {client_addr}: {error}");

            send_stats_event(&http_tracker_container.http_stats_event_sender, Event::InvalidAnnounce).await;

            (StatusCode::BAD_REQUEST, Json(responses::Error::from(error))).into_response()
        }
    }
}
