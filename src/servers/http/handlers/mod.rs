//! Axum [`handlers`](axum#handlers) for the HTTP tracker.
use std::net::SocketAddr;

use crate::packages::http_tracker_core::statistics;

pub mod announce;
pub mod list;

/// Sends a statistics event if usage statistics are enabled.
pub(crate) async fn send_stats_event(
    sender: &Option<Box<dyn statistics::event::sender::Sender>>,
    event: statistics::event::Event,
) {
    if let Some(sender) = sender {
        if let Some(Err(err)) = sender.send_event(event).await {
            tracing::warn!(target: super::HTTP_TRACKER_LOG_TARGET, "Failed to send statistics event: {err}");
        }
    }
}

/// Picks the IPv4 or the IPv6 flavour of an event from the client address.
pub(crate) fn by_ip_version(
    client_addr: &SocketAddr,
    ipv4: statistics::event::Event,
    ipv6: statistics::event::Event,
) -> statistics::event::Event {
    match client_addr {
        SocketAddr::V4(_) => ipv4,
        SocketAddr::V6(_) => ipv6,
    }
}
