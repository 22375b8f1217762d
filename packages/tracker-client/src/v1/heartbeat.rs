//! Periodic announces.
//!
//! A peer is evicted from its swarm when it stops announcing for longer than
//! the tracker's peer lifespan (35 seconds by default). The heartbeat keeps
//! re-announcing the same record on a fixed interval, which must be shorter
//! than the lifespan.
use std::time::Duration;

use rendezvous_http_protocol::v1::requests::announce::Announce;
use tokio::sync::oneshot;

use super::client::Client;

/// Default interval between announces.
pub const DEFAULT_HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

/// Announces `request` on every `interval` tick until `halt` receives a
/// message or its sender is dropped.
///
/// The first announce is sent immediately. Failed announces are logged and do
/// not stop the loop.
///
/// A zero `interval` falls back to [`DEFAULT_HEARTBEAT_INTERVAL`].
///
/// Returns the number of successful announces.
pub async fn heartbeat(client: &Client, request: &Announce, interval: Duration, mut halt: oneshot::Receiver<()>) -> u64 {
    let interval = if interval.is_zero() {
        tracing::warn!("Heartbeat interval can't be zero, using {DEFAULT_HEARTBEAT_INTERVAL:?}");
        DEFAULT_HEARTBEAT_INTERVAL
    } else {
        interval
    };

    let mut interval = tokio::time::interval(interval);
    let mut announces = 0;

    loop {
        tokio::select! {
            _ = &mut halt => {
                tracing::debug!("Stopping heartbeat for peer {} ...", request.peer_id);
                break;
            }
            _ = interval.tick() => {
                match client.announce(request).await {
                    Ok(response) => {
                        announces += 1;
                        tracing::debug!("Peer {} announced, swarm has {} peers", request.peer_id, response.peers.len());
                    }
                    Err(err) => tracing::warn!("Failed to announce peer {}: {err}", request.peer_id),
                }
            }
        }
    }

    announces
}
