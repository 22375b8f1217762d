use tokio::sync::mpsc;

use super::handler::handle_event;
use super::Event;
use crate::packages::http_tracker_core::statistics::repository::Repository;

/// Receives events until every sender is dropped.
pub async fn dispatch_events(mut receiver: mpsc::Receiver<Event>, stats_repository: Repository) {
    while let Some(event) = receiver.recv().await {
        handle_event(event, &stats_repository).await;
    }
}
