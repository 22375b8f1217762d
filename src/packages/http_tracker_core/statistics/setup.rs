//! Setup for the tracker statistics.
//!
//! The [`factory`] function builds the structs needed for handling the
//! tracker metrics.
use super::event::sender::Sender;
use super::keeper::Keeper;
use super::repository::Repository;

/// It builds the structs needed for handling the tracker metrics.
///
/// It returns:
///
/// - An statistics event [`Sender`] that allows you to send events related to statistics.
/// - An statistics [`Repository`] which is an in-memory repository for the tracker metrics.
///
/// When the input argument `tracker_usage_statistics` is false the setup does
/// not run the event listener and there is no sender. Callers skip sending
/// events and the repository keeps the default metrics.
#[must_use]
pub fn factory(tracker_usage_statistics: bool) -> (Option<Box<dyn Sender>>, Repository) {
    let mut stats_event_sender = None;

    let mut stats_tracker = Keeper::new();

    if tracker_usage_statistics {
        stats_event_sender = Some(stats_tracker.run_event_listener());
    }

    (stats_event_sender, stats_tracker.repository)
}
