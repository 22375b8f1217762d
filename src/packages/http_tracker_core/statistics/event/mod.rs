pub mod handler;
pub mod listener;
pub mod sender;

/// An statistics event. It is used to collect tracker metrics.
///
/// - `Tcp` prefix means the event was triggered by the HTTP tracker.
/// - `4` or `6` prefixes means the client IP version.
#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    Tcp4Announce,
    Tcp4List,
    Tcp6Announce,
    Tcp6List,
    InvalidAnnounce,
    PeersEvicted { count: u64 },
}
