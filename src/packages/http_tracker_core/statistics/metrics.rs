/// Metrics collected by the HTTP tracker.
///
/// - Number of announce and list requests handled, per IP version.
/// - Number of announce requests rejected because the peer record was invalid.
/// - Number of peers evicted by the reaper.
#[derive(Debug, PartialEq, Default)]
pub struct Metrics {
    /// Total number of TCP (HTTP tracker) `announce` requests from IPv4 peers.
    pub tcp4_announces_handled: u64,

    /// Total number of TCP (HTTP tracker) `list` requests from IPv4 peers.
    pub tcp4_lists_handled: u64,

    /// Total number of TCP (HTTP tracker) `announce` requests from IPv6 peers.
    pub tcp6_announces_handled: u64,

    /// Total number of TCP (HTTP tracker) `list` requests from IPv6 peers.
    pub tcp6_lists_handled: u64,

    /// Total number of `announce` requests rejected with a failure reason.
    pub invalid_announces: u64,

    /// Total number of peers removed because they stopped announcing.
    pub peers_evicted: u64,
}
