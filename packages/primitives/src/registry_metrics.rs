/// Structure that holds general registry metrics.
///
/// Metrics are aggregate values for all swarms. Swarms without peers are not
/// counted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct RegistryMetrics {
    /// Total number of swarms with at least one peer.
    pub swarms: u64,
    /// Total number of peers in all swarms.
    pub peers: u64,
}
