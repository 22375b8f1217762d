use derive_more::Constructor;
use serde::{Deserialize, Serialize};

use crate::DEFAULT_PEER_LIFESPAN;

/// Core tracker configuration.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Core {
    /// Interval in seconds that the cleanup job will run to remove inactive
    /// peers from the registry.
    #[serde(default = "Core::default_inactive_peer_cleanup_interval")]
    pub inactive_peer_cleanup_interval: u64,

    /// Whether the tracker should collect statistics about HTTP usage.
    #[serde(default = "Core::default_tracker_usage_statistics")]
    pub tracker_usage_statistics: bool,

    /// Tracker policy configuration.
    #[serde(default = "Core::default_tracker_policy")]
    pub tracker_policy: TrackerPolicy,
}

impl Default for Core {
    fn default() -> Self {
        Self {
            inactive_peer_cleanup_interval: Self::default_inactive_peer_cleanup_interval(),
            tracker_usage_statistics: Self::default_tracker_usage_statistics(),
            tracker_policy: Self::default_tracker_policy(),
        }
    }
}

impl Core {
    fn default_inactive_peer_cleanup_interval() -> u64 {
        1
    }

    fn default_tracker_usage_statistics() -> bool {
        true
    }

    fn default_tracker_policy() -> TrackerPolicy {
        TrackerPolicy::default()
    }
}

/// Policy that controls how long peers stay in the registry.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Constructor)]
pub struct TrackerPolicy {
    /// Maximum time in seconds that a peer can be inactive before being
    /// considered an inactive peer. If a peer is inactive for more than this
    /// time, it will be removed from the registry.
    #[serde(default = "TrackerPolicy::default_max_peer_timeout")]
    pub max_peer_timeout: u32,

    /// If enabled, swarms left without peers after a cleanup are removed
    /// from the registry.
    #[serde(default = "TrackerPolicy::default_remove_peerless_swarms")]
    pub remove_peerless_swarms: bool,
}

impl Default for TrackerPolicy {
    fn default() -> Self {
        Self {
            max_peer_timeout: Self::default_max_peer_timeout(),
            remove_peerless_swarms: Self::default_remove_peerless_swarms(),
        }
    }
}

impl TrackerPolicy {
    fn default_max_peer_timeout() -> u32 {
        DEFAULT_PEER_LIFESPAN
    }

    fn default_remove_peerless_swarms() -> bool {
        true
    }
}
