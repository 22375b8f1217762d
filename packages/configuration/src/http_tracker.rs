use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

/// Configuration for the HTTP tracker.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct HttpTracker {
    /// The address the tracker will bind to.
    /// The format is `ip:port`, for example `0.0.0.0:8080`. If you want to
    /// listen to all interfaces, use `0.0.0.0`. If you want the operating
    /// system to choose a random port, use port `0`.
    #[serde(default = "HttpTracker::default_bind_address")]
    pub bind_address: SocketAddr,

    /// Maximum time in seconds to read a request and write its response.
    #[serde(default = "HttpTracker::default_request_timeout")]
    pub request_timeout: u64,

    /// Maximum size in bytes of a request body.
    #[serde(default = "HttpTracker::default_max_body_size")]
    pub max_body_size: usize,
}

impl Default for HttpTracker {
    fn default() -> Self {
        Self {
            bind_address: Self::default_bind_address(),
            request_timeout: Self::default_request_timeout(),
            max_body_size: Self::default_max_body_size(),
        }
    }
}

impl HttpTracker {
    fn default_bind_address() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)), 8080)
    }

    fn default_request_timeout() -> u64 {
        10
    }

    fn default_max_body_size() -> usize {
        1 << 20
    }
}
