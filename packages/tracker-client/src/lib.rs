//! A client for the rendezvous tracker HTTP API.
//!
//! ```text
//! let client = Client::new(ConnectionInfo::new(Url::parse("http://localhost:8080")?))?;
//!
//! let swarm = client.announce(&announce_request).await?;
//! let registry = client.list().await?;
//! ```
//!
//! Peers have to keep announcing to stay in the tracker. Use
//! [`heartbeat`](v1::heartbeat::heartbeat) to announce periodically in the
//! background.
pub mod connection_info;
pub mod v1;
