pub mod client;
pub mod heartbeat;
