//! HTTP requests for the rendezvous tracker.
pub mod announce;
