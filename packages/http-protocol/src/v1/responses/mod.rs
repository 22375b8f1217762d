//! HTTP responses for the rendezvous tracker.
pub mod announce;
pub mod error;
pub mod list;

pub use announce::{Announce, PeerRecord};
pub use error::Error;
pub use list::List;
