//! Services shared by the HTTP delivery layer that don't belong to the core
//! tracker.
pub mod statistics;
