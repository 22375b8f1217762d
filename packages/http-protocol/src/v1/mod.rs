//! Version 1 of the HTTP protocol.
pub mod requests;
pub mod responses;
