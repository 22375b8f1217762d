//! Core tracker errors.
//!
//! Every error variant includes the source code location where it was raised
//! to make debugging easier.
use std::panic::Location;

use derive_more::Display;

/// The peer record field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RecordField {
    #[display("info hash")]
    InfoHash,
    #[display("peer ID")]
    PeerId,
}

/// Errors returned when a peer announces itself.
///
/// A failed announce never changes the registry.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnounceError {
    /// The announced record is missing a mandatory field.
    #[error("Invalid peer record: the {field} is empty, {location}")]
    InvalidRecord {
        field: RecordField,
        location: &'static Location<'static>,
    },
}
