//! This module contains logic pending to be extracted into workspace packages.
pub mod http_tracker_core;
