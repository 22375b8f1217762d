//! Tracker bootstrapping.
//!
//! - [`app::setup`]: loads the configuration, initializes logging and builds
//!   the [`AppContainer`](crate::container::AppContainer).
//! - [`jobs`]: the long running tasks the application starts.
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;
