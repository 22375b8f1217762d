//! Setup for the main tracker application.
//!
//! The [`setup`] only builds the application and its dependencies but it does
//! not start the application. The jobs are started by [`crate::app::start`].
use rendezvous_tracker_configuration::Configuration;

use super::config::initialize_configuration;
use crate::bootstrap;
use crate::container::AppContainer;

/// It loads the configuration from the environment and builds the main
/// domain [`AppContainer`].
///
/// It must be called from inside a Tokio runtime.
///
/// # Panics
///
/// Setup can fail if the configuration is invalid.
#[must_use]
pub fn setup() -> (Configuration, AppContainer) {
    let configuration = initialize_configuration();

    initialize_global_services(&configuration);

    tracing::info!("Configuration:\n{}", configuration.to_toml());

    let app_container = AppContainer::initialize(&configuration);

    (configuration, app_container)
}

/// It initializes the global services.
pub fn initialize_global_services(configuration: &Configuration) {
    bootstrap::logging::setup(&configuration.logging);
}
