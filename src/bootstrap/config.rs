//! Initialize configuration from file or env var.
//!
//! The configuration is loaded from the first source that is available:
//!
//! 1. The TOML content in the `RENDEZVOUS_TRACKER_CONFIG_TOML` env var.
//! 2. The file whose path is in the `RENDEZVOUS_TRACKER_CONFIG_TOML_PATH` env var.
//! 3. The default configuration.
use rendezvous_tracker_configuration::{Configuration, Info};

/// It loads the application configuration from the environment.
///
/// # Panics
///
/// Will panic if it can't load the configuration from either
/// `./share/default/config/tracker.toml` or the env var `RENDEZVOUS_TRACKER_CONFIG_TOML`.
#[must_use]
pub fn initialize_configuration() -> Configuration {
    let info = Info::new();

    Configuration::load(&info).expect("Error loading configuration from sources")
}
