//! Configuration data structures for the rendezvous tracker.
//!
//! This module contains the configuration data structures for the
//! tracker. The configuration is loaded from a [TOML](https://toml.io/en/)
//! file or from an environment variable with the whole TOML content.
//!
//! Every option has a default value, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [core]
//! inactive_peer_cleanup_interval = 1
//! tracker_usage_statistics = true
//!
//! [core.tracker_policy]
//! max_peer_timeout = 35
//! remove_peerless_swarms = true
//!
//! [http_tracker]
//! bind_address = "0.0.0.0:8080"
//! request_timeout = 10
//! max_body_size = 1048576
//! ```
pub mod core;
pub mod http_tracker;
pub mod logging;

use std::path::PathBuf;
use std::{env, fs};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use crate::core::{Core, TrackerPolicy};
pub use crate::http_tracker::HttpTracker;
pub use crate::logging::{Logging, Threshold};

/// Seconds a peer stays in the registry without announcing again.
pub const DEFAULT_PEER_LIFESPAN: u32 = 35;

/// Env var with the whole configuration in TOML format.
pub const ENV_VAR_CONFIG_TOML: &str = "RENDEZVOUS_TRACKER_CONFIG_TOML";

/// Env var with the path to the TOML configuration file.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "RENDEZVOUS_TRACKER_CONFIG_TOML_PATH";

/// Information required for loading the configuration.
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: Option<PathBuf>,
}

impl Info {
    /// Build configuration info from the environment.
    ///
    /// The inline TOML content takes precedence over the file path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_toml: env::var(ENV_VAR_CONFIG_TOML).ok(),
            config_toml_path: env::var(ENV_VAR_CONFIG_TOML_PATH).ok().map(PathBuf::from),
        }
    }

    #[must_use]
    pub fn from_toml(config_toml: &str) -> Self {
        Self {
            config_toml: Some(config_toml.to_owned()),
            config_toml_path: None,
        }
    }

    #[must_use]
    pub fn from_path(config_toml_path: PathBuf) -> Self {
        Self {
            config_toml: None,
            config_toml_path: Some(config_toml_path),
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Unable to read the configuration file.
    #[error("Unable to load from config file: {path}, {source}")]
    UnableToLoadFromConfigFile { path: PathBuf, source: std::io::Error },

    /// The TOML content is not a valid configuration.
    #[error("Failed processing the configuration: {source}")]
    ConfigError { source: toml::de::Error },

    /// An option has a value the tracker can't run with.
    #[error("Invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: &'static str },
}

/// Core configuration for the tracker.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Default, Clone)]
pub struct Configuration {
    /// Logging configuration.
    #[serde(default)]
    pub logging: Logging,

    /// Core configuration.
    #[serde(default)]
    pub core: Core,

    /// The HTTP tracker configuration.
    #[serde(default)]
    pub http_tracker: HttpTracker,
}

impl Configuration {
    /// Loads the configuration from the `Info` struct.
    ///
    /// When neither the inline TOML nor the file path is provided it returns
    /// the default configuration.
    ///
    /// # Errors
    ///
    /// Will return an error if the configuration file can't be read or the
    /// TOML content is not a valid configuration.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        if let Some(config_toml) = &info.config_toml {
            tracing::info!("Loading configuration from environment variable {ENV_VAR_CONFIG_TOML}");
            return Self::load_from_toml(config_toml);
        }

        if let Some(path) = &info.config_toml_path {
            tracing::info!("Loading configuration from file: `{}` ...", path.display());
            let config_toml = fs::read_to_string(path).map_err(|source| Error::UnableToLoadFromConfigFile {
                path: path.clone(),
                source,
            })?;
            return Self::load_from_toml(&config_toml);
        }

        tracing::info!("No configuration provided, using the default one");
        Ok(Configuration::default())
    }

    /// Parses the configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Will return an error if the TOML content is not a valid configuration
    /// or if any option fails [`Configuration::validate`].
    pub fn load_from_toml(config_toml: &str) -> Result<Configuration, Error> {
        let configuration: Configuration = toml::from_str(config_toml).map_err(|source| Error::ConfigError { source })?;

        configuration.validate()?;

        Ok(configuration)
    }

    /// Checks the options that must not be zero.
    ///
    /// - `core.inactive_peer_cleanup_interval`: the reaper can't tick on a
    ///   zero period.
    /// - `http_tracker.request_timeout`: every request would time out.
    /// - `http_tracker.max_body_size`: every announce would be rejected.
    ///
    /// # Errors
    ///
    /// Will return an `Error::InvalidValue` naming the first invalid option.
    pub fn validate(&self) -> Result<(), Error> {
        if self.core.inactive_peer_cleanup_interval == 0 {
            return Err(Error::InvalidValue {
                field: "core.inactive_peer_cleanup_interval",
                reason: "it must be greater than zero",
            });
        }

        if self.http_tracker.request_timeout == 0 {
            return Err(Error::InvalidValue {
                field: "http_tracker.request_timeout",
                reason: "it must be greater than zero",
            });
        }

        if self.http_tracker.max_body_size == 0 {
            return Err(Error::InvalidValue {
                field: "http_tracker.max_body_size",
                reason: "it must be greater than zero",
            });
        }

        Ok(())
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Panics
    ///
    /// Will panic if it can't be converted to TOML.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string(self).expect("Could not encode TOML value")
    }
}
