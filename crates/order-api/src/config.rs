// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Server configuration
//!
//! Every key has a default, so the service starts without any configuration
//! source. An optional `config.json` in the working directory overrides the
//! defaults, and `SERVER_*` environment variables override both.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::{Deserialize, Serialize};
use shared_types::ValidationMode;

use crate::error::{ServerError, ServerResult};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Settings read by the order API server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub host: IpAddr,
    /// Listen port, 0 picks an ephemeral port
    pub port: u16,
    /// Per-request timeout, between 1 and 300 seconds
    pub timeout_seconds: u64,
    /// How order validation reports a missing customer id
    pub validation_mode: ValidationMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            validation_mode: ValidationMode::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `config.json` and `SERVER_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Config` if a source cannot be read or a value is invalid.
    pub fn from_env() -> ServerResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name("config.json").required(false))
            // Keys contain underscores, so nesting uses a double underscore
            .add_source(
                Environment::with_prefix("SERVER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder).map_err(|e| ServerError::Config {
            message: format!("failed to load configuration: {e}"),
        })
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_TIMEOUT_SECONDS).contains(&self.timeout_seconds) {
            return Err(ConfigError::Message(format!(
                "timeout_seconds must be between 1 and {MAX_TIMEOUT_SECONDS}, got {}",
                self.timeout_seconds
            )));
        }
        Ok(())
    }

    /// Localhost on an ephemeral port with a short timeout
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            timeout_seconds: 5,
            ..Self::default()
        }
    }

    /// Switch the validation mode
    #[must_use]
    pub fn with_validation_mode(mut self, validation_mode: ValidationMode) -> Self {
        self.validation_mode = validation_mode;
        self
    }

    /// Request timeout applied by the middleware stack
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
