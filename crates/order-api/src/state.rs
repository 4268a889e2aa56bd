// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Server state management module
//!
//! Handlers share the server configuration and the readiness flag.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use shared_types::ValidationMode;
use utoipa::ToSchema;

use crate::{
    config::ServerConfig,
    readiness::{Readiness, ReadinessTracker},
};

/// Shared application state
#[derive(Debug, Clone)]
pub struct ServerState {
    config: ServerConfig,
    readiness: ReadinessTracker,
}

impl ServerState {
    /// Create state around a readiness flag owned by the server lifecycle
    pub fn new(config: ServerConfig, readiness: ReadinessTracker) -> Self {
        Self { config, readiness }
    }

    /// Server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Validation mode applied to incoming orders
    pub fn validation_mode(&self) -> ValidationMode {
        self.config.validation_mode
    }

    /// Readiness flag
    pub fn readiness(&self) -> &ReadinessTracker {
        &self.readiness
    }

    /// Build the health probe report from the readiness flag
    pub fn health_check(&self) -> HealthCheck {
        HealthCheck::from(self.readiness.state())
    }
}

/// Health probe body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthCheck {
    /// `Healthy` or `Unhealthy`
    #[schema(example = "Healthy")]
    pub message: String,
    /// Mirrors the HTTP status code
    #[schema(example = 200)]
    pub code: u16,
    /// Whether the service is ready
    pub successful: bool,
}

impl HealthCheck {
    /// HTTP status matching `code`
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::SERVICE_UNAVAILABLE)
    }
}

impl From<Readiness> for HealthCheck {
    fn from(readiness: Readiness) -> Self {
        let (message, status) = match readiness {
            Readiness::Ready => ("Healthy", StatusCode::OK),
            Readiness::Starting => ("Unhealthy", StatusCode::SERVICE_UNAVAILABLE),
        };

        Self {
            message: message.to_string(),
            code: status.as_u16(),
            successful: readiness == Readiness::Ready,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_mode_comes_from_config() {
        let config = ServerConfig::for_testing().with_validation_mode(ValidationMode::Legacy);
        let state = ServerState::new(config, ReadinessTracker::new());

        assert_eq!(state.validation_mode(), ValidationMode::Legacy);
    }

    #[test]
    fn health_check_follows_readiness() {
        let readiness = ReadinessTracker::new();
        let state = ServerState::new(ServerConfig::for_testing(), readiness.clone());

        let starting = state.health_check();
        assert_eq!(starting.message, "Unhealthy");
        assert_eq!(starting.code, 503);
        assert!(!starting.successful);
        assert_eq!(starting.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        readiness.mark_ready();

        let ready = state.health_check();
        assert_eq!(ready.message, "Healthy");
        assert_eq!(ready.code, 200);
        assert!(ready.successful);
        assert_eq!(ready.status_code(), StatusCode::OK);
    }
}
