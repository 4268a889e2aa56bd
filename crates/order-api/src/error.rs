// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error handling module
//!
//! This module provides error types for server operations and maps them to
//! HTTP responses. Error bodies share the `{status, message}` shape used by
//! the order endpoints.

use std::net::SocketAddr;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Error types for server operations
#[derive(Error, Debug)]
pub enum ServerError {
    /// A configuration source could not be read or holds an invalid value
    #[error("invalid configuration: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Network binding errors
    #[error("cannot listen on {address}: {source}")]
    Bind {
        /// Configured listen address
        address: SocketAddr,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Server startup errors
    #[error("listener setup failed: {source}")]
    Startup {
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Server shutdown errors
    #[error("serving stopped with an error: {source}")]
    Shutdown {
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Malformed request bodies, rejected before order validation runs
    #[error("Invalid JSON request: {message}")]
    JsonError {
        /// Detailed error message
        message: String,
    },
}

/// Result alias for server lifecycle and request extraction
pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// HTTP status used when the error reaches a client
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Config { .. }
            | ServerError::Bind { .. }
            | ServerError::Startup { .. }
            | ServerError::Shutdown { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::JsonError { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({
            "status": status.as_u16(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
