// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Order API Server Implementation
//!
//! This crate provides the HTTP server for the order intake service, built with Axum.
//! It validates order requests, synthesizes ephemeral order records, and exposes a
//! readiness probe for infrastructure.
//!
//! # Module Structure
//!
//! - [`config`]: Server configuration from defaults, `config.json` and `SERVER_*` variables
//! - [`error`]: Error types and HTTP response handling with proper status codes
//! - [`readiness`]: Write-once readiness flag backing the health probe
//! - [`state`]: Shared application state and health reporting
//! - [`response`]: Mapping of validation outcomes to order responses
//! - [`server`]: Bind, readiness transition, serving and graceful shutdown
//! - [`routes`]: Route configuration and HTTP request handlers
//! - [`extractors`]: JSON body extraction with detailed rejection messages
//! - [`metrics`]: Prometheus metrics and exporter
//! - [`openapi`]: `OpenAPI` specification and Swagger UI endpoints for API documentation
//!
//! # Key Features
//!
//! - **Order Validation**: Customer id, product id and amount checks in a fixed order
//! - **Validation Modes**: Strict rejection or compatibility with the historical wire behavior
//! - **Readiness Probe**: `503` until the listener is bound, `200` afterwards
//! - **Graceful Shutdown**: SIGINT/SIGTERM cancel a `CancellationToken` that drains the server

pub mod config;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod metrics;
pub mod openapi;
pub mod readiness;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use readiness::{Readiness, ReadinessTracker};
pub use response::OrderResponse;
pub use server::Server;
pub use shared_types::{Item, OrderRecord, OrderRequest, OrderValidationError, ValidationMode};
pub use state::{HealthCheck, ServerState};
