// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Routes module
//!
//! This module provides route configuration and handlers for the order API server.

pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use handlers::{create_order_handler, get_order_handler, health_handler, root_handler};

use crate::{
    metrics::metrics_handler,
    openapi::{openapi_spec, swagger_ui},
    state::ServerState,
};

/// Create application routes
pub fn create_routes() -> Router<ServerState> {
    let health_routes = Router::new()
        .route("/healthcheck", get(health_handler))
        .route("/metrics", get(metrics_handler));

    let docs_routes = Router::new()
        .route("/v3/api-docs", get(openapi_spec))
        .route("/docs", get(swagger_ui));

    let order_routes = Router::new()
        .route("/orders", post(create_order_handler))
        .route("/orders/{id}", get(get_order_handler));

    Router::new()
        .route("/", get(root_handler))
        .merge(health_routes)
        .merge(docs_routes)
        .merge(order_routes)
}
