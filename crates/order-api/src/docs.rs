// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! `OpenAPI` document definition

use shared_types::{Item, OrderRecord, OrderRequest};
use utoipa::OpenApi;

use crate::{openapi, response::OrderResponse, routes::handlers, state::HealthCheck};

/// `OpenAPI` document for the order API
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Order API",
        description = "Order intake with validation and a readiness probe",
        version = "1.0.0"
    ),
    paths(
        handlers::root_handler,
        handlers::health_handler,
        handlers::create_order_handler,
        handlers::get_order_handler,
        openapi::openapi_spec,
        openapi::swagger_ui,
    ),
    components(schemas(OrderRequest, Item, OrderRecord, OrderResponse, HealthCheck)),
    tags(
        (name = "service", description = "Service landing endpoint"),
        (name = "health", description = "Readiness probe"),
        (name = "orders", description = "Order intake"),
        (name = "docs", description = "API documentation")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_public_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().map(String::as_str).collect();

        for path in [
            "/",
            "/healthcheck",
            "/orders",
            "/orders/{id}",
            "/docs",
            "/v3/api-docs",
        ] {
            assert!(paths.contains(&path), "missing {path}");
        }
    }

    #[test]
    fn document_registers_order_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;

        assert!(schemas.contains_key("OrderRequest"));
        assert!(schemas.contains_key("OrderResponse"));
        assert!(schemas.contains_key("HealthCheck"));
    }
}
