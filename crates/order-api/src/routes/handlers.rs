// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP request handlers module
//!
//! This module provides HTTP request handlers for the order API server:
//! the readiness probe, order intake and the order lookup passthrough.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared_types::{OrderRecord, OrderRequest};
use tracing::{debug, info};

use crate::{
    extractors::JsonExtractor,
    metrics,
    response::{OrderResponse, order_response},
    state::{HealthCheck, ServerState},
};

/// Landing endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    summary = "Landing endpoint",
    responses(
        (status = 200, description = "Plain text greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn root_handler() -> &'static str {
    "Test"
}

/// Health check endpoint handler
#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "health",
    summary = "Readiness probe",
    description = "Reports whether the service has finished starting. Once healthy, the service stays healthy for the rest of the process lifetime.",
    responses(
        (status = 200, description = "Service is ready", body = HealthCheck),
        (status = 503, description = "Service is still starting", body = HealthCheck)
    )
)]
pub async fn health_handler(State(state): State<ServerState>) -> (StatusCode, Json<HealthCheck>) {
    let health = state.health_check();
    (health.status_code(), Json(health))
}

/// Order creation
///
/// Validates the order and synthesizes an ephemeral record for it. Nothing
/// is persisted.
#[utoipa::path(
    post,
    path = "/orders",
    tag = "orders",
    summary = "Create an order",
    description = "Validates the customer id, product ids and amounts of an order. Accepted orders are echoed back with a random id and creation timestamps.",
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order accepted", body = OrderResponse),
        (status = 400, description = "Missing customer id, missing product id, amount below 0.1 or malformed body", body = OrderResponse)
    )
)]
pub async fn create_order_handler(
    State(state): State<ServerState>,
    JsonExtractor(order): JsonExtractor<OrderRequest>,
) -> (StatusCode, Json<OrderResponse>) {
    let mode = state.validation_mode();
    let outcome = order
        .validate(mode)
        .map(|()| OrderRecord::new(order.items));

    match &outcome {
        Ok(record) => {
            metrics::inc_orders_by_outcome("valid");
            metrics::observe_order_items(record.items.len());
            debug!(
                order_id = record.id,
                items = record.items.len(),
                "order accepted"
            );
        }
        Err(error) => {
            metrics::inc_orders_by_outcome(error.kind());
            info!(reason = error.kind(), %mode, "order rejected");
        }
    }

    order_response(outcome, mode)
}

/// Order lookup passthrough
#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "orders",
    summary = "Echo an order id",
    params(("id" = String, Path, description = "Order identifier")),
    responses(
        (status = 200, description = "The id path segment, unchanged", body = String, content_type = "text/plain")
    )
)]
pub async fn get_order_handler(Path(id): Path<String>) -> String {
    id
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::{config::ServerConfig, readiness::ReadinessTracker, routes::create_routes};

    fn app(readiness: ReadinessTracker) -> Router {
        create_routes().with_state(ServerState::new(ServerConfig::for_testing(), readiness))
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn healthcheck_reports_starting_then_ready() {
        let readiness = ReadinessTracker::new();

        let (status, body) = send(app(readiness.clone()), get("/healthcheck")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            json!({ "message": "Unhealthy", "code": 503, "successful": false })
        );

        readiness.mark_ready();

        let (status, body) = send(app(readiness), get("/healthcheck")).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            json!({ "message": "Healthy", "code": 200, "successful": true })
        );
    }

    #[tokio::test]
    async fn root_returns_plain_text() {
        let (status, body) = send(app(ReadinessTracker::new()), get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"Test");
    }

    #[tokio::test]
    async fn order_lookup_echoes_id() {
        let (status, body) = send(app(ReadinessTracker::new()), get("/orders/abc-123")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"abc-123");
    }

    #[tokio::test]
    async fn create_order_accepts_valid_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/orders")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "customerId": "c1", "items": [{ "productId": "p1", "amount": 0.5 }] })
                    .to_string(),
            ))
            .unwrap();

        let (status, body) = send(app(ReadinessTracker::new()), request).await;
        assert_eq!(status, StatusCode::OK);

        let body: OrderResponse = serde_json::from_slice(&body).unwrap();
        let record = body.data.unwrap();
        assert_eq!(body.message, "successful");
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(record.items.len(), 1);
    }

    #[tokio::test]
    async fn create_order_rejects_malformed_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/orders")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"customerId": "c1", "items": 7}"#))
            .unwrap();

        let (status, body) = send(app(ReadinessTracker::new()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], 400);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("Invalid JSON request")
        );
    }
}
