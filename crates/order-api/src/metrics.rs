// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Prometheus metrics module
//!
//! Provides global metrics using the default Prometheus registry via macros and
//! an Axum-compatible metrics handler.

use std::sync::LazyLock;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use prometheus::{
    Encoder, Histogram, IntCounterVec, IntGauge, TextEncoder, register_histogram,
    register_int_counter_vec, register_int_gauge,
};
use tracing::error;

/// Total number of order requests, labeled by validation outcome.
pub static ORDERS_BY_OUTCOME: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!(
        "order_api_orders_total",
        "Total number of order requests, labeled by validation outcome",
        &["outcome"]
    )
    .expect("Failed to create order_api_orders_total counter vec")
});

/// Number of items per accepted order.
pub static ORDER_ITEMS: LazyLock<Histogram> = LazyLock::new(|| {
    register_histogram!(
        "order_api_order_items",
        "Number of items in accepted orders",
        vec![0.0, 1.0, 2.0, 5.0, 10.0, 25.0, 50.0, 100.0]
    )
    .expect("Failed to create order items histogram")
});

/// Readiness flag, 1 once the listener is bound.
pub static READY: LazyLock<IntGauge> = LazyLock::new(|| {
    register_int_gauge!("order_api_ready", "Whether the service reports ready (0 or 1)")
        .expect("Failed to create readiness gauge")
});

/// Increment the order counter for a validation outcome
///
/// # Arguments
/// * `outcome` - `valid` or the kind of validation failure
pub fn inc_orders_by_outcome(outcome: &str) {
    ORDERS_BY_OUTCOME.with_label_values(&[outcome]).inc();
}

/// Observe the item count of an accepted order
#[allow(clippy::cast_precision_loss)]
pub fn observe_order_items(count: usize) {
    ORDER_ITEMS.observe(count as f64);
}

/// Record the readiness flag
pub fn set_ready(ready: bool) {
    READY.set(i64::from(ready));
}

/// Axum handler that exports metrics in Prometheus text format
pub async fn metrics_handler() -> Response {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        error!(error = %e, "failed to encode metrics");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    match String::from_utf8(buffer) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, encoder.format_type().to_string())],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "metrics buffer is not valid UTF-8");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
