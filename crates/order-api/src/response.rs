// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Order response shaping
//!
//! Maps the result of order validation to the HTTP status line and the
//! `{status, data?, message}` body returned by `POST /orders`.

use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use shared_types::{OrderRecord, OrderValidationError, ValidationMode};
use utoipa::ToSchema;

/// Message returned with an accepted order
pub const SUCCESS_MESSAGE: &str = "successful";

/// Body of every `POST /orders` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    /// Outcome code, 200 or 400
    #[schema(example = 200)]
    pub status: u16,
    /// Synthesized order, present only on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<OrderRecord>,
    /// `successful` or the validation failure message
    #[schema(example = "successful")]
    pub message: String,
}

impl OrderResponse {
    /// Body for an accepted order
    pub fn success(record: OrderRecord) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            data: Some(record),
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    /// Body for a rejected order
    pub fn rejected(error: OrderValidationError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST.as_u16(),
            data: None,
            message: error.to_string(),
        }
    }
}

/// HTTP status line for a validation failure
///
/// Legacy mode keeps the historical 200 status line for a missing customer id,
/// even though the body reports 400.
pub fn rejection_status(error: OrderValidationError, mode: ValidationMode) -> StatusCode {
    match (error, mode) {
        (OrderValidationError::MissingCustomer, ValidationMode::Legacy) => StatusCode::OK,
        _ => StatusCode::BAD_REQUEST,
    }
}

/// Build the full response for an order outcome
pub fn order_response(
    outcome: Result<OrderRecord, OrderValidationError>,
    mode: ValidationMode,
) -> (StatusCode, Json<OrderResponse>) {
    match outcome {
        Ok(record) => (StatusCode::OK, Json(OrderResponse::success(record))),
        Err(error) => (
            rejection_status(error, mode),
            Json(OrderResponse::rejected(error)),
        ),
    }
}
