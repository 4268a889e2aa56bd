// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! JSON body extraction
//!
//! Bodies that are not JSON, or whose shape does not match the target type
//! (for example `items` missing or not an array), are rejected here with a
//! 400 `{status, message}` response before any handler runs.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::error::ServerError;

const MAX_JSON_PAYLOAD_SIZE: usize = 1024 * 1024;

/// JSON extractor whose rejections are [`ServerError::JsonError`]
#[derive(Debug)]
pub struct JsonExtractor<T>(pub T);

impl<T, S> FromRequest<S> for JsonExtractor<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(content_type) = req.headers().get(header::CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or_default();
            if !is_json_content_type(content_type) {
                return Err(json_error(format!(
                    "invalid content-type: expected 'application/json', got '{content_type}'"
                )));
            }
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| json_error(format!("failed to read request body: {rejection}")))?;

        if bytes.len() > MAX_JSON_PAYLOAD_SIZE {
            return Err(json_error(format!(
                "request body too large: {} bytes (max: {MAX_JSON_PAYLOAD_SIZE} bytes)",
                bytes.len()
            )));
        }
        if bytes.is_empty() {
            return Err(json_error("request body is empty".to_string()));
        }

        serde_json::from_slice(&bytes)
            .map(JsonExtractor)
            .map_err(|err| json_error(describe(&err)))
    }
}

/// Media type check ignoring case and parameters such as `charset`
fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

fn describe(err: &serde_json::Error) -> String {
    match err.classify() {
        Category::Syntax => format!(
            "invalid JSON syntax at line {}, column {}",
            err.line(),
            err.column()
        ),
        Category::Eof => "request body ends before the JSON value is complete".to_string(),
        Category::Data => format!("body does not match the order schema: {err}"),
        Category::Io => format!("failed to read request body: {err}"),
    }
}

fn json_error(message: String) -> ServerError {
    ServerError::JsonError { message }
}
