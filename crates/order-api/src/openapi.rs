// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! `OpenAPI` documentation module
//!
//! This module provides `OpenAPI` specification and `Swagger UI` endpoints for API documentation.

use axum::{Json, response::Html};
use utoipa::OpenApi;

use crate::docs::ApiDoc;

/// `OpenAPI` specification endpoint
#[utoipa::path(
    get,
    path = "/v3/api-docs",
    tag = "docs",
    summary = "OpenAPI document",
    responses((status = 200, description = "OpenAPI 3 document"))
)]
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Swagger UI endpoint
#[utoipa::path(
    get,
    path = "/docs",
    tag = "docs",
    summary = "Interactive documentation",
    responses((status = 200, description = "Swagger UI page", body = String, content_type = "text/html"))
)]
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_PAGE)
}

const SWAGGER_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Order API</title>
<link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="orders-api"></div>
<script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
SwaggerUIBundle({ url: "/v3/api-docs", dom_id: "#orders-api" });
</script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn swagger_page_loads_the_served_document() {
        let Html(page) = swagger_ui().await;
        assert!(page.contains(r#"url: "/v3/api-docs""#));
    }

    #[tokio::test]
    async fn served_document_matches_api_doc() {
        let Json(doc) = openapi_spec().await;
        assert!(doc == ApiDoc::openapi());
    }
}
