// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Server lifecycle
//!
//! The listener is bound before the readiness flag flips, and the flag stays
//! set through shutdown. Serving stops once the shutdown token is cancelled,
//! either by SIGINT/SIGTERM in [`Server::run`] or by the owner of the token.

use std::net::SocketAddr;

use axum::{
    Router,
    http::{HeaderName, StatusCode},
};
use hyper::Request;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, warn};

use crate::{
    config::ServerConfig,
    error::{ServerError, ServerResult},
    readiness::ReadinessTracker,
    routes::create_routes,
    state::ServerState,
};

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Order API server
#[derive(Debug)]
pub struct Server {
    state: ServerState,
    shutdown: CancellationToken,
}

impl Server {
    /// Create a server that reports `Starting` until [`Server::bind`] succeeds
    pub fn new(config: ServerConfig) -> Self {
        Self {
            state: ServerState::new(config, ReadinessTracker::new()),
            shutdown: CancellationToken::new(),
        }
    }

    /// Shared state handed to every handler
    pub fn state(&self) -> &ServerState {
        &self.state
    }

    /// Token that stops [`Server::serve`] when cancelled
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    fn router(&self) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http().make_span_with(|req: &Request<_>| {
                    let request_id = req
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("unknown");
                    info_span!(
                        "http_request",
                        request_id,
                        method = %req.method(),
                        uri = %req.uri()
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
            .layer(CorsLayer::permissive())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                self.state.config().request_timeout(),
            ));

        create_routes()
            .layer(middleware)
            .with_state(self.state.clone())
    }

    /// Bind the configured address and mark the service ready
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Bind` if the address cannot be bound. Readiness is
    /// left untouched in that case.
    pub async fn bind(&self) -> ServerResult<TcpListener> {
        let address = self.state.config().socket_addr();
        let listener = TcpListener::bind(address)
            .await
            .map_err(|source| ServerError::Bind { address, source })?;

        self.state.readiness().mark_ready();
        Ok(listener)
    }

    /// Serve requests on `listener` until the shutdown token is cancelled
    ///
    /// In-flight requests are drained before this returns.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Shutdown` if the accept loop fails.
    pub async fn serve(self, listener: TcpListener) -> ServerResult<()> {
        let router = self.router();
        let shutdown = self.shutdown;

        axum::serve(listener, router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await
            .map_err(|source| ServerError::Shutdown { source })?;

        info!("order API server stopped");
        Ok(())
    }

    /// Bind, then serve until SIGINT or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Bind` or `ServerError::Startup` if the listener
    /// cannot be set up, and `ServerError::Shutdown` if serving fails.
    pub async fn run(self) -> ServerResult<()> {
        let listener = self.bind().await?;
        let address: SocketAddr = listener
            .local_addr()
            .map_err(|source| ServerError::Startup { source })?;

        info!(
            %address,
            validation_mode = %self.state.validation_mode(),
            "order API server listening"
        );

        tokio::spawn(cancel_on_signal(self.shutdown_token()));
        self.serve(listener).await
    }
}

async fn cancel_on_signal(shutdown: CancellationToken) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => match result {
            Ok(()) => warn!("SIGINT received, shutting down"),
            Err(e) => {
                error!(error = %e, "failed to listen for SIGINT");
                return;
            }
        },
        result = terminate() => match result {
            Ok(()) => warn!("SIGTERM received, shutting down"),
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                return;
            }
        },
        () = shutdown.cancelled() => return,
    }
    shutdown.cancel();
}

#[cfg(unix)]
async fn terminate() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    signal(SignalKind::terminate())?.recv().await;
    Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> std::io::Result<()> {
    std::future::pending().await
}
