//! HTTP/JSON API Layer
//!
//! JSON-over-HTTP endpoints following gRPC path conventions.
//!
//! ## Architecture
//! ```text
//! Client (browser / CLI / other service)
//!       ↓ HTTP POST, JSON body
//! Axum Router (port 50051)
//!       ↓
//! Service Handlers (catalog, counters, draft)
//!       ↓
//! Arc<Catalog> (read-only, loaded once at startup)
//! ```
//!
//! ## Endpoint Convention
//! All endpoints follow gRPC path pattern: `POST /counterpick.<Service>/<Method>`
//! Example: `POST /counterpick.CounterService/ComputeCounters`

pub mod catalog;
pub mod counters;
pub mod draft;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use counterpick_core::catalog::Catalog;
use counterpick_core::config::ServerConfig;
use counterpick_core::counters::ScoringLimits;

/// Shared state available to all API handlers
#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<Catalog>,
    /// Result sizes for counter scoring
    pub limits: ScoringLimits,
}

impl ApiState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            limits: ScoringLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: ScoringLimits) -> Self {
        self.limits = limits;
        self
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    heroes: usize,
    items: usize,
}

async fn health_check(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        heroes: state.catalog.hero_count(),
        items: state.catalog.item_count(),
    })
}

/// Build the full API router with all service endpoints
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(catalog::routes())
        .merge(counters::routes())
        .merge(draft::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP API server and serve until ctrl-c
pub async fn start_api_server(state: ApiState, server: &ServerConfig) -> Result<(), crate::ServerError> {
    let mut app = build_router(state);
    if server.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    let addr = server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| crate::ServerError::Bind { addr: addr.clone(), source })?;
    info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await
        .map_err(crate::ServerError::Serve)?;
    Ok(())
}
