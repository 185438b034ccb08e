//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    database: &'static str,
}

/// Health endpoint for load balancer probes.
///
/// Always answers 200; database connectivity is reported in the
/// `database` field.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.store.ping().await {
        Ok(()) => "ok",
        Err(err) => {
            tracing::warn!(error = %err, "health check database ping failed");
            "unavailable"
        }
    };

    Json(HealthResponse {
        status: "ok",
        service: "snipbin",
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
