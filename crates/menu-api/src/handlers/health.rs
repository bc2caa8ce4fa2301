//! Liveness endpoint with a summary of what the server is wired to.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub storage: &'static str,
    pub default_menu: String,
    pub routes: usize,
}

/// Health handler - GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        storage: state.config.database.backend.as_str(),
        default_menu: state.config.menu.default_menu.clone(),
        routes: state.routes.len(),
    })
}
