//! JSON API route handlers.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;
use wsa_core::report::{self, model::AnalysisRequest, model::Report};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub providers: Vec<String>,
}

/// POST /api/analyze - Run one analysis and return the report as JSON.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Json<Report> {
    Json(report::run_analysis(&request, state.source.as_ref(), &state.chain, Utc::now()).await)
}

/// GET /api/health - Report which AI providers are configured.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let providers: Vec<String> = state.chain.names().into_iter().map(String::from).collect();
    Json(HealthResponse {
        status: if providers.is_empty() { "degraded" } else { "ok" },
        providers,
    })
}
