//! HTML dashboard route handlers.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use chrono::Utc;

use super::views::{IndexTemplate, ReportTemplate};
use crate::state::AppState;
use wsa_core::report::{self, model::AnalysisRequest};

/// GET / - Render the input form.
pub async fn index(State(state): State<AppState>) -> Response {
    let providers = state.chain.names().into_iter().map(String::from).collect();
    render(IndexTemplate::new(providers))
}

/// POST /analyze - Run one analysis and render the report page.
pub async fn analyze(
    State(state): State<AppState>,
    Form(request): Form<AnalysisRequest>,
) -> Response {
    let report = report::run_analysis(&request, state.source.as_ref(), &state.chain, Utc::now()).await;
    render(ReportTemplate::from_report(&report, request.company()))
}

fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("Template error: {}", e))).into_response(),
    }
}
