//! WSA Web Server
//!
//! Axum-based dashboard: an input form, the rendered report page and a
//! small JSON API.

pub mod markdown;
pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;
use wsa_core::AppConfig;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/analyze", post(routes::api::analyze))
        .route("/health", get(routes::api::health))
        .layer(cors)
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::dashboard::index))
        .route("/analyze", post(routes::dashboard::analyze))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(config: &AppConfig, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(config);
    let app = create_router(state);

    let listener = bind(host, port).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Bind `host` and `port` as separate parts so bare IPv6 hosts like `::1` work.
async fn bind(host: &str, port: u16) -> std::io::Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind((host, port)).await
}
