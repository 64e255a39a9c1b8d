//! Crop Rotation Hub - Web Server
//!
//! Serves the marketing page and its assets, plus a handful of JSON endpoints
//! backing the page's calculator and weather panel.

use axum::{handler::HandlerWithoutStateExt, http::StatusCode, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = &state.config.server.static_dir;
    let index = ServeFile::new(static_dir.join("index.html"));
    let assets = ServeDir::new(static_dir).not_found_service(not_found.into_service());

    Router::new()
        .route_service("/", index)
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .fallback_service(assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Plain-text 404 for anything that is neither a route nor a static file
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page not found")
}
