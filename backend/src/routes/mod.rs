//! Route definitions for the Crop Rotation Hub

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Placeholder endpoints consumed by the page
        .route("/crop-recommendations", get(handlers::get_crop_recommendations))
        .route("/weather", get(handlers::get_weather))
        // Calculator and rotation descriptions
        .route("/rotation-plan", get(handlers::get_rotation_plan))
        .route("/rotations/:years", get(handlers::get_rotation_info))
}
