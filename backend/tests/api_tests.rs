//! HTTP surface tests
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`, serving the
//! workspace's `static/` directory.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crop_rotation_hub::{create_app, AppState, Config};

const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../static");

fn app() -> Router {
    create_app(AppState {
        config: Arc::new(Config::with_static_dir(STATIC_DIR)),
    })
}

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

// =============================================================================
// Static files
// =============================================================================

mod static_files {
    use super::*;

    #[tokio::test]
    async fn root_serves_index_page() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8_lossy(&body).contains("Crop Rotation Hub"));
    }

    #[tokio::test]
    async fn assets_are_served_from_static_dir() {
        let (status, _) = get("/styles.css").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn index_has_hero_showcase_and_rotation_panel() {
        let (_, body) = get("/").await;
        let page = String::from_utf8_lossy(&body);
        for id in ["hero-canvas", "rotation-demo", "farm-canvas", "rotation-info"] {
            assert!(page.contains(&format!("id=\"{id}\"")), "missing #{id}");
        }
    }

    #[tokio::test]
    async fn script_drives_every_view_with_wall_clock() {
        let (status, body) = get("/app.js").await;
        assert_eq!(status, StatusCode::OK);
        let script = String::from_utf8_lossy(&body);
        for export in ["AmbientView", "DemoView", "FarmView", "rotationInfo"] {
            assert!(script.contains(export), "{export} not used by the page");
        }
        assert!(script.contains("Date.now()"));
        assert!(!script.contains("performance.now"));
    }

    #[tokio::test]
    async fn unknown_path_is_plain_text_404() {
        let (status, body) = get("/no-such-page").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, b"Page not found");
    }
}

// =============================================================================
// JSON endpoints
// =============================================================================

mod endpoints {
    use super::*;

    #[tokio::test]
    async fn health_reports_healthy() {
        let (status, json) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn crop_recommendations_echo_query() {
        let uri = "/api/crop-recommendations?farmSize=12&currentCrop=cotton&soilType=sandy";
        let (status, json) = get_json(uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["farmSize"], "12");
        assert_eq!(json["currentCrop"], "cotton");
        assert_eq!(json["soilType"], "sandy");
        assert_eq!(json["recommendations"], serde_json::json!(["legumes", "root_crops"]));
        assert_eq!(json["estimatedYieldIncrease"], "15-25%");
    }

    #[tokio::test]
    async fn crop_recommendations_default_missing_parameters() {
        let (status, json) = get_json("/api/crop-recommendations").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["farmSize"], "1");
        assert_eq!(json["currentCrop"], "wheat");
        assert_eq!(json["soilType"], "loam");
    }

    #[tokio::test]
    async fn weather_returns_placeholder_conditions() {
        let (status, json) = get_json("/api/weather").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["temperature"], 25);
        assert_eq!(json["humidity"], 65);
        assert_eq!(json["rainfall"], 2.5);
        assert_eq!(json["soilMoisture"], 45);
        assert_eq!(json["forecast"], "Favorable for planting");
    }

    #[tokio::test]
    async fn rotation_plan_runs_calculator() {
        let (status, json) =
            get_json("/api/rotation-plan?farmSize=3&currentCrop=wheat&soilType=loam").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["recommendedCycle"], "3-year rotation");
        assert_eq!(json["estimatedYieldIncrease"], "18-28%");
        assert_eq!(json["sustainabilityScore"], 95);
    }

    #[tokio::test]
    async fn rotation_plan_rejects_missing_fields() {
        let (status, json) = get_json("/api/rotation-plan?farmSize=3&currentCrop=wheat").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "Please fill in all fields");
    }

    #[tokio::test]
    async fn rotation_plan_rejects_non_positive_size() {
        let (status, json) =
            get_json("/api/rotation-plan?farmSize=-2&currentCrop=wheat&soilType=loam").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["field"], "farmSize");
    }

    #[tokio::test]
    async fn rotation_info_for_supported_cycles() {
        for years in [2, 3, 4] {
            let (status, json) = get_json(&format!("/api/rotations/{years}")).await;
            assert_eq!(status, StatusCode::OK);
            assert!(json["title"].is_string());
        }
    }

    #[tokio::test]
    async fn rotation_info_rejects_unsupported_cycle() {
        let (status, json) = get_json("/api/rotations/5").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "INVALID_INPUT");
    }
}
