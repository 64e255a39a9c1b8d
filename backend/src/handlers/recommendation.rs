//! HTTP handlers for crop rotation recommendations

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use shared::{
    generate_recommendation, validate_calculator_form, RotationRecommendation, MISSING_FIELDS,
};

use crate::error::{AppError, AppResult};

/// Query parameters shared by the recommendation endpoints
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationQuery {
    pub farm_size: Option<String>,
    pub current_crop: Option<String>,
    pub soil_type: Option<String>,
}

/// Echo of the submitted farm with the general-purpose recommendation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendationEcho {
    pub farm_size: String,
    pub current_crop: String,
    pub soil_type: String,
    pub recommendations: Vec<&'static str>,
    pub estimated_yield_increase: &'static str,
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Echo the query back with a fixed recommendation; never fails
pub async fn get_crop_recommendations(
    Query(query): Query<RecommendationQuery>,
) -> Json<CropRecommendationEcho> {
    Json(CropRecommendationEcho {
        farm_size: or_default(query.farm_size, "1"),
        current_crop: or_default(query.current_crop, "wheat"),
        soil_type: or_default(query.soil_type, "loam"),
        recommendations: vec!["legumes", "root_crops"],
        estimated_yield_increase: "15-25%",
    })
}

/// Run the rotation calculator for the submitted farm
pub async fn get_rotation_plan(
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<RotationRecommendation>> {
    let input = validate_calculator_form(
        query.farm_size.as_deref(),
        query.current_crop.as_deref(),
        query.soil_type.as_deref(),
    )
    .map_err(|message| {
        let field = if message == MISSING_FIELDS { "form" } else { "farmSize" };
        AppError::validation(field, message)
    })?;

    Ok(Json(generate_recommendation(
        input.farm_size,
        &input.current_crop,
        &input.soil_type,
    )))
}
