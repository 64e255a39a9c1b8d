//! HTTP handler for the field weather endpoint

use axum::Json;
use shared::FieldConditions;

/// Current field conditions.
///
/// Serves the fixed placeholder report; no live weather source is connected.
pub async fn get_weather() -> Json<FieldConditions> {
    Json(FieldConditions::placeholder())
}
