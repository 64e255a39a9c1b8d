//! HTTP handler describing each rotation cycle

use axum::{extract::Path, Json};
use shared::{RotationCycle, RotationInfo};

use crate::error::AppResult;

/// Describe the 2, 3 or 4 year rotation
pub async fn get_rotation_info(Path(years): Path<u32>) -> AppResult<Json<RotationInfo>> {
    let cycle = RotationCycle::try_from(years)?;
    Ok(Json(cycle.info()))
}
