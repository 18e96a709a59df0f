use crate::{
    dto::{GrowthBonusRequest, GrowthCheckInRequest, GrowthResponse},
    errors::ApiError,
    extract::{ValidatedJson, require},
    growth,
};
use axum::Json;
use chrono::Local;

/// POST /api/growth
/// Body: { "attendanceDays": 12, "lastVisitDate": "Thu Oct 15 2026", "today": "2026-10-16" }
/// The client stores the returned `attendanceDays` and `lastVisitDate`.
pub async fn check_in(
    ValidatedJson(payload): ValidatedJson<GrowthCheckInRequest>,
) -> Result<Json<GrowthResponse>, ApiError> {
    let today = payload.today.unwrap_or_else(|| Local::now().date_naive());
    let state = growth::check_in(
        payload.attendance_days,
        payload.last_visit_date.as_deref(),
        today,
    );

    Ok(Json(GrowthResponse {
        success: true,
        state,
    }))
}

/// POST /api/growth/bonus
/// Body: { "attendanceDays": 12, "lastVisitDate": "..." }
pub async fn bonus(
    ValidatedJson(payload): ValidatedJson<GrowthBonusRequest>,
) -> Result<Json<GrowthResponse>, ApiError> {
    let days = require(payload.attendance_days)?;

    Ok(Json(GrowthResponse {
        success: true,
        state: growth::apply_bonus(days, payload.last_visit_date),
    }))
}
