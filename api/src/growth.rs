//! The attendance "growth" widget, modelled as pure functions.
//!
//! Clients keep two device-local values: the cumulative number of days they
//! visited and the date string of their last visit. Feeding them through
//! [`check_in`] yields the updated values plus everything needed to draw the
//! plant.

use chrono::NaiveDate;
use serde::Serialize;

pub const ASSET_PATH: &str = "images/growth_round/";
pub const DAYS_PER_STAGE: u32 = 36;
pub const MAX_STAGE: u32 = 10;
/// Days granted by the widget's hidden five-click bonus.
pub const BONUS_DAYS: u32 = 10;

const VISIT_DATE_FORMAT: &str = "%a %b %d %Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthState {
    pub attendance_days: u32,
    pub last_visit_date: Option<String>,
    pub stage: u32,
    pub label: String,
    pub badge: String,
    pub image: String,
}

impl GrowthState {
    pub fn new(attendance_days: u32, last_visit_date: Option<String>) -> Self {
        let stage = stage_for(attendance_days);
        Self {
            attendance_days,
            last_visit_date,
            stage,
            label: format!("🌱 Level {stage}"),
            badge: format!("🌱 D+{attendance_days}"),
            image: format!("{ASSET_PATH}growth_round_{stage}.png"),
        }
    }
}

/// `clamp(ceil(days / 36), 1, 10)`
pub fn stage_for(attendance_days: u32) -> u32 {
    attendance_days.div_ceil(DAYS_PER_STAGE).clamp(1, MAX_STAGE)
}

/// Formats a date the way the widget stores it, e.g. `Fri Oct 16 2026`.
pub fn visit_date(date: NaiveDate) -> String {
    date.format(VISIT_DATE_FORMAT).to_string()
}

/// Counts today as a new attendance day unless the last visit was already
/// today.
pub fn check_in(stored_days: u32, last_visit: Option<&str>, today: NaiveDate) -> GrowthState {
    let today = visit_date(today);
    let days = if last_visit == Some(today.as_str()) {
        stored_days
    } else {
        stored_days.saturating_add(1)
    };
    GrowthState::new(days, Some(today))
}

pub fn apply_bonus(stored_days: u32, last_visit: Option<String>) -> GrowthState {
    GrowthState::new(stored_days.saturating_add(BONUS_DAYS), last_visit)
}
