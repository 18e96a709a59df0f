//! Request bodies. Every field is optional at the serde level so that a
//! missing field is reported by `validate()` as a 400 rather than rejected by
//! the JSON extractor.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("Field is blank.")));
    }
    Ok(())
}

#[derive(Debug, Validate, Deserialize)]
pub struct SignupRequest {
    #[validate(
        required(message = "Please fill in all fields."),
        length(min = 1, message = "Please fill in all fields.")
    )]
    pub username: Option<String>,
    #[validate(
        required(message = "Please fill in all fields."),
        length(min = 1, message = "Please fill in all fields.")
    )]
    pub password: Option<String>,
    #[validate(
        required(message = "Please fill in all fields."),
        length(min = 1, message = "Please fill in all fields.")
    )]
    pub name: Option<String>,
}

#[derive(Debug, Validate, Deserialize)]
pub struct LoginRequest {
    #[validate(
        required(message = "Please enter your username and password."),
        length(min = 1, message = "Please enter your username and password.")
    )]
    pub username: Option<String>,
    #[validate(
        required(message = "Please enter your username and password."),
        length(min = 1, message = "Please enter your username and password.")
    )]
    pub password: Option<String>,
}

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetProfileRequest {
    #[validate(required(message = "Required information is missing."))]
    pub user_id: Option<i64>,
    #[validate(
        required(message = "Required information is missing."),
        custom(function = "not_blank", message = "Please enter a nickname.")
    )]
    pub nickname: Option<String>,
    #[validate(
        required(message = "Required information is missing."),
        length(min = 1, message = "Required information is missing.")
    )]
    pub rc: Option<String>,
}

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNicknameRequest {
    #[validate(required(message = "Required information is missing."))]
    pub user_id: Option<i64>,
    #[validate(
        required(message = "Required information is missing."),
        custom(function = "not_blank", message = "Please enter a nickname.")
    )]
    pub nickname: Option<String>,
}

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRcRequest {
    #[validate(required(message = "Required information is missing."))]
    pub user_id: Option<i64>,
    #[validate(
        required(message = "Required information is missing."),
        length(min = 1, message = "Required information is missing.")
    )]
    pub rc: Option<String>,
}

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(
        required(message = "Please enter a title and content."),
        custom(function = "not_blank", message = "Please enter a title and content.")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Please enter a title and content."),
        custom(function = "not_blank", message = "Please enter a title and content.")
    )]
    pub content: Option<String>,
    #[validate(
        required(message = "Please enter a title and content."),
        length(min = 1, message = "Please enter a title and content.")
    )]
    pub author: Option<String>,
    pub author_id: Option<i64>,
    pub rc: Option<String>,
}

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleLikeRequest {
    #[validate(required(message = "Required information is missing."))]
    pub post_id: Option<i64>,
    #[validate(required(message = "Required information is missing."))]
    pub user_id: Option<i64>,
}

/// GET /api/posts?rc=...
#[derive(Debug, Default, Deserialize)]
pub struct PostFilter {
    pub rc: Option<String>,
}

/// Device-local widget state as the client last stored it.
#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthCheckInRequest {
    #[serde(default)]
    pub attendance_days: u32,
    pub last_visit_date: Option<String>,
    /// Defaults to the server's local date.
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthBonusRequest {
    #[validate(required(message = "Required information is missing."))]
    pub attendance_days: Option<u32>,
    pub last_visit_date: Option<String>,
}
