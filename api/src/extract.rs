use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::ApiError;

/// A JSON (or url-encoded form) body that has passed its `validator` rules.
///
/// Unreadable bodies and rule failures are both `ApiError::ValidationError`,
/// so clients always get a 400 with the usual `{ success, message }` shape.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"));

        let value = if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| invalid_body(e.body_text()))?;
            value
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| invalid_body(e.body_text()))?;
            value
        };

        value.validate()?;
        Ok(Self(value))
    }
}

fn invalid_body(reason: String) -> ApiError {
    ApiError::ValidationError(format!("Invalid request body: {reason}"))
}

/// Unwraps a field that `validate()` has already checked for presence.
pub fn require<T>(field: Option<T>) -> Result<T, ApiError> {
    field.ok_or_else(|| ApiError::ValidationError("Required information is missing.".into()))
}
