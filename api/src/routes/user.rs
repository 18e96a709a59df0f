use crate::{
    AppState,
    dto::{
        LoginRequest, LoginResponse, MessageResponse, SetProfileRequest, SignupRequest,
        UpdateNicknameRequest, UpdateRcRequest,
    },
    errors::ApiError,
    extract::{ValidatedJson, require},
    models::{ResidentialCollege, User, user::nickname_taken},
    store::next_id,
};
use axum::{Json, extract::State};
use chrono::Utc;
use tracing::{info, warn};

fn user_not_found() -> ApiError {
    ApiError::NotFound("User not found.".into())
}

fn nickname_in_use() -> ApiError {
    ApiError::Conflict("Nickname is already in use.".into())
}

fn parse_college(raw: &str) -> Result<ResidentialCollege, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::ValidationError("Please select a valid residential college.".into()))
}

/// POST /api/signup
/// Body: { "username": "...", "password": "...", "name": "..." }
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignupRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let username = require(payload.username)?;
    let password = require(payload.password)?;
    let name = require(payload.name)?;

    let user = state
        .store
        .users
        .update(move |users| -> Result<_, ApiError> {
            if users.iter().any(|u| u.username == username) {
                return Err(ApiError::Conflict("Username already exists.".into()));
            }

            let user = User {
                id: next_id(users),
                username,
                password,
                name,
                nickname: None,
                rc: None,
                created_at: Utc::now(),
            };
            users.push(user.clone());
            Ok(user)
        })
        .await?;

    info!("New user registered: {} ({})", user.username, user.id);

    Ok(Json(MessageResponse::ok("Signup complete.")))
}

/// POST /api/login
/// Body: { "username": "...", "password": "..." }
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let username = require(payload.username)?;
    let password = require(payload.password)?;

    let users = state.store.users.load().await?;
    let Some(user) = users
        .into_iter()
        .find(|u| u.matches_credentials(&username, &password))
    else {
        warn!("Rejected login for {}", username);
        return Err(ApiError::InvalidCredentials);
    };

    info!("User logged in: {}", user.username);

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful.".into(),
        user: user.into(),
    }))
}

/// POST /api/set-profile
/// Body: { "userId": 1, "nickname": "...", "rc": "College A" }
pub async fn set_profile(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SetProfileRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user_id = require(payload.user_id)?;
    let nickname = require(payload.nickname)?.trim().to_string();
    let rc = require(payload.rc)?;

    let (nickname, rc) = state
        .store
        .users
        .update(move |users| -> Result<_, ApiError> {
            let idx = users
                .iter()
                .position(|u| u.id == user_id)
                .ok_or_else(user_not_found)?;
            if nickname_taken(users, &nickname, user_id) {
                return Err(nickname_in_use());
            }
            let rc = parse_college(&rc)?;

            let user = &mut users[idx];
            user.nickname = Some(nickname.clone());
            user.rc = Some(rc);
            Ok((nickname, rc))
        })
        .await?;

    info!("User {} set profile: nickname={}, rc={}", user_id, nickname, rc);

    Ok(Json(MessageResponse::ok("Profile saved.")))
}

/// POST /api/update-nickname
/// Body: { "userId": 1, "nickname": "..." }
pub async fn update_nickname(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateNicknameRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user_id = require(payload.user_id)?;
    let nickname = require(payload.nickname)?.trim().to_string();

    let nickname = state
        .store
        .users
        .update(move |users| -> Result<_, ApiError> {
            let idx = users
                .iter()
                .position(|u| u.id == user_id)
                .ok_or_else(user_not_found)?;
            if nickname_taken(users, &nickname, user_id) {
                return Err(nickname_in_use());
            }

            users[idx].nickname = Some(nickname.clone());
            Ok(nickname)
        })
        .await?;

    info!("User {} changed nickname to {}", user_id, nickname);

    Ok(Json(MessageResponse::ok("Nickname updated.")))
}

/// POST /api/set-nickname
/// Superseded by /api/set-profile and /api/update-nickname; kept for old
/// clients.
pub async fn set_nickname(
    state: State<AppState>,
    payload: ValidatedJson<UpdateNicknameRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    warn!("Deprecated endpoint /api/set-nickname called");
    update_nickname(state, payload).await
}

/// POST /api/update-rc
/// Body: { "userId": 1, "rc": "College B" }
pub async fn update_rc(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateRcRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user_id = require(payload.user_id)?;
    let rc = parse_college(&require(payload.rc)?)?;

    state
        .store
        .users
        .update(move |users| -> Result<_, ApiError> {
            let user = users
                .iter_mut()
                .find(|u| u.id == user_id)
                .ok_or_else(user_not_found)?;
            user.rc = Some(rc);
            Ok(())
        })
        .await?;

    info!("User {} moved to {}", user_id, rc);

    Ok(Json(MessageResponse::ok("Residential college updated.")))
}
