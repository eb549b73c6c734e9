use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    middleware_layer::auth::CurrentUser,
    models::user::UserResponse,
    repositories::user as user_repo,
    services::auth as auth_service,
    state::AppState,
    validation::auth::validate_password,
};

/// The request payload for changing the caller's password.
///
/// Deliberately no `Debug` derive: both fields are plaintext passwords
/// and must never reach the logs.
#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub password: String,
    pub new_password: String,
}

/// Returns the caller's own user record.
#[axum::debug_handler]
pub async fn get_current_user(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<UserResponse>> {
    let record = user_repo::find_by_id(&state.db, user.id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(UserResponse::from(record)))
}

/// Changes the caller's password.
#[axum::debug_handler]
pub async fn change_password(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<StatusCode> {
    validate_password(&payload.new_password)?;

    auth_service::change_password(&state.db, user.id, &payload.password, &payload.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
