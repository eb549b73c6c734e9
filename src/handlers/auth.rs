use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};
use serde::{Deserialize, Serialize};

use crate::{error::Result, services::auth as auth_service, state::AppState};

/// The request payload for user registration.
///
/// Deliberately no `Debug` derive: the payload carries a plaintext
/// password and must never reach the logs.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: String,
    pub phone_number: Option<String>,
}

/// The form payload for the token endpoint.
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// The response payload for a successful login.
#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Handles user registration.
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse> {
    tracing::info!("📝 Register attempt for username: {}", payload.username);

    auth_service::register_user(
        &state.db,
        payload.username,
        payload.first_name,
        payload.last_name,
        payload.email,
        payload.password,
        payload.role,
        payload.phone_number,
    )
    .await?;

    Ok(StatusCode::CREATED)
}

/// Handles login and issues an access token.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Form(payload): Form<LoginForm>,
) -> Result<Json<TokenResponse>> {
    tracing::info!("🔐 Login attempt for username: {}", payload.username);

    let user =
        auth_service::authenticate_user(&state.db, &payload.username, &payload.password).await?;
    let access_token = auth_service::create_access_token(&state.config.jwt_secret, &user)?;

    tracing::info!("✅ User logged in: {}", user.id);

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
