use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::Response,
};

use crate::{
    crypto::jwt::{self, Claims, INVALID_TOKEN_MESSAGE},
    error::AppError,
    state::AppState,
};

/// The authenticated identity carried by a verified access token.
///
/// Inserted into request extensions by [`require_auth`] so handlers
/// can take it with `Extension<CurrentUser>`.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub username: String,
    pub id: i32,
    pub role: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.sub,
            id: claims.id,
            role: claims.role,
        }
    }
}

/// Extracts the bearer token from the Authorization header.
///
/// # Arguments
///
/// * `headers` - The request headers.
///
/// # Returns
///
/// An `Option` containing the raw token if found.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// A middleware that requires a valid access token to be present.
///
/// Every refusal carries the same message, whether the header is
/// missing, malformed, or the token itself fails verification.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `request` - The incoming request.
/// * `next` - The next middleware in the chain.
///
/// # Returns
///
/// A `Response` or an `AppError`.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    tracing::debug!("🔐 Checking authentication...");

    let token = extract_bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("❌ No bearer token in Authorization header");
        AppError::Authentication(INVALID_TOKEN_MESSAGE.to_string())
    })?;

    let claims = jwt::decode_token(&state.config.jwt_secret, token)?;
    let user = CurrentUser::from(claims);

    tracing::debug!("✅ User authenticated: {}", user.id);

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_is_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );

        assert_eq!(extract_bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn missing_header_yields_none() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn non_bearer_scheme_yields_none() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );

        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn claims_map_onto_current_user() {
        let claims = Claims::new(
            "alice".to_string(),
            7,
            "admin".to_string(),
            chrono::Duration::minutes(20),
        );
        let user = CurrentUser::from(claims);

        assert_eq!(user.username, "alice");
        assert_eq!(user.id, 7);
        assert_eq!(user.role, "admin");
    }
}
