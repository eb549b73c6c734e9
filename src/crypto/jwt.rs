use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// The message returned for every token the validator refuses.
pub const INVALID_TOKEN_MESSAGE: &str = "Could not validate credentials";

/// Claims carried by an access token.
///
/// All four fields are required; a token missing any of them fails
/// decoding and is treated like any other invalid token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The username (standard JWT subject claim).
    pub sub: String,
    /// The user's id.
    pub id: i32,
    /// The user's role.
    pub role: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

impl Claims {
    /// Builds claims for the given identity, expiring `ttl` from now.
    pub fn new(username: String, user_id: i32, role: String, ttl: Duration) -> Self {
        let exp = (Utc::now() + ttl).timestamp();
        Self {
            sub: username,
            id: user_id,
            role,
            exp,
        }
    }
}

/// Signs the given claims into an HS256 access token.
///
/// # Arguments
///
/// * `secret` - The signing secret.
/// * `claims` - The claims to encode.
///
/// # Returns
///
/// A `Result` containing the encoded token.
pub fn encode_token(secret: &str, claims: &Claims) -> Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Crypto(format!("Token signing failed: {}", e)))
}

/// Verifies an access token's signature and expiry and returns its claims.
///
/// Any failure (bad signature, expired, malformed, missing claim) maps
/// to the same `Authentication` error so the caller cannot distinguish
/// why a token was refused.
///
/// # Arguments
///
/// * `secret` - The signing secret.
/// * `token` - The raw token string.
///
/// # Returns
///
/// A `Result` containing the decoded `Claims`.
pub fn decode_token(secret: &str, token: &str) -> Result<Claims> {
    // No expiry leeway: a token is refused the moment `exp` passes.
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Authentication(INVALID_TOKEN_MESSAGE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    fn sample_claims(ttl: Duration) -> Claims {
        Claims::new("alice".to_string(), 7, "admin".to_string(), ttl)
    }

    #[test]
    fn round_trip_preserves_identity() {
        let claims = sample_claims(Duration::minutes(20));
        let token = encode_token(SECRET, &claims).unwrap();
        let decoded = decode_token(SECRET, &token).unwrap();

        assert_eq!(decoded.sub, "alice");
        assert_eq!(decoded.id, 7);
        assert_eq!(decoded.role, "admin");
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn expired_token_is_refused() {
        let claims = sample_claims(Duration::minutes(-30));
        let token = encode_token(SECRET, &claims).unwrap();

        assert!(matches!(
            decode_token(SECRET, &token),
            Err(AppError::Authentication(_))
        ));
    }

    #[test]
    fn expiry_has_no_leeway() {
        // Half a minute past `exp`: inside jsonwebtoken's default 60s
        // grace window, which this validator does not grant.
        let claims = sample_claims(Duration::seconds(-30));
        let token = encode_token(SECRET, &claims).unwrap();

        assert!(matches!(
            decode_token(SECRET, &token),
            Err(AppError::Authentication(_))
        ));
    }

    #[test]
    fn wrong_secret_is_refused() {
        let token = encode_token(SECRET, &sample_claims(Duration::minutes(20))).unwrap();

        assert!(matches!(
            decode_token("other-secret", &token),
            Err(AppError::Authentication(_))
        ));
    }

    #[test]
    fn garbage_token_is_refused() {
        assert!(matches!(
            decode_token(SECRET, "not-a-token"),
            Err(AppError::Authentication(_))
        ));
    }

    #[test]
    fn token_missing_identity_claims_is_refused() {
        // A token carrying only `sub` and `exp`: structurally valid JWT,
        // but `id` and `role` are required by the claims type.
        #[derive(Serialize)]
        struct Partial {
            sub: String,
            exp: i64,
        }

        let partial = Partial {
            sub: "alice".to_string(),
            exp: (Utc::now() + Duration::minutes(20)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &partial,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            decode_token(SECRET, &token),
            Err(AppError::Authentication(_))
        ));
    }
}
