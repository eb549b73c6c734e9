use argon2::{
    password_hash::{
        rand_core::{OsRng, RngCore},
        PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Argon2, ParamsBuilder,
};
use chrono::Duration;
use sqlx::PgPool;
use zeroize::Zeroize;

use crate::crypto::jwt::{self, Claims};
use crate::error::{AppError, Result};
use crate::models::user::User;
use crate::repositories::user as user_repo;

/// The memory cost for Argon2 in MB.
const ARGON2_MEMORY_MB: u32 = 19;
/// The number of iterations for Argon2.
const ARGON2_ITERATIONS: u32 = 3;
/// The parallelism factor for Argon2.
const ARGON2_PARALLELISM: u32 = 6;

/// How long an access token stays valid.
const ACCESS_TOKEN_TTL_MINUTES: i64 = 20;

/// Hashes a password using Argon2id.
///
/// # Arguments
///
/// * `password` - The password to hash.
///
/// # Returns
///
/// A `Result` containing the hashed password.
fn hash_password(password: &str) -> Result<String> {
    let mut password_bytes = password.as_bytes().to_vec();

    let mut salt_bytes = [0u8; 16];
    OsRng
        .try_fill_bytes(&mut salt_bytes)
        .map_err(|e| AppError::Internal(format!("Failed to generate salt: {}", e)))?;

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::Crypto(format!("Salt encoding error: {}", e)))?;

    let argon2 = Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        ParamsBuilder::new()
            .m_cost(ARGON2_MEMORY_MB * 1024)
            .t_cost(ARGON2_ITERATIONS)
            .p_cost(ARGON2_PARALLELISM)
            .build()
            .map_err(|e| AppError::Crypto(format!("Argon2 params: {}", e)))?,
    );

    let password_hash = argon2
        .hash_password(&password_bytes, &salt)
        .map_err(|e| AppError::Crypto(format!("Argon2 hash error: {}", e)))?
        .to_string();

    password_bytes.zeroize();
    tracing::debug!("Password hashed successfully with Argon2");
    Ok(password_hash)
}

/// Verifies a password against a hash.
///
/// # Arguments
///
/// * `password` - The password to verify.
/// * `hash` - The hash to verify against.
///
/// # Returns
///
/// A `Result` containing `true` if the password is valid, `false` otherwise.
fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let mut password_bytes = password.as_bytes().to_vec();
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::Crypto(format!("Hash parse error: {}", e)))?;
    let argon2 = Argon2::default();
    let result = argon2.verify_password(&password_bytes, &parsed_hash).is_ok();

    password_bytes.zeroize();
    tracing::debug!("Password verification completed");
    Ok(result)
}

/// Registers a new user with a hashed password and an active account.
///
/// Username and email uniqueness is enforced by the database; a
/// duplicate surfaces as a plain database error.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `username` - The user's username.
/// * `first_name` - The user's first name.
/// * `last_name` - The user's last name.
/// * `email` - The user's email.
/// * `password` - The user's password in plaintext.
/// * `role` - The user's role.
/// * `phone_number` - The user's phone number, if any.
///
/// # Returns
///
/// A `Result<()>`.
#[allow(clippy::too_many_arguments)]
pub async fn register_user(
    db: &PgPool,
    username: String,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    role: String,
    phone_number: Option<String>,
) -> Result<()> {
    tracing::debug!("🔐 Registering user: {}", username);
    let hashed_password = hash_password(&password)?;

    user_repo::create_user(
        db,
        &username,
        &first_name,
        &last_name,
        &email,
        &hashed_password,
        &role,
        phone_number.as_deref(),
    )
    .await?;

    tracing::info!("✅ User registered: {}", username);
    Ok(())
}

/// Authenticates a user.
///
/// Unknown usernames and wrong passwords produce the same error so the
/// caller cannot tell which usernames exist.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `username` - The user's username.
/// * `password` - The user's password in plaintext.
///
/// # Returns
///
/// A `Result` containing the authenticated `User`.
pub async fn authenticate_user(db: &PgPool, username: &str, password: &str) -> Result<User> {
    tracing::debug!("🔐 Authenticating user: {}", username);

    let user = user_repo::find_by_username(db, username)
        .await?
        .ok_or_else(|| AppError::Authentication("Incorrect username or password".to_string()))?;

    if !verify_password(password, &user.hashed_password)? {
        return Err(AppError::Authentication(
            "Incorrect username or password".to_string(),
        ));
    }

    tracing::info!("✅ User authenticated: {}", user.id);

    Ok(user)
}

/// Signs a fresh access token for the given user.
///
/// # Arguments
///
/// * `jwt_secret` - The signing secret.
/// * `user` - The user the token identifies.
///
/// # Returns
///
/// A `Result` containing the encoded token.
pub fn create_access_token(jwt_secret: &str, user: &User) -> Result<String> {
    let claims = Claims::new(
        user.username.clone(),
        user.id,
        user.role.clone(),
        Duration::minutes(ACCESS_TOKEN_TTL_MINUTES),
    );
    jwt::encode_token(jwt_secret, &claims)
}

/// Changes a user's password after checking the old one.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `user_id` - The ID of the user.
/// * `old_password` - The user's current password.
/// * `new_password` - The user's new password.
///
/// # Returns
///
/// A `Result<()>`.
pub async fn change_password(
    db: &PgPool,
    user_id: i32,
    old_password: &str,
    new_password: &str,
) -> Result<()> {
    tracing::info!("🔑 Changing password for user: {}", user_id);

    let user = user_repo::find_by_id(db, user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if !verify_password(old_password, &user.hashed_password)? {
        return Err(AppError::Authentication(
            "Incorrect old password".to_string(),
        ));
    }

    let new_hashed_password = hash_password(new_password)?;
    user_repo::update_password(db, user_id, &new_hashed_password).await?;

    tracing::info!("✅ Password changed for user: {}", user_id);

    Ok(())
}
