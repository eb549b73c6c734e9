use sqlx::PgPool;

use crate::{error::Result, models::user::User};

/// Inserts a new user row.
///
/// Uniqueness of `username` and `email` is enforced by the database;
/// a duplicate surfaces as a plain database error, not as a distinct
/// conflict variant.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `username` - The user's unique username.
/// * `first_name` - The user's first name.
/// * `last_name` - The user's last name.
/// * `email` - The user's unique email address.
/// * `hashed_password` - The Argon2 hash of the user's password.
/// * `role` - The user's role.
/// * `phone_number` - The user's phone number, if any.
///
/// # Returns
///
/// A `Result<()>`.
#[allow(clippy::too_many_arguments)]
pub async fn create_user(
    db: &PgPool,
    username: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    hashed_password: &str,
    role: &str,
    phone_number: Option<&str>,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO users (username, first_name, last_name, email, hashed_password, role, is_active, phone_number)
        VALUES ($1, $2, $3, $4, $5, $6, true, $7)
        "#,
    )
    .bind(username)
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(hashed_password)
    .bind(role)
    .bind(phone_number)
    .execute(db)
    .await?;

    Ok(())
}

/// Finds an active user by username.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `username` - The username to look up.
///
/// # Returns
///
/// A `Result` containing an `Option<User>`.
pub async fn find_by_username(db: &PgPool, username: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, first_name, last_name, email, hashed_password, role, is_active, phone_number
        FROM users
        WHERE username = $1 AND is_active = true
        "#,
    )
    .bind(username)
    .fetch_optional(db)
    .await?;

    Ok(user)
}

/// Finds a user by id.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `user_id` - The id to look up.
///
/// # Returns
///
/// A `Result` containing an `Option<User>`.
pub async fn find_by_id(db: &PgPool, user_id: i32) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, first_name, last_name, email, hashed_password, role, is_active, phone_number
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(user)
}

/// Updates a user's password hash.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `user_id` - The id of the user.
/// * `hashed_password` - The new Argon2 hash.
///
/// # Returns
///
/// A `Result<()>`.
pub async fn update_password(db: &PgPool, user_id: i32, hashed_password: &str) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE users
        SET hashed_password = $1
        WHERE id = $2
        "#,
    )
    .bind(hashed_password)
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(())
}
