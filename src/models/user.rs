use serde::Serialize;
use sqlx::FromRow;

/// A user row as persisted in the `users` table.
///
/// Deliberately does not derive `Serialize`: the password hash must
/// never end up in a response body. Use [`UserResponse`] for that.
#[derive(FromRow, Clone, Debug)]
pub struct User {
    /// The unique identifier for the user.
    pub id: i32,
    /// The user's unique username.
    pub username: String,
    /// The user's first name.
    pub first_name: String,
    /// The user's last name.
    pub last_name: String,
    /// The user's unique email address.
    pub email: String,
    /// The user's Argon2 password hash.
    pub hashed_password: String,
    /// The user's role (free-form string, e.g. "admin").
    pub role: String,
    /// Whether the user is active.
    pub is_active: bool,
    /// The user's phone number, if any.
    pub phone_number: Option<String>,
}

/// The client-facing representation of a user.
#[derive(Serialize, Clone, Debug)]
pub struct UserResponse {
    /// The unique identifier for the user.
    pub id: i32,
    /// The user's username.
    pub username: String,
    /// The user's first name.
    pub first_name: String,
    /// The user's last name.
    pub last_name: String,
    /// The user's email address.
    pub email: String,
    /// The user's role.
    pub role: String,
    /// Whether the user is active.
    pub is_active: bool,
    /// The user's phone number, if any.
    pub phone_number: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role,
            is_active: user.is_active,
            phone_number: user.phone_number,
        }
    }
}
