use crate::error::{AppError, Result};

/// Validates a new password.
///
/// # Arguments
///
/// * `password` - The password to validate.
///
/// # Returns
///
/// A `Result<()>` indicating whether the password is valid.
pub fn validate_password(password: &str) -> Result<()> {
    let length = password.chars().count();

    if length < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters long".to_string(),
        ));
    }

    // Caps the input fed to Argon2.
    if length > 128 {
        return Err(AppError::Validation(
            "Password must be at most 128 characters".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reasonable_password() {
        assert!(validate_password("secret123").is_ok());
    }

    #[test]
    fn rejects_short_password() {
        assert!(validate_password("short").is_err());
    }

    #[test]
    fn rejects_oversized_password() {
        assert!(validate_password(&"x".repeat(128)).is_ok());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Six characters across ten bytes.
        assert!(validate_password("密码1234").is_err());
        // 128 characters spanning 256 bytes sit exactly on the cap.
        assert!(validate_password(&"ö".repeat(128)).is_ok());
    }
}
