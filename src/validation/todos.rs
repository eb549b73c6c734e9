use crate::error::{AppError, Result};

/// Validates a task title.
///
/// # Arguments
///
/// * `title` - The title to validate.
///
/// # Returns
///
/// A `Result<()>` indicating whether the title is valid.
pub fn validate_title(title: &str) -> Result<()> {
    if title.chars().count() < 3 {
        return Err(AppError::Validation(
            "Title must be at least 3 characters long".to_string(),
        ));
    }

    Ok(())
}

/// Validates a task description.
///
/// # Arguments
///
/// * `description` - The description to validate.
///
/// # Returns
///
/// A `Result<()>` indicating whether the description is valid.
pub fn validate_description(description: &str) -> Result<()> {
    let length = description.chars().count();
    if !(3..=100).contains(&length) {
        return Err(AppError::Validation(
            "Description must be between 3 and 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validates a task priority.
///
/// # Arguments
///
/// * `priority` - The priority to validate.
///
/// # Returns
///
/// A `Result<()>` indicating whether the priority is valid.
pub fn validate_priority(priority: i32) -> Result<()> {
    if !(1..=5).contains(&priority) {
        return Err(AppError::Validation(
            "Priority must be between 1 and 5".to_string(),
        ));
    }

    Ok(())
}

/// Validates a task id taken from the request path.
///
/// # Arguments
///
/// * `id` - The id to validate.
///
/// # Returns
///
/// A `Result<()>` indicating whether the id is valid.
pub fn validate_todo_id(id: i32) -> Result<()> {
    if id < 1 {
        return Err(AppError::Validation(
            "Id must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_needs_three_characters() {
        assert!(validate_title("ab").is_err());
        assert!(validate_title("abc").is_ok());
    }

    #[test]
    fn description_bounds_are_inclusive() {
        assert!(validate_description("ab").is_err());
        assert!(validate_description("abc").is_ok());
        assert!(validate_description(&"x".repeat(100)).is_ok());
        assert!(validate_description(&"x".repeat(101)).is_err());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // "日本" is six bytes but two characters.
        assert!(validate_title("日本").is_err());
        assert!(validate_title("日本語").is_ok());
        // Forty characters spanning 160 bytes stay under the cap.
        assert!(validate_description(&"🦀".repeat(40)).is_ok());
        assert!(validate_description("🦀🦀").is_err());
    }

    #[test]
    fn priority_must_be_one_through_five() {
        assert!(validate_priority(0).is_err());
        assert!(validate_priority(1).is_ok());
        assert!(validate_priority(5).is_ok());
        assert!(validate_priority(6).is_err());
    }

    #[test]
    fn ids_start_at_one() {
        assert!(validate_todo_id(0).is_err());
        assert!(validate_todo_id(-4).is_err());
        assert!(validate_todo_id(1).is_ok());
    }
}
