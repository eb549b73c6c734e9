use crate::error::{AppError, Result};

/// Validates a book title.
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

/// Validates a book author.
///
/// # Arguments
///
/// * `author` - The author to validate.
///
/// # Returns
///
/// A `Result<()>` indicating whether the author is valid.
pub fn validate_author(author: &str) -> Result<()> {
    if author.chars().count() < 3 {
        return Err(AppError::Validation(
            "Author must be at least 3 characters long".to_string(),
        ));
    }

    Ok(())
}

/// Validates a book description.
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
    if !(1..=100).contains(&length) {
        return Err(AppError::Validation(
            "Description must be between 1 and 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validates a book rating.
///
/// # Arguments
///
/// * `rating` - The rating to validate.
///
/// # Returns
///
/// A `Result<()>` indicating whether the rating is valid.
pub fn validate_rating(rating: i32) -> Result<()> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::Validation(
            "Rating must be between 1 and 5".to_string(),
        ));
    }

    Ok(())
}

/// Validates a book id taken from the request path.
///
/// # Arguments
///
/// * `id` - The id to validate.
///
/// # Returns
///
/// A `Result<()>` indicating whether the id is valid.
pub fn validate_book_id(id: i32) -> Result<()> {
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
    fn title_and_author_need_three_characters() {
        assert!(validate_title("ab").is_err());
        assert!(validate_title("abc").is_ok());
        assert!(validate_author("xy").is_err());
        assert!(validate_author("xyz").is_ok());
    }

    #[test]
    fn description_allows_single_character() {
        assert!(validate_description("").is_err());
        assert!(validate_description("a").is_ok());
        assert!(validate_description(&"x".repeat(100)).is_ok());
        assert!(validate_description(&"x".repeat(101)).is_err());
    }

    #[test]
    fn rating_must_be_one_through_five() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(3).is_ok());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // Two characters across six bytes.
        assert!(validate_title("日本").is_err());
        assert!(validate_author("日本").is_err());
        assert!(validate_author("日本語").is_ok());
        // One hundred characters spanning 400 bytes stay under the cap.
        assert!(validate_description(&"🦀".repeat(100)).is_ok());
    }
}
