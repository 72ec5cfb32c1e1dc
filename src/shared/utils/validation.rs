use regex::Regex;
use std::sync::OnceLock;

use crate::shared::errors::AppError;

pub const EARLIEST_RELEASE_YEAR: u16 = 1900;

fn watchlist_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[\p{L}\p{N}\s\-_'!&.,:]+$").expect("watchlist name pattern is valid")
    })
}

pub struct Validator;

impl Validator {
    pub fn validate_name(kind: &str, name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} name cannot be empty",
                kind
            )));
        }
        Ok(())
    }

    pub fn validate_movie_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Title cannot be empty".to_string(),
            ));
        }
        if title.len() > 255 {
            return Err(AppError::ValidationError(
                "Title too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_release_year(year: u16) -> Result<(), AppError> {
        if year < EARLIEST_RELEASE_YEAR {
            return Err(AppError::ValidationError(format!(
                "Release year must be {} or later",
                EARLIEST_RELEASE_YEAR
            )));
        }
        Ok(())
    }

    pub fn validate_runtime(minutes: u32) -> Result<(), AppError> {
        if minutes < 1 {
            return Err(AppError::ValidationError(
                "Only positive numbers can be assigned to runtime minutes".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_score(score: f32) -> Result<(), AppError> {
        if !(0.0..=10.0).contains(&score) {
            return Err(AppError::ValidationError(
                "Score must be between 0 and 10".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_review_rating(rating: u8) -> Result<(), AppError> {
        if !(1..=10).contains(&rating) {
            return Err(AppError::ValidationError(
                "Please enter a number between 1 and 10".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_review_text(text: &str) -> Result<(), AppError> {
        if text.trim().chars().count() < 2 {
            return Err(AppError::ValidationError(
                "Please write a longer review".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_watchlist_name(name: &str) -> Result<(), AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Watchlist name cannot be empty".to_string(),
            ));
        }
        if name.len() > 100 {
            return Err(AppError::ValidationError(
                "Watchlist name too long (max 100 characters)".to_string(),
            ));
        }
        if !watchlist_name_pattern().is_match(name) {
            return Err(AppError::ValidationError(
                "Watchlist name contains invalid characters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_username(username: &str) -> Result<(), AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::ValidationError(
                "Your username is required".to_string(),
            ));
        }
        if username.chars().count() < 3 {
            return Err(AppError::ValidationError(
                "Your username is too short".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_password(password: &str) -> Result<(), AppError> {
        if password.is_empty() {
            return Err(AppError::ValidationError(
                "Your password is required".to_string(),
            ));
        }
        let long_enough = password.chars().count() >= 8;
        let has_upper = password.chars().any(|c| c.is_uppercase());
        let has_lower = password.chars().any(|c| c.is_lowercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        if !(long_enough && has_upper && has_lower && has_digit) {
            return Err(AppError::ValidationError(
                "Your password must at least 8 characters, and contain an upper case letter, a lower case letter and a digit"
                    .to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_pagination(page: u32, page_size: u32) -> Result<(), AppError> {
        if page == 0 {
            return Err(AppError::ValidationError(
                "Page numbers start at 1".to_string(),
            ));
        }
        if page_size == 0 {
            return Err(AppError::ValidationError(
                "Page size must be positive".to_string(),
            ));
        }
        if page_size > 100 {
            return Err(AppError::ValidationError(
                "Page size cannot exceed 100".to_string(),
            ));
        }
        Ok(())
    }
}
