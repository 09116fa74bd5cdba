// File: src/validation/validators.rs
// Purpose: Basic value validators (format and length checks)

use once_cell::sync::Lazy;
use regex::Regex;

// Email validation regex
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check minimum length in characters
pub fn check_min_length(value: &str, min: usize) -> Result<(), String> {
    if value.chars().count() < min {
        Err(format!("Must be at least {} characters", min))
    } else {
        Ok(())
    }
}

/// Check maximum length in characters
pub fn check_max_length(value: &str, max: usize) -> Result<(), String> {
    if value.chars().count() > max {
        Err(format!("Must be at most {} characters", max))
    } else {
        Ok(())
    }
}

/// Check that a value is non-empty
pub fn check_required(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("This field is required".to_string())
    } else {
        Ok(())
    }
}
