use crate::utils::error::{Result, StorefrontError};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Form field checks report a user-facing message per field.
pub fn require_field(field_name: &str, value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StorefrontError::validation(field_name, message));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !email_pattern().is_match(value.trim()) {
        return Err(StorefrontError::validation(field_name, "Invalid email"));
    }
    Ok(())
}

pub fn validate_min_length(field_name: &str, value: &str, min: usize, message: &str) -> Result<()> {
    if value.chars().count() < min {
        return Err(StorefrontError::validation(field_name, message));
    }
    Ok(())
}

pub fn validate_matches(field_name: &str, value: &str, expected: &str, message: &str) -> Result<()> {
    if value != expected {
        return Err(StorefrontError::validation(field_name, message));
    }
    Ok(())
}
