//! Field-level form validation
//!
//! Validation failures are values, not errors: each check pushes a
//! `FieldError` that the UI renders inline next to the offending field.
//! Nothing here touches I/O.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/]+\.[^\s]+$").expect("url regex is valid"));

/// A single inline validation failure, addressed to a form field.
///
/// Nested fields use dotted paths, e.g. `address.formatted_address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Require a trimmed minimum length.
pub fn require_min_chars(errors: &mut Vec<FieldError>, field: &str, value: &str, min: usize) {
    if value.trim().chars().count() < min {
        let message = if min <= 1 {
            format!("{} is required", label(field))
        } else {
            format!("{} must be at least {} characters", label(field), min)
        };
        errors.push(FieldError::new(field, message));
    }
}

/// Reject digits anywhere in the value.
pub fn require_no_digits(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.chars().any(|c| c.is_ascii_digit()) {
        errors.push(FieldError::new(
            field,
            format!("{} cannot contain numbers", label(field)),
        ));
    }
}

/// Require a plausible email address.
pub fn require_email(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if !EMAIL_RE.is_match(value.trim()) {
        errors.push(FieldError::new(field, "Please enter a valid email address"));
    }
}

/// Require `value == true` (terms acceptance style checkboxes).
pub fn require_true(errors: &mut Vec<FieldError>, field: &str, value: bool, message: &str) {
    if !value {
        errors.push(FieldError::new(field, message));
    }
}

/// Normalize a website value the way the account forms do: an empty value is
/// accepted as-is, anything else gets an `https://` prefix when no scheme is
/// present and must then parse as a URL.
///
/// Returns the normalized value, or `None` after recording a field error.
pub fn normalize_website(
    errors: &mut Vec<FieldError>,
    field: &str,
    value: &str,
) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(String::new());
    }

    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    if URL_RE.is_match(&normalized) {
        Some(normalized)
    } else {
        errors.push(FieldError::new(field, "Please enter a valid URL"));
        None
    }
}

/// Human label for a (possibly dotted) field path: `phone_number` becomes
/// `Phone number`, `address.zip_code` becomes `Zip code`.
fn label(field: &str) -> String {
    let leaf = field.rsplit('.').next().unwrap_or(field);
    let spaced = leaf.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_min_chars_flags_short_values() {
        let mut errors = Vec::new();
        require_min_chars(&mut errors, "full_name", "J", 2);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "full_name");
        assert!(errors[0].message.contains("at least 2"));
    }

    #[test]
    fn test_require_min_chars_one_reads_as_required() {
        let mut errors = Vec::new();
        require_min_chars(&mut errors, "industry", "  ", 1);
        assert_eq!(errors[0].message, "Industry is required");
    }

    #[test]
    fn test_require_email_accepts_plain_addresses() {
        let mut errors = Vec::new();
        require_email(&mut errors, "email", "jane@example.com");
        assert!(errors.is_empty());

        require_email(&mut errors, "email", "not-an-email");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_require_no_digits() {
        let mut errors = Vec::new();
        require_no_digits(&mut errors, "full_name", "Jane D03");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("cannot contain numbers"));
    }

    #[test]
    fn test_normalize_website_prefixes_scheme() {
        let mut errors = Vec::new();
        let normalized = normalize_website(&mut errors, "website", "example.com");
        assert_eq!(normalized.as_deref(), Some("https://example.com"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_normalize_website_keeps_existing_scheme() {
        let mut errors = Vec::new();
        let normalized = normalize_website(&mut errors, "website", "http://example.com/about");
        assert_eq!(normalized.as_deref(), Some("http://example.com/about"));
    }

    #[test]
    fn test_normalize_website_empty_is_accepted() {
        let mut errors = Vec::new();
        assert_eq!(normalize_website(&mut errors, "website", "").as_deref(), Some(""));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_normalize_website_rejects_garbage() {
        let mut errors = Vec::new();
        assert_eq!(normalize_website(&mut errors, "website", "not a url"), None);
        assert_eq!(errors.len(), 1);
    }
}
