// File: src/validation/validators.rs
// Purpose: Basic value checks used by rule evaluation

use once_cell::sync::Lazy;
use regex::Regex;

// Email validation regex
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

// URL validation regex
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap()
});

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate URL format
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}

pub fn is_numeric(value: &str) -> bool {
    value.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

pub fn is_integer(value: &str) -> bool {
    value.parse::<i64>().is_ok()
}

pub fn is_alpha(value: &str) -> bool {
    value.chars().all(char::is_alphabetic)
}

pub fn is_alpha_num(value: &str) -> bool {
    value.chars().all(char::is_alphanumeric)
}

/// Check if string matches regex pattern.
///
/// An invalid pattern never matches.
pub fn matches_regex(value: &str, pattern: &str) -> bool {
    match Regex::new(pattern) {
        Ok(regex) => regex.is_match(value),
        Err(e) => {
            tracing::warn!("Invalid regex rule {:?}: {}", pattern, e);
            false
        }
    }
}
