//! Field-level validation helpers shared by the API handlers.
//!
//! All functions return `Err(String)` with a human-readable message that
//! handlers map to a 400 response. Inputs are checked before any database
//! statement runs so invalid submissions never touch a table.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum length for names, titles, and other single-line fields.
pub const MAX_SHORT_TEXT: usize = 200;

/// Maximum length for bios, descriptions, and quotes.
pub const MAX_LONG_TEXT: usize = 5000;

/// Skill proficiency is a percentage.
pub const MAX_SKILL_LEVEL: i32 = 100;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Intentionally loose: one @, no whitespace, a dot in the domain.
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex must compile")
});

static HTTP_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("url regex must compile"));

/// Require a non-empty single-line text field (max 200 chars).
pub fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    check_len(field, value, MAX_SHORT_TEXT)
}

/// Require a non-empty long text field (max 5000 chars).
pub fn require_long_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    check_len(field, value, MAX_LONG_TEXT)
}

/// Cap an optional single-line field. `None` always passes.
pub fn optional_text(field: &str, value: Option<&str>) -> Result<(), String> {
    match value {
        Some(v) => check_len(field, v, MAX_SHORT_TEXT),
        None => Ok(()),
    }
}

/// Cap an optional long text field. `None` always passes.
pub fn optional_long_text(field: &str, value: Option<&str>) -> Result<(), String> {
    match value {
        Some(v) => check_len(field, v, MAX_LONG_TEXT),
        None => Ok(()),
    }
}

/// Check that a value looks like an email address.
pub fn validate_email(value: &str) -> Result<(), String> {
    if EMAIL_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(format!("'{value}' is not a valid email address"))
    }
}

/// Require a field to be a plausible http(s) URL.
pub fn require_http_url(field: &str, value: &str) -> Result<(), String> {
    require_text(field, value)?;
    validate_http_url(field, value)
}

/// Check that a value looks like an http(s) URL.
pub fn validate_http_url(field: &str, value: &str) -> Result<(), String> {
    if HTTP_URL_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(format!("{field} must be an http(s) URL"))
    }
}

/// Check an optional URL field. `None` always passes.
pub fn optional_http_url(field: &str, value: Option<&str>) -> Result<(), String> {
    match value {
        Some(v) => validate_http_url(field, v),
        None => Ok(()),
    }
}

/// Skill proficiency must be a percentage in `0..=100`.
pub fn validate_skill_level(level: i32) -> Result<(), String> {
    if (0..=MAX_SKILL_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(format!("level must be between 0 and {MAX_SKILL_LEVEL}"))
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!("{field} must be at most {max} characters"));
    }
    Ok(())
}
