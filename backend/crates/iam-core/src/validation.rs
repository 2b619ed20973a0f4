//! Response shape checks shared by the API models.
//!
//! Serde enforces field presence and primitive types (UUIDs, timestamps,
//! numbers, booleans). The checks here cover what the type system cannot:
//! non-blank strings and absolute URLs. Models trim their string fields on
//! the way in, so `into_validated` is the entry point for fresh responses and
//! `validate` is the cheap re-check for values that were already accepted.

use crate::{CoreError, CoreResult};

use url::Url;

/// A value received from the API that must pass a shape check before use.
pub trait Validate: Sized {
    /// Check an already-normalized value.
    fn validate(&self) -> CoreResult<()>;

    /// Normalize (trim) string fields, then validate.
    fn into_validated(self) -> CoreResult<Self>;
}

/// Trim `value` and reject it if nothing is left.
#[track_caller]
pub fn trimmed_non_empty(field: &'static str, value: String) -> CoreResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(field, "must not be empty"));
    }

    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Reject blank strings.
#[track_caller]
pub fn require_non_empty(field: &'static str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Reject anything that does not parse as an absolute URL.
#[track_caller]
pub fn require_url(field: &'static str, value: &str) -> CoreResult<()> {
    Url::parse(value.trim())
        .map(|_| ())
        .map_err(|e| CoreError::validation(field, format!("invalid URL '{}': {}", value, e)))
}
