//! Strict string formats for ids and timestamps in API responses.
//!
//! Values are trimmed first. Ids must be hyphenated 8-4-4-4-12 hex UUIDs
//! and timestamps RFC 3339 in UTC with a `Z` suffix. The braced, simple and
//! `urn:uuid:` id forms and offset timestamps are rejected.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

const UUID_LEN: usize = 36;
const UUID_HYPHENS: [usize; 4] = [8, 13, 18, 23];
const DATE_TIME_SEPARATOR: usize = 10;

/// Parse a hyphenated UUID, ignoring surrounding whitespace.
pub fn parse_uuid(value: &str) -> Option<Uuid> {
    let value = value.trim();
    if value.len() != UUID_LEN {
        return None;
    }

    let hyphenated = value.bytes().enumerate().all(|(i, b)| {
        if UUID_HYPHENS.contains(&i) {
            b == b'-'
        } else {
            b.is_ascii_hexdigit()
        }
    });
    if !hyphenated {
        return None;
    }

    Uuid::parse_str(value).ok()
}

/// Parse an RFC 3339 UTC timestamp such as `2024-01-01T00:00:00.000Z`.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if !value.ends_with('Z') || value.as_bytes().get(DATE_TIME_SEPARATOR) != Some(&b'T') {
        return None;
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

pub fn uuid<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
    let value = String::deserialize(deserializer)?;
    parse_uuid(&value).ok_or_else(|| {
        D::Error::custom(format!(
            "invalid UUID '{}': expected 8-4-4-4-12 hex digits",
            value
        ))
    })
}

pub fn timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let value = String::deserialize(deserializer)?;
    parse_timestamp(&value).ok_or_else(|| {
        D::Error::custom(format!(
            "invalid timestamp '{}': expected RFC 3339 ending in 'Z'",
            value
        ))
    })
}
