//! Field rules for the venue, artist and show submission forms.
//!
//! The API crate owns the typed form structs; the allowed choices and
//! the per-field checks live here so they can be unit tested without
//! HTTP plumbing.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use validator::ValidationError;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Format accepted for a show's `start_time` field.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Genres offered by the venue and artist forms.
pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// US state (and DC) codes offered by the venue and artist forms.
pub const STATE_CHOICES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// `555-555-5555`, `(555) 555-5555`, `555.555.5555` or ten bare digits.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}$").expect("valid regex")
});

fn invalid(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(message))
}

/// Every genre must come from [`GENRE_CHOICES`] and at least one is required.
pub fn validate_genres(genres: &[String]) -> Result<(), ValidationError> {
    if genres.is_empty() {
        return Err(invalid("genres", "At least one genre is required".into()));
    }
    match genres
        .iter()
        .find(|g| !GENRE_CHOICES.contains(&g.as_str()))
    {
        Some(unknown) => Err(invalid("genres", format!("Unknown genre '{unknown}'"))),
        None => Ok(()),
    }
}

pub fn validate_state(state: &str) -> Result<(), ValidationError> {
    if STATE_CHOICES.contains(&state) {
        Ok(())
    } else {
        Err(invalid("state", format!("Unknown state '{state}'")))
    }
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone.trim()) {
        Ok(())
    } else {
        Err(invalid("phone", format!("Invalid phone number '{phone}'")))
    }
}

/// Rejects values that are empty after trimming.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(invalid("blank", "Value must not be blank".into()))
    } else {
        Ok(())
    }
}

/// Interpret a yes/no form field. Missing or empty means "no".
pub fn parse_flag(field: &'static str, raw: Option<&str>) -> Result<bool, CoreError> {
    let value = raw.map(str::trim).unwrap_or_default();
    match value.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "on" | "1" => Ok(true),
        "" | "no" | "n" | "false" | "off" | "0" => Ok(false),
        _ => Err(CoreError::Validation(format!(
            "{field} must be Yes or No, got '{value}'"
        ))),
    }
}

/// Parse a show start time (`YYYY-MM-DD HH:MM:SS`), interpreted as UTC.
pub fn parse_start_time(raw: &str) -> Result<Timestamp, CoreError> {
    NaiveDateTime::parse_from_str(raw.trim(), START_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            CoreError::Validation(format!(
                "start_time must look like 2024-06-01 20:00:00, got '{raw}'"
            ))
        })
}

/// Empty or whitespace-only optional fields are stored as `NULL`.
pub fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
