//! Field validation for user input

use crate::error::{AssistantError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Input format for birthdays
pub const DATE_FORMAT: &str = "%d.%m.%Y";

fn phone_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\+?\d{10,15}$").unwrap())
}

fn email_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

/// Validates a phone number: 10-15 digits with an optional leading '+'.
/// Returns the trimmed value on success.
pub fn phone(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if phone_regex().is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(AssistantError::InvalidPhone(value.to_string()))
    }
}

/// Validates a loose `local@domain.tld` email shape.
pub fn email(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if email_regex().is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(AssistantError::InvalidEmail(value.to_string()))
    }
}

/// Parses a `DD.MM.YYYY` date that must not be after `today`.
pub fn birthday(value: &str, today: NaiveDate) -> Result<NaiveDate> {
    let trimmed = value.trim();
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| AssistantError::InvalidDate(value.to_string()))?;

    if date > today {
        return Err(AssistantError::FutureBirthday(trimmed.to_string()));
    }

    Ok(date)
}

/// Validates that a string is not blank and returns it trimmed.
pub fn non_blank(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AssistantError::BlankField(field.to_string()))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Splits a tag line on commas and whitespace, dropping empties and a leading '#'.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(|tag| tag.trim_start_matches('#'))
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
