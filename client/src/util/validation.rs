//! Field-format validators shared by the case wizard and registration form.
//!
//! DESIGN
//! ======
//! Validators are pure: they receive the raw input string (and the current
//! calendar day where relevant) and return an inline error message. Empty
//! input always passes here; required-ness is checked by the caller.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::OnceLock;

use regex::Regex;
use time::Date;
use time::macros::format_description;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const INVALID_MOBILE: &str = "Please enter a valid UAE mobile number (05XXXXXXXX)";
pub const PAST_START_DATE: &str = "Policy start date cannot be in the past";
pub const INVALID_DATE: &str = "Please enter a valid date";
pub const INVALID_NUMBER: &str = "Please enter a valid number";
pub const REQUIRED: &str = "This field is required";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

fn uae_mobile_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^05[0-9]{8}$").expect("mobile pattern compiles"))
}

/// Whether `value` has the `local@domain.tld` shape.
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Whether `value` is a local-format UAE mobile number (`05` + 8 digits).
pub fn is_valid_uae_mobile(value: &str) -> bool {
    uae_mobile_regex().is_match(value)
}

/// Parse an HTML date-input value (`YYYY-MM-DD`).
pub fn parse_iso_date(value: &str) -> Option<Date> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Email rule: `None` for empty or well-formed input.
pub fn check_email(value: &str) -> Option<&'static str> {
    (!value.is_empty() && !is_valid_email(value)).then_some(INVALID_EMAIL)
}

/// Mobile rule: `None` for empty or `05XXXXXXXX` input.
pub fn check_uae_mobile(value: &str) -> Option<&'static str> {
    (!value.is_empty() && !is_valid_uae_mobile(value)).then_some(INVALID_MOBILE)
}

/// Start-date rule. Only the calendar day is compared, so `today` passes.
pub fn check_not_before(value: &str, today: Date) -> Option<&'static str> {
    if value.is_empty() {
        return None;
    }
    match parse_iso_date(value) {
        Some(date) if date < today => Some(PAST_START_DATE),
        Some(_) => None,
        None => Some(INVALID_DATE),
    }
}

/// Whether `value` reads as a number the way a browser `Number()` coerces it:
/// decimal with optional exponent, `0x`/`0o`/`0b` integers, or `Infinity`.
pub fn is_numeric(value: &str) -> bool {
    let value = value.trim();
    if matches!(value, "Infinity" | "+Infinity" | "-Infinity") {
        return true;
    }
    let radix_digits = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| value.strip_prefix(prefix).map(|rest| (rest, radix)));
    if let Some((digits, radix)) = radix_digits {
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }
    value.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
        && value.parse::<f64>().is_ok()
}

/// Numeric rule. Surrounding whitespace is tolerated.
pub fn check_numeric(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return None;
    }
    (!is_numeric(value)).then_some(INVALID_NUMBER)
}
