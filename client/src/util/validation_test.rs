use super::*;
use time::macros::date;

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_well_formed_addresses() {
    assert!(is_valid_email("broker@maxhealth.ae"));
    assert!(is_valid_email("first.last+tag@sub.example.co"));
}

#[test]
fn email_rejects_missing_at_or_dot() {
    assert!(!is_valid_email("broker.maxhealth.ae"));
    assert!(!is_valid_email("broker@maxhealth"));
    assert!(!is_valid_email("broker@@maxhealth.ae"));
    assert!(!is_valid_email("bro ker@maxhealth.ae"));
    assert!(!is_valid_email("@maxhealth.ae"));
    assert!(!is_valid_email("broker@.ae"));
}

#[test]
fn email_rejects_second_at_in_domain() {
    assert!(!is_valid_email("a@b@c.com"));
}

#[test]
fn check_email_passes_empty_input() {
    assert_eq!(check_email(""), None);
    assert_eq!(check_email("nope"), Some(INVALID_EMAIL));
}

// =============================================================
// Mobile
// =============================================================

#[test]
fn mobile_accepts_05_plus_eight_digits() {
    assert!(is_valid_uae_mobile("0501234567"));
    assert!(is_valid_uae_mobile("0559876543"));
}

#[test]
fn mobile_rejects_other_shapes() {
    assert!(!is_valid_uae_mobile("050123456"));
    assert!(!is_valid_uae_mobile("05012345678"));
    assert!(!is_valid_uae_mobile("0601234567"));
    assert!(!is_valid_uae_mobile("+971501234567"));
    assert!(!is_valid_uae_mobile("05O1234567"));
    assert!(!is_valid_uae_mobile("05\u{0661}\u{0662}\u{0663}\u{0664}\u{0665}\u{0666}\u{0667}\u{0668}"));
    assert!(!is_valid_uae_mobile("05\u{FF11}2345678"));
}

#[test]
fn check_mobile_reports_message() {
    assert_eq!(check_uae_mobile("123"), Some(INVALID_MOBILE));
    assert_eq!(check_uae_mobile(""), None);
}

// =============================================================
// Dates
// =============================================================

#[test]
fn start_date_today_passes() {
    assert_eq!(check_not_before("2026-10-17", date!(2026 - 10 - 17)), None);
}

#[test]
fn start_date_future_passes() {
    assert_eq!(check_not_before("2027-01-01", date!(2026 - 10 - 17)), None);
}

#[test]
fn start_date_yesterday_fails() {
    assert_eq!(check_not_before("2026-10-16", date!(2026 - 10 - 17)), Some(PAST_START_DATE));
}

#[test]
fn start_date_garbage_is_rejected() {
    assert_eq!(check_not_before("next tuesday", date!(2026 - 10 - 17)), Some(INVALID_DATE));
}

#[test]
fn parse_iso_date_reads_html_date_value() {
    assert_eq!(parse_iso_date("2025-02-28"), Some(date!(2025 - 02 - 28)));
    assert_eq!(parse_iso_date("2025-02-30"), None);
}

// =============================================================
// Numbers
// =============================================================

#[test]
fn numeric_accepts_integers_and_decimals() {
    assert_eq!(check_numeric("0"), None);
    assert_eq!(check_numeric("125000.50"), None);
    assert_eq!(check_numeric(" 42 "), None);
}

#[test]
fn numeric_rejects_text() {
    assert_eq!(check_numeric("abc"), Some(INVALID_NUMBER));
    assert_eq!(check_numeric("12a"), Some(INVALID_NUMBER));
}

#[test]
fn numeric_follows_browser_number_coercion() {
    assert_eq!(check_numeric("Infinity"), None);
    assert_eq!(check_numeric("-Infinity"), None);
    assert_eq!(check_numeric("0x10"), None);
    assert_eq!(check_numeric("0b101"), None);
    assert_eq!(check_numeric("1e3"), None);
    assert_eq!(check_numeric(".5"), None);
    assert_eq!(check_numeric("inf"), Some(INVALID_NUMBER));
    assert_eq!(check_numeric("NaN"), Some(INVALID_NUMBER));
    assert_eq!(check_numeric("0x"), Some(INVALID_NUMBER));
    assert_eq!(check_numeric("0xZZ"), Some(INVALID_NUMBER));
    assert_eq!(check_numeric("."), Some(INVALID_NUMBER));
}
