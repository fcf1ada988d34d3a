use super::*;
use time::macros::{date, datetime};

#[test]
fn iso_date_pads_components() {
    assert_eq!(iso_date(date!(2026 - 03 - 07)), "2026-03-07");
}

#[test]
fn format_time_uses_twelve_hour_clock() {
    assert_eq!(format_time(datetime!(2026-10-17 14:05:09), false), "02:05:09 PM");
    assert_eq!(format_time(datetime!(2026-10-17 00:00:00), false), "12:00:00 AM");
    assert_eq!(format_time(datetime!(2026-10-17 12:30:00), false), "12:30:00 PM");
}

#[test]
fn format_time_rtl_uses_arabic_digits() {
    assert_eq!(format_time(datetime!(2026-10-17 09:15:00), true), "٠٩:١٥:٠٠ ص");
}

#[test]
fn format_long_date_english() {
    assert_eq!(format_long_date(date!(2026 - 10 - 17), false), "Saturday, October 17, 2026");
}

#[test]
fn format_long_date_arabic() {
    assert_eq!(format_long_date(date!(2026 - 10 - 17), true), "السبت، ١٧ أكتوبر ٢٠٢٦");
}

#[test]
fn now_millis_is_after_2020() {
    assert!(now_millis() > 1_577_836_800_000);
}

#[test]
fn today_matches_now_local_date() {
    let now = now_local();
    let day = today();
    assert!(day >= now.date());
}
