//! Wall-clock access and display formatting for the layout header.
//!
//! Browser builds read the local clock through `js_sys::Date`; SSR and tests
//! fall back to UTC from the `time` crate.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::{Date, Month, PrimitiveDateTime, Time, Weekday};

use crate::util::locale::to_arabic_digits;

/// Current local date-time, truncated to whole seconds.
pub fn now_local() -> PrimitiveDateTime {
    #[cfg(feature = "hydrate")]
    {
        let js = js_sys::Date::new_0();
        let date = Month::try_from(u8::try_from(js.get_month() + 1).unwrap_or(1))
            .ok()
            .and_then(|month| {
                let year = i32::try_from(js.get_full_year()).ok()?;
                let day = u8::try_from(js.get_date()).ok()?;
                Date::from_calendar_date(year, month, day).ok()
            })
            .unwrap_or(Date::MIN);
        let time = Time::from_hms(
            u8::try_from(js.get_hours()).unwrap_or(0),
            u8::try_from(js.get_minutes()).unwrap_or(0),
            u8::try_from(js.get_seconds()).unwrap_or(0),
        )
        .unwrap_or(Time::MIDNIGHT);
        PrimitiveDateTime::new(date, time)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let now = time::OffsetDateTime::now_utc();
        let time = Time::from_hms(now.hour(), now.minute(), now.second()).unwrap_or(Time::MIDNIGHT);
        PrimitiveDateTime::new(now.date(), time)
    }
}

/// Current local calendar day, used for date validation and join dates.
pub fn today() -> Date {
    now_local().date()
}

/// Milliseconds since the Unix epoch, used for timestamp-derived ids.
pub fn now_millis() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ms = js_sys::Date::now().max(0.0) as u64;
        ms
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        u64::try_from(nanos).unwrap_or(0)
    }
}

/// `YYYY-MM-DD`, the shape stored on user join dates.
pub fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// 12-hour `hh:mm:ss` clock with a meridiem marker.
pub fn format_time(at: PrimitiveDateTime, rtl: bool) -> String {
    let hour24 = at.hour();
    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    let digits = format!("{hour12:02}:{:02}:{:02}", at.minute(), at.second());
    if rtl {
        let marker = if hour24 < 12 { "ص" } else { "م" };
        format!("{} {marker}", to_arabic_digits(&digits))
    } else {
        let marker = if hour24 < 12 { "AM" } else { "PM" };
        format!("{digits} {marker}")
    }
}

/// Long weekday + date line shown under the clock.
pub fn format_long_date(date: Date, rtl: bool) -> String {
    if rtl {
        format!(
            "{}، {} {} {}",
            weekday_name_ar(date.weekday()),
            to_arabic_digits(&date.day().to_string()),
            month_name_ar(date.month()),
            to_arabic_digits(&date.year().to_string()),
        )
    } else {
        format!("{}, {} {}, {}", date.weekday(), date.month(), date.day(), date.year())
    }
}

fn weekday_name_ar(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "الاثنين",
        Weekday::Tuesday => "الثلاثاء",
        Weekday::Wednesday => "الأربعاء",
        Weekday::Thursday => "الخميس",
        Weekday::Friday => "الجمعة",
        Weekday::Saturday => "السبت",
        Weekday::Sunday => "الأحد",
    }
}

fn month_name_ar(month: Month) -> &'static str {
    match month {
        Month::January => "يناير",
        Month::February => "فبراير",
        Month::March => "مارس",
        Month::April => "أبريل",
        Month::May => "مايو",
        Month::June => "يونيو",
        Month::July => "يوليو",
        Month::August => "أغسطس",
        Month::September => "سبتمبر",
        Month::October => "أكتوبر",
        Month::November => "نوفمبر",
        Month::December => "ديسمبر",
    }
}
