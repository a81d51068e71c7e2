use chrono::prelude::*;
use chrono_tz::Tz;
use std::ops::RangeInclusive;

/// Years a recurrence may start or end in. Bounds how much a single
/// pattern can ever materialize.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1970..=2100;

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
pub fn get_month_length(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// The calendar date of a unix timestamp (millis) as seen in `tz`
pub fn date_in_timezone(timestamp_millis: i64, tz: &Tz) -> NaiveDate {
    match Utc.timestamp_millis_opt(timestamp_millis).single() {
        Some(utc) => utc.with_timezone(tz).date_naive(),
        None => NaiveDate::MIN,
    }
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Sunday = 0 ... Saturday = 6
pub fn weekday_from_sunday_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

pub fn weekday_to_sunday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// Accepts short (`Mon`) and long (`Monday`) english day names in any case.
pub fn parse_weekday_name(name: &str) -> Option<Weekday> {
    match name.trim().to_lowercase().as_str() {
        "sun" | "sunday" => Some(Weekday::Sun),
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tues" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thur" | "thurs" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        _ => None,
    }
}
