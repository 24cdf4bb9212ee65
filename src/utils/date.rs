//! Civil date <-> epoch timestamp conversions, always through the local
//! timezone of the running process.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeDelta, TimeZone};
use regex::Regex;
use std::sync::LazyLock;

/// Shown in reports when a row has no birthday.
pub const UNKNOWN_BIRTHDAY: &str = "unknown";

static BIRTHDAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?\d{1,9})\s*/\s*([+-]?\d{1,9})\s*/\s*([+-]?\d{1,9})\s*$")
        .expect("birthday pattern is valid")
});

/// Normalize a (day, month, year) triple the way C `mktime` does:
/// month 13 is January of the next year, day 0 is the last day of the
/// previous month, and so on.
pub fn normalize_civil(day: i32, month: i32, year: i32) -> AppResult<NaiveDate> {
    let invalid = || AppError::InvalidDate(format!("{}/{}/{}", day, month, year));

    let months = i64::from(year) * 12 + i64::from(month) - 1;
    let y = i32::try_from(months.div_euclid(12)).map_err(|_| invalid())?;
    let m = months.rem_euclid(12) as u32 + 1;

    let first = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(invalid)?;
    let offset = TimeDelta::try_days(i64::from(day) - 1).ok_or_else(invalid)?;
    first.checked_add_signed(offset).ok_or_else(invalid)
}

/// Epoch seconds of local midnight on the given civil date.
///
/// When midnight does not exist locally (a DST jump at 00:00) the first
/// valid instant after it is used; when it happens twice, the earlier one.
pub fn to_timestamp(day: i32, month: i32, year: i32) -> AppResult<i64> {
    let date = normalize_civil(day, month, year)?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

    if let Some(t) = Local.from_local_datetime(&midnight).earliest() {
        return Ok(t.timestamp());
    }

    (1..=24 * 4)
        .find_map(|q| {
            let shifted = midnight + TimeDelta::minutes(15 * q);
            Local.from_local_datetime(&shifted).earliest()
        })
        .map(|t| t.timestamp())
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))
}

/// Local civil date `(day, month, year)` of an epoch timestamp.
pub fn to_civil(timestamp: i64) -> AppResult<(u32, u32, i32)> {
    let utc = DateTime::from_timestamp(timestamp, 0)
        .ok_or_else(|| AppError::InvalidDate(format!("timestamp {}", timestamp)))?;
    let local = utc.with_timezone(&Local);
    Ok((local.day(), local.month(), local.year()))
}

/// Parse console input in `d/m/yyyy` form. Components are not range checked;
/// out-of-range values roll over in [`to_timestamp`].
pub fn parse_birthday(input: &str) -> AppResult<(i32, i32, i32)> {
    let caps = BIRTHDAY_RE
        .captures(input)
        .ok_or_else(|| AppError::InvalidDate(input.trim().to_string()))?;

    let part = |i: usize| -> AppResult<i32> {
        caps[i]
            .parse::<i32>()
            .map_err(|_| AppError::InvalidDate(input.trim().to_string()))
    };

    Ok((part(1)?, part(2)?, part(3)?))
}

/// `dd/mm/yyyy`, or [`UNKNOWN_BIRTHDAY`] for a missing value. A stored value
/// with no local date (out of chrono's range) is shown as `invalid`.
pub fn format_birthday(timestamp: Option<i64>) -> String {
    match timestamp.map(to_civil) {
        None => UNKNOWN_BIRTHDAY.to_string(),
        Some(Ok((d, m, y))) => format!("{:02}/{:02}/{:04}", d, m, y),
        Some(Err(_)) => "invalid".to_string(),
    }
}
