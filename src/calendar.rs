//! Conversions between civil date-times and the J2000 day count.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use thiserror::Error;

use lunisolar_core::time::{J2000_JD, UNIX_EPOCH_JD, gmst_from_j2000, julian_day, seconds_to_days};

/// Days from the Unix epoch back to J2000.0 (negative).
const UNIX_EPOCH_J2000: f64 = UNIX_EPOCH_JD - J2000_JD;

const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

#[derive(Debug, Error, PartialEq)]
pub enum CalendarError {
    #[error("day count {days} cannot be represented as a calendar date")]
    OutOfRange { days: f64 },
    #[error("UTC offset {hours} h is not a valid fixed offset")]
    InvalidOffset { hours: f64 },
    #[error("local time is ambiguous or does not exist")]
    AmbiguousLocalTime,
}

/// Days since J2000.0 for any timezone-aware date-time.
pub fn j2000_from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    seconds_to_days(unix_seconds(datetime)) + UNIX_EPOCH_J2000
}

/// UTC date-time for a J2000 day count, rounded to the nearest nanosecond.
pub fn datetime_from_j2000(days: f64) -> Result<DateTime<Utc>, CalendarError> {
    let seconds = (days - UNIX_EPOCH_J2000) * 86_400.0;
    if !seconds.is_finite() || seconds.abs() > i64::MAX as f64 {
        return Err(CalendarError::OutOfRange { days });
    }
    let mut whole = seconds.floor();
    let mut nanos = ((seconds - whole) * 1e9).round();
    if nanos >= 1e9 {
        whole += 1.0;
        nanos -= 1e9;
    }
    DateTime::from_timestamp(whole as i64, nanos as u32).ok_or(CalendarError::OutOfRange { days })
}

pub fn julian_date_from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    seconds_to_days(unix_seconds(datetime)) + UNIX_EPOCH_JD
}

/// Julian date with the fraction dropped.
pub fn julian_day_from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    julian_day(julian_date_from_datetime(datetime))
}

/// Greenwich mean sidereal time in seconds (not reduced to one day).
pub fn gmst_from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    gmst_from_j2000(j2000_from_datetime(datetime))
}

/// Fixed offset for a whole or fractional number of hours east of UTC.
pub fn fixed_offset(utc_offset_hours: f64) -> Result<FixedOffset, CalendarError> {
    if !utc_offset_hours.is_finite() || utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS {
        return Err(CalendarError::InvalidOffset {
            hours: utc_offset_hours,
        });
    }
    FixedOffset::east_opt((utc_offset_hours * 3_600.0).round() as i32).ok_or(
        CalendarError::InvalidOffset {
            hours: utc_offset_hours,
        },
    )
}

/// Start of the local civil day as a J2000 day count.
pub fn local_midnight(date: NaiveDate, utc_offset_hours: f64) -> Result<f64, CalendarError> {
    let offset = fixed_offset(utc_offset_hours)?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or(CalendarError::AmbiguousLocalTime)?;
    let local = offset
        .from_local_datetime(&midnight)
        .single()
        .ok_or(CalendarError::AmbiguousLocalTime)?;
    Ok(j2000_from_datetime(&local))
}

/// Local date-time for a J2000 day count under a fixed offset.
pub fn local_datetime(
    days: f64,
    utc_offset_hours: f64,
) -> Result<DateTime<FixedOffset>, CalendarError> {
    let offset = fixed_offset(utc_offset_hours)?;
    Ok(datetime_from_j2000(days)?.with_timezone(&offset))
}

/// Format a J2000 day count in local time with a `strftime`-style pattern.
pub fn format_local(days: f64, utc_offset_hours: f64, fmt: &str) -> Result<String, CalendarError> {
    Ok(local_datetime(days, utc_offset_hours)?.format(fmt).to_string())
}

fn unix_seconds<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    datetime.timestamp() as f64 + f64::from(datetime.timestamp_subsec_nanos()) * 1e-9
}
