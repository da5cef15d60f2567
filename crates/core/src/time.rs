//! Time base shared across crates.
//!
//! Every ephemeris routine consumes a single time value: days elapsed since
//! the J2000.0 epoch (JD 2451545.0, 2000-01-01 12:00). The series themselves
//! run on Julian centuries, and the horizon math needs Greenwich mean sidereal
//! time; both are derived here as pure functions of that day count.

use crate::constants::{DAYS_PER_JULIAN_CENTURY, FULL_CIRCLE, HOURS_PER_DAY, SECONDS_PER_DAY};

/// Julian date of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;
/// Julian date at which modified Julian dates start counting.
pub const MJD_EPOCH_JD: f64 = 2_400_000.5;
/// Julian date of the Unix epoch (1970-01-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Convert days to seconds.
#[inline]
pub fn days_to_seconds(days: f64) -> f64 {
    days * SECONDS_PER_DAY
}

/// Convert seconds to days.
#[inline]
pub fn seconds_to_days(seconds: f64) -> f64 {
    seconds / SECONDS_PER_DAY
}

/// Convert a duration in hours to days.
#[inline]
pub fn days_from_hours(hours: f64) -> f64 {
    hours / HOURS_PER_DAY
}

/// Julian centuries elapsed since J2000.0.
#[inline]
pub fn century_from_j2000(days: f64) -> f64 {
    days / DAYS_PER_JULIAN_CENTURY
}

#[inline]
pub fn century_from_julian_date(jd: f64) -> f64 {
    century_from_j2000(jd - J2000_JD)
}

#[inline]
pub fn century_from_mjd(mjd: f64) -> f64 {
    century_from_julian_date(mjd + MJD_EPOCH_JD)
}

/// Inverse of [`century_from_j2000`].
#[inline]
pub fn j2000_from_century(century: f64) -> f64 {
    century * DAYS_PER_JULIAN_CENTURY
}

#[inline]
pub fn julian_date_from_j2000(days: f64) -> f64 {
    days + J2000_JD
}

#[inline]
pub fn j2000_from_julian_date(jd: f64) -> f64 {
    jd - J2000_JD
}

#[inline]
pub fn mjd_from_julian_date(jd: f64) -> f64 {
    jd - MJD_EPOCH_JD
}

#[inline]
pub fn mjd_from_j2000(days: f64) -> f64 {
    mjd_from_julian_date(julian_date_from_j2000(days))
}

/// Whole-day part of a Julian date (the date rounded down).
#[inline]
pub fn julian_day(jd: f64) -> f64 {
    jd.floor()
}

/// Seconds elapsed since the start of the day the date falls in.
///
/// For a modified Julian date this is UT seconds since midnight; for a plain
/// Julian date it counts from noon.
#[inline]
pub fn seconds_of_day(date: f64) -> f64 {
    let day = date.floor();
    (date - day) * SECONDS_PER_DAY
}

/// Greenwich mean sidereal time in seconds for a modified Julian date.
///
/// Uses the IAU 1982 polynomial with the linear century term evaluated at the
/// preceding midnight and the UT seconds of the day scaled to sidereal rate.
/// The result is not reduced to a single day.
pub fn gmst_from_mjd(mjd: f64) -> f64 {
    let midnight = mjd.floor();
    let century_date = century_from_mjd(mjd);
    let century_day = century_from_mjd(midnight);
    let universal_time = seconds_of_day(mjd);

    24_110.548_41
        + (8_640_184.812_866 * century_day)
        + (1.002_737_909_3 * universal_time)
        + (0.093_104 * century_date * century_date)
        - (0.000_006_2 * century_date * century_date * century_date)
}

/// Greenwich mean sidereal time in seconds for a J2000 day count.
#[inline]
pub fn gmst_from_j2000(days: f64) -> f64 {
    gmst_from_mjd(mjd_from_j2000(days))
}

/// Greenwich mean sidereal time as an angle in radians.
///
/// The seconds value is reduced with a truncating remainder, so dates before
/// the sidereal zero point yield a negative angle rather than a wrapped one.
pub fn gmst_angle(days: f64) -> f64 {
    FULL_CIRCLE * ((gmst_from_j2000(days) / SECONDS_PER_DAY) % 1.0)
}
