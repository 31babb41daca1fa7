//! Calendar date to Julian date conversion
//!
//! All arithmetic is carried out in `f64` with floor division, so the
//! formulas accept any finite input, including fractional or out-of-range
//! calendar fields and years before the common era.

use crate::constants::{DAY_S, JDN_DAY_OFFSET};

/// Floor division of two reals (rounds toward negative infinity)
#[inline]
fn floor_div(numerator: f64, denominator: f64) -> f64 {
    (numerator / denominator).floor()
}

/// Convert (year, month, day) to a Julian day number at 0h
///
/// Closed-form Julian day number formula where every division is a floor
/// division, including the `(month - 14) / 12` month shift.
pub fn compute_julian_day(year: f64, month: f64, day: f64) -> f64 {
    let month_shift = floor_div(month - 14.0, 12.0);

    let jd1 = day - JDN_DAY_OFFSET;
    let jd2 = floor_div(1461.0 * (year + 4800.0 + month_shift), 4.0);
    let jd3 = floor_div(367.0 * (month - 2.0 - month_shift * 12.0), 12.0);
    let jd4 = floor_div(-3.0 * floor_div(year + 4900.0 + month_shift, 100.0), 4.0);

    jd1 + jd2 + jd3 + jd4
}

/// Fraction of a day elapsed at the given time of day
pub fn day_fraction(hour: f64, minute: f64, second: f64) -> f64 {
    (second + 60.0 * (minute + 60.0 * hour)) / DAY_S
}

/// Convert a calendar date and time of day to a fractional Julian date
///
/// The day number is shifted back half a day to the midnight epoch before
/// the time of day is added.
pub fn compute_julian_date(
    year: f64,
    month: f64,
    day: f64,
    hour: f64,
    minute: f64,
    second: f64,
) -> f64 {
    let jd_midnight = compute_julian_day(year, month, day) - 0.5;
    jd_midnight + day_fraction(hour, minute, second)
}
