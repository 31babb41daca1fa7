//! Time module for the UTC timestamps fed into the conversion
//!
//! A [`Timestamp`] is a plain calendar tuple of reals. No calendar
//! validation is performed: out-of-range months, days or times of day are
//! carried through the Julian date arithmetic, which rolls them over.

pub mod calendar;

use crate::constants::{J2000, JULIAN_CENTURY_DAYS};
use chrono::{DateTime, Datelike, Timelike, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// UTC calendar date and time of day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timestamp {
    pub year: f64,
    pub month: f64,
    pub day: f64,
    pub hour: f64,
    pub minute: f64,
    /// Seconds, fractional part permitted
    pub second: f64,
}

impl Timestamp {
    /// Create a timestamp from its six calendar fields
    pub fn new(year: f64, month: f64, day: f64, hour: f64, minute: f64, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Fractional Julian date of this timestamp
    pub fn julian_date(&self) -> f64 {
        self.warn_out_of_range();
        calendar::compute_julian_date(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Log the calendar fields that fall outside their usual range
    fn warn_out_of_range(&self) {
        let fields = [
            ("month", self.month, 1.0, 12.0),
            ("day", self.day, 1.0, 31.0),
            ("hour", self.hour, 0.0, 23.0),
            ("minute", self.minute, 0.0, 59.0),
        ];
        for (name, value, low, high) in fields {
            if !(low..=high).contains(&value) {
                warn!("{} = {} is outside {}..={}, rolling over", name, value, low, high);
            }
        }
        if !(0.0..61.0).contains(&self.second) {
            warn!("second = {} is outside 0..61, rolling over", self.second);
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{} {}:{}:{} UTC",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

// Allow construction from a (year, month, day, hour, minute, second) tuple
impl From<(i32, u32, u32, u32, u32, f64)> for Timestamp {
    fn from(tuple: (i32, u32, u32, u32, u32, f64)) -> Self {
        let (year, month, day, hour, minute, second) = tuple;
        Self::new(
            year as f64,
            month as f64,
            day as f64,
            hour as f64,
            minute as f64,
            second,
        )
    }
}

// Allow conversion from DateTime<Utc> to Timestamp
impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from((
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second() as f64 + dt.nanosecond() as f64 / 1_000_000_000.0,
        ))
    }
}

/// Julian centuries of UT1 elapsed since J2000.0
///
/// UTC is used in place of UT1; the difference is below the precision of
/// the sidereal time polynomial.
pub fn julian_centuries_since_j2000(fractional_jd: f64) -> f64 {
    (fractional_jd - J2000) / JULIAN_CENTURY_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_julian_date() {
        let ts = Timestamp::new(2024.0, 9.0, 29.0, 12.0, 0.0, 0.0);
        assert_eq!(ts.julian_date(), 2460583.0);
    }

    #[test]
    fn test_from_tuple() {
        let ts: Timestamp = (2024, 9, 29, 12, 0, 0.0).into();
        assert_eq!(ts, Timestamp::new(2024.0, 9.0, 29.0, 12.0, 0.0, 0.0));
    }

    #[test]
    fn test_from_datetime() {
        let dt = Utc
            .with_ymd_and_hms(2010, 3, 15, 6, 30, 15)
            .unwrap()
            .with_nanosecond(250_000_000)
            .unwrap();
        let ts = Timestamp::from(dt);

        assert_eq!(ts.year, 2010.0);
        assert_eq!(ts.month, 3.0);
        assert_eq!(ts.day, 15.0);
        assert_eq!(ts.hour, 6.0);
        assert_eq!(ts.minute, 30.0);
        assert_relative_eq!(ts.second, 15.25, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_range_month_is_accepted() {
        let ts = Timestamp::new(2024.0, 13.0, 1.0, 0.0, 0.0, 0.0);
        let next_year = Timestamp::new(2025.0, 1.0, 1.0, 0.0, 0.0, 0.0);
        assert_eq!(ts.julian_date(), next_year.julian_date());
    }

    #[test]
    fn test_julian_centuries() {
        assert_eq!(julian_centuries_since_j2000(J2000), 0.0);
        assert_relative_eq!(
            julian_centuries_since_j2000(J2000 + JULIAN_CENTURY_DAYS),
            1.0,
            epsilon = 1e-15
        );
        assert!(julian_centuries_since_j2000(2440425.0) < 0.0);
    }

    #[test]
    fn test_display() {
        let ts = Timestamp::new(2024.0, 9.0, 29.0, 12.0, 0.0, 0.5);
        assert_eq!(ts.to_string(), "2024-9-29 12:0:0.5 UTC");
    }
}
