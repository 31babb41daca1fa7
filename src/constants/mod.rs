//! Constants module for the ECI to ECEF conversion

use std::f64::consts::PI;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Days in a Julian century
pub const JULIAN_CENTURY_DAYS: f64 = 36_525.0;

// Angles
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Earth constants
/// Earth's angular velocity in radians/s
pub const EARTH_ANGVEL: f64 = 7.292_115e-5;

// GMST polynomial (seconds of sidereal time, argument in Julian centuries of UT1)
/// GMST at the J2000 epoch in seconds
pub const GMST_J2000_S: f64 = 67_310.548_41;
/// Linear GMST rate in seconds per Julian century
pub const GMST_RATE_S: f64 = 876_600.0 * 3_600.0 + 8_640_184.812_866;
/// Quadratic GMST coefficient
pub const GMST_T2_S: f64 = 0.093_104;
/// Cubic GMST coefficient
pub const GMST_T3_S: f64 = -6.2e-6;

// Calendar constants
/// Offset subtracted from the day of month in the Julian day number formula
pub const JDN_DAY_OFFSET: f64 = 32_075.0;
