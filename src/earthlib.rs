//! Earth rotation: Greenwich Mean Sidereal Time
//!
//! GMST is evaluated as a cubic in Julian centuries since J2000, reduced to
//! a single day of sidereal seconds, scaled by Earth's angular velocity and
//! reduced again to one turn.

use crate::constants::{
    DAY_S, EARTH_ANGVEL, GMST_J2000_S, GMST_RATE_S, GMST_T2_S, GMST_T3_S, TAU,
};
use crate::time::julian_centuries_since_j2000;
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

/// How the final GMST remainder is presented
///
/// Both remainders use `fmod` semantics, so before J2000 the raw angle is
/// negative. The two variants describe the same rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GmstWrap {
    /// Shift negative remainders by 2π so the angle lies in [0, 2π)
    #[default]
    Normalized,
    /// Keep the raw remainder, whose sign follows the dividend
    Remainder,
}

impl GmstWrap {
    /// Apply this wrap to a raw `fmod` remainder in (-2π, 2π)
    pub fn apply(self, remainder: f64) -> f64 {
        match self {
            GmstWrap::Remainder => remainder,
            GmstWrap::Normalized if remainder < 0.0 => {
                let shifted = remainder + TAU;
                // A tiny negative remainder can round up to exactly 2π
                if shifted < TAU {
                    shifted
                } else {
                    0.0
                }
            }
            GmstWrap::Normalized => remainder,
        }
    }
}

/// GMST in seconds of sidereal time, before any reduction
pub fn gmst_seconds(fractional_jd: f64) -> f64 {
    let t = julian_centuries_since_j2000(fractional_jd);
    GMST_J2000_S + GMST_RATE_S * t + GMST_T2_S * t.powi(2) + GMST_T3_S * t.powi(3)
}

/// GMST angle with both reductions performed by floating-point remainder
///
/// Result lies in (-2π, 2π) and carries the sign of [`gmst_seconds`].
pub fn gmst_remainder_radians(fractional_jd: f64) -> f64 {
    let seconds = gmst_seconds(fractional_jd);
    ((seconds % DAY_S) * EARTH_ANGVEL) % TAU
}

/// Greenwich Mean Sidereal Time in radians, normalized to [0, 2π)
pub fn compute_gmst_radians(fractional_jd: f64) -> f64 {
    compute_gmst_radians_with(fractional_jd, GmstWrap::Normalized)
}

/// Greenwich Mean Sidereal Time in radians using the given wrap
pub fn compute_gmst_radians_with(fractional_jd: f64, wrap: GmstWrap) -> f64 {
    let raw = gmst_remainder_radians(fractional_jd);
    let gmst = wrap.apply(raw);
    debug!("GMST at JD {}: {} rad ({:?})", fractional_jd, gmst, wrap);
    gmst
}
