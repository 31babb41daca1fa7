//! The ECI to ECEF conversion pipeline
//!
//! Three sequential stages, each a pure function of the previous one:
//! calendar timestamp to Julian date, Julian date to GMST, and a rotation
//! about Z by the sidereal angle.

use crate::coordinates::Vector3;
use crate::earthlib::{compute_gmst_radians_with, GmstWrap};
use crate::framelib::terrestrial;
use crate::time::Timestamp;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Intermediate and final values of one conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub timestamp: Timestamp,
    /// Fractional Julian date of the timestamp
    pub julian_date: f64,
    /// Sidereal angle used for the rotation
    pub gmst_rad: f64,
    pub input: Vector3,
    pub output: Vector3,
}

/// Converts position vectors between the ECI and ECEF frames
#[derive(Debug, Clone, Default)]
pub struct EciToEcefConverter {
    wrap: GmstWrap,
}

impl EciToEcefConverter {
    /// Create a converter with a GMST normalized to [0, 2π)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how the GMST remainder is wrapped
    pub fn with_wrap(mut self, wrap: GmstWrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn wrap(&self) -> GmstWrap {
        self.wrap
    }

    /// Sidereal angle for a timestamp, returned with its Julian date
    pub fn sidereal_angle(&self, timestamp: &Timestamp) -> (f64, f64) {
        let julian_date = timestamp.julian_date();
        debug!("Julian date of {}: {}", timestamp, julian_date);
        (julian_date, compute_gmst_radians_with(julian_date, self.wrap))
    }

    /// Convert an ECI position at `timestamp` to ECEF
    pub fn convert(&self, timestamp: &Timestamp, eci: Vector3) -> Conversion {
        let (julian_date, gmst_rad) = self.sidereal_angle(timestamp);
        let ecef = terrestrial::eci_to_ecef(eci, gmst_rad);
        info!("ECI {:?} -> ECEF {:?}", eci.to_array(), ecef.to_array());

        Conversion {
            timestamp: *timestamp,
            julian_date,
            gmst_rad,
            input: eci,
            output: ecef,
        }
    }

    /// Convert an ECEF position at `timestamp` back to ECI
    pub fn convert_inverse(&self, timestamp: &Timestamp, ecef: Vector3) -> Conversion {
        let (julian_date, gmst_rad) = self.sidereal_angle(timestamp);
        let eci = terrestrial::ecef_to_eci(ecef, gmst_rad);
        info!("ECEF {:?} -> ECI {:?}", ecef.to_array(), eci.to_array());

        Conversion {
            timestamp: *timestamp,
            julian_date,
            gmst_rad,
            input: ecef,
            output: eci,
        }
    }

    /// ECEF position of an ECI vector at `timestamp`
    pub fn eci_to_ecef(&self, timestamp: &Timestamp, eci: Vector3) -> Vector3 {
        self.convert(timestamp, eci).output
    }

    /// ECI position of an ECEF vector at `timestamp`
    pub fn ecef_to_eci(&self, timestamp: &Timestamp, ecef: Vector3) -> Vector3 {
        self.convert_inverse(timestamp, ecef).output
    }
}
