//! eci2ecef: Earth-Centered Inertial to Earth-Centered Earth-Fixed conversion
//!
//! Converts a position vector from the ECI frame to the ECEF frame for a UTC
//! timestamp. Earth's orientation is modelled by Greenwich Mean Sidereal Time
//! alone, with no precession, nutation or polar motion.
//!
//! ```rust
//! use eci2ecef::{EciToEcefConverter, Timestamp, Vector3};
//!
//! let timestamp = Timestamp::new(2024.0, 9.0, 29.0, 12.0, 0.0, 0.0);
//! let ecef = EciToEcefConverter::new().eci_to_ecef(&timestamp, Vector3::new(6878.0, 0.0, 0.0));
//! assert_eq!(ecef.z, 0.0);
//! assert!((ecef.xy_norm() - 6878.0).abs() < 1e-9);
//! ```

use thiserror::Error;

pub mod cli;
pub mod constants;
pub mod converter;
pub mod coordinates;
pub mod earthlib;
pub mod framelib;
pub mod time;

// Re-export commonly used types
pub use converter::{Conversion, EciToEcefConverter};
pub use coordinates::Vector3;
pub use earthlib::{compute_gmst_radians, GmstWrap};
pub use framelib::rotate_eci_to_ecef;
pub use time::calendar::compute_julian_date;
pub use time::Timestamp;

/// Main error type for the eci2ecef crate
#[derive(Debug, Error)]
pub enum EcefError {
    #[error("expected 9 arguments, found {found}")]
    Usage { found: usize },

    #[error("invalid value '{value}' for argument `{name}`: {source}")]
    Parse {
        name: &'static str,
        value: String,
        source: std::num::ParseFloatError,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for eci2ecef operations
pub type Result<T> = std::result::Result<T, EcefError>;
