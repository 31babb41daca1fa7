//! # Cartesian Position Vectors
//!
//! [`Vector3`] is a plain three-component position in kilometers. Whether a
//! value is expressed in the inertial (ECI) or Earth-fixed (ECEF) frame is
//! carried by context, not by the type.
//!
//! ## Axis Convention
//!
//! Both frames are right-handed and share the Z axis (Earth's spin axis):
//! - **ECI X**: toward the vernal equinox
//! - **ECEF X**: toward the Greenwich meridian at the equator
//! - **Z**: toward the north pole
//!
//! ## Examples
//!
//! ```rust
//! use eci2ecef::coordinates::cartesian::Vector3;
//!
//! let leo = Vector3::new(6878.0, 0.0, 0.0);
//! assert_eq!(leo.magnitude(), 6878.0);
//! assert_eq!(leo.xy_norm(), 6878.0);
//! ```

use serde::{Deserialize, Serialize};

/// Three-dimensional position vector in kilometers
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector from its components in kilometers
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Length of the projection onto the equatorial (XY) plane
    ///
    /// Rotations about Z leave this unchanged.
    pub fn xy_norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Components as an `[x, y, z]` array
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn to_nalgebra(&self) -> nalgebra::Vector3<f64> {
        nalgebra::Vector3::new(self.x, self.y, self.z)
    }

    pub fn from_nalgebra(vec: nalgebra::Vector3<f64>) -> Self {
        Vector3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(vec: nalgebra::Vector3<f64>) -> Self {
        Self::from_nalgebra(vec)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(vec: Vector3) -> Self {
        vec.to_nalgebra()
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        Vector3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}
