//! Rotation between the inertial (ECI) and Earth-fixed (ECEF) frames
//!
//! Only Earth's spin is modelled: the frames differ by a rotation about the
//! shared Z axis through the Greenwich Mean Sidereal Time angle. Precession,
//! nutation and polar motion are ignored, so Z always passes through.

use crate::coordinates::Vector3;
use log::trace;
use nalgebra::Rotation3;

/// Rotate ECI components into ECEF by the angle `-gmst_rad` about Z
pub fn rotate_eci_to_ecef(eci_x: f64, eci_y: f64, eci_z: f64, gmst_rad: f64) -> (f64, f64, f64) {
    trace!("ECI ({}, {}, {}) -> ECEF at GMST {}", eci_x, eci_y, eci_z, gmst_rad);
    let (sin_theta, cos_theta) = (-gmst_rad).sin_cos();
    let ecef_x = eci_x * cos_theta - eci_y * sin_theta;
    let ecef_y = eci_x * sin_theta + eci_y * cos_theta;
    (ecef_x, ecef_y, eci_z)
}

/// Rotate ECEF components back into ECI by the angle `+gmst_rad` about Z
pub fn rotate_ecef_to_eci(ecef_x: f64, ecef_y: f64, ecef_z: f64, gmst_rad: f64) -> (f64, f64, f64) {
    trace!("ECEF ({}, {}, {}) -> ECI at GMST {}", ecef_x, ecef_y, ecef_z, gmst_rad);
    let (sin_theta, cos_theta) = gmst_rad.sin_cos();
    let eci_x = ecef_x * cos_theta - ecef_y * sin_theta;
    let eci_y = ecef_x * sin_theta + ecef_y * cos_theta;
    (eci_x, eci_y, ecef_z)
}

/// [`rotate_eci_to_ecef`] on a [`Vector3`]
pub fn eci_to_ecef(eci: Vector3, gmst_rad: f64) -> Vector3 {
    let (x, y, z) = rotate_eci_to_ecef(eci.x, eci.y, eci.z, gmst_rad);
    Vector3::new(x, y, z)
}

/// [`rotate_ecef_to_eci`] on a [`Vector3`]
pub fn ecef_to_eci(ecef: Vector3, gmst_rad: f64) -> Vector3 {
    let (x, y, z) = rotate_ecef_to_eci(ecef.x, ecef.y, ecef.z, gmst_rad);
    Vector3::new(x, y, z)
}

/// ECI to ECEF rotation as a matrix, for composing with other frame rotations
pub fn eci_to_ecef_matrix(gmst_rad: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&nalgebra::Vector3::z_axis(), -gmst_rad)
}
