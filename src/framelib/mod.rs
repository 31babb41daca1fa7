//! Reference frame transformations

pub mod terrestrial;

pub use terrestrial::{
    ecef_to_eci, eci_to_ecef, eci_to_ecef_matrix, rotate_ecef_to_eci, rotate_eci_to_ecef,
};
