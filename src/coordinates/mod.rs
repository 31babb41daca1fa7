pub mod cartesian;

pub use cartesian::Vector3;
