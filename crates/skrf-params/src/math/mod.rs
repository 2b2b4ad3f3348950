//! Mathematical functions module
//!
//! Shape normalization, parameter transforms and the scalar conversions used
//! by projections.

pub mod conversions;
pub mod linalg;
pub mod matrix_ops;
pub mod shape;
pub mod transforms;

pub use conversions::*;
pub use shape::{normalize_impedance, normalize_s, ParamInput, PortImpedance};
pub use transforms::*;
