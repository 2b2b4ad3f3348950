//! Complex-to-scalar conversion functions
//!
//! Elementwise building blocks for scalar projections (magnitude, dB, phase).
//! Edge values are passed through as the float functions produce them:
//! a zero magnitude gives `-inf` dB.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Convert complex number to magnitude
#[inline]
pub fn complex_2_magnitude(z: Complex64) -> f64 {
    z.norm()
}

/// Convert complex number to dB (20*log10(|z|))
#[inline]
pub fn complex_2_db(z: Complex64) -> f64 {
    20.0 * z.norm().log10()
}

/// Convert complex number to dB10 (10*log10(|z|))
#[inline]
pub fn complex_2_db10(z: Complex64) -> f64 {
    10.0 * z.norm().log10()
}

/// Convert complex number to phase in radians, `atan2(im, re)`
#[inline]
pub fn complex_2_radian(z: Complex64) -> f64 {
    z.im.atan2(z.re)
}

/// Convert complex number to phase in degrees
#[inline]
pub fn complex_2_degree(z: Complex64) -> f64 {
    radian_2_degree(complex_2_radian(z))
}

/// Convert radians to degrees
#[inline]
pub fn radian_2_degree(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Convert (magnitude, degree) to complex
pub fn magdeg_2_reim(mag: f64, deg: f64) -> Complex64 {
    Complex64::from_polar(mag, deg * PI / 180.0)
}
