//! Network parameter transformations
//!
//! Provides conversions between S, Z, Y and T parameters. Every transform
//! works one frequency index at a time: the result at index `f` depends only
//! on the `nports x nports` matrix at `f` and, where needed, row `f` of the
//! reference impedance.
//!
//! Z<->T and Y<->T are not provided. They exist as functions so callers get a
//! typed [`NetworkError::UnsupportedConversion`] rather than a missing symbol;
//! go through S instead.

use std::fmt;

use ndarray::{s, Array2, Array3};
use num_complex::Complex64;

use crate::constants::SINGULARITY_EPS;
use crate::error::{NetworkError, NetworkResult};
use crate::math::linalg::inv_complex;
use crate::math::matrix_ops::{map_per_freq, sqrt_y0_matrix, sqrt_z0_matrix};
use crate::math::shape::{normalize_impedance, square_dims, PortImpedance};

/// Network parameter kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Scattering parameters
    S,
    /// Impedance parameters
    Z,
    /// Admittance parameters
    Y,
    /// Scattering transfer (cascading) parameters, 2-port only
    T,
}

impl ParamKind {
    pub const ALL: [ParamKind; 4] = [ParamKind::S, ParamKind::Z, ParamKind::Y, ParamKind::T];

    /// Lower-case short name ("s", "z", "y", "t")
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::S => "s",
            ParamKind::Z => "z",
            ParamKind::Y => "y",
            ParamKind::T => "t",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Internal helpers
// ============================================================================

/// Copy of `s` with exact +1 and -1 entries nudged by [`SINGULARITY_EPS`].
fn guard_unit_entries(s: &Array3<Complex64>) -> Array3<Complex64> {
    let one = Complex64::new(1.0, 0.0);
    let mut guarded = s.clone();
    let mut nudged = 0usize;
    guarded.mapv_inplace(|x| {
        if x == one {
            nudged += 1;
            Complex64::new(1.0 + SINGULARITY_EPS, 0.0)
        } else if x == -one {
            nudged += 1;
            Complex64::new(-1.0 + SINGULARITY_EPS, 0.0)
        } else {
            x
        }
    });
    if nudged > 0 {
        tracing::debug!(nudged, "Offset unit-magnitude S entries before inversion");
    }
    guarded
}

fn invert(m: &Array2<Complex64>, what: &str, f: usize) -> NetworkResult<Array2<Complex64>> {
    inv_complex(m.view()).ok_or_else(|| {
        NetworkError::domain(format!("{} is singular at frequency index {}", what, f))
    })
}

fn require_two_port(a: &Array3<Complex64>, operation: &'static str) -> NetworkResult<usize> {
    let (nfreq, nports) = square_dims(a)?;
    if nports != 2 {
        return Err(NetworkError::Dimension {
            operation,
            expected: 2,
            actual: nports,
        });
    }
    Ok(nfreq)
}

fn unsupported(from: ParamKind, to: ParamKind) -> NetworkError {
    NetworkError::UnsupportedConversion { from, to }
}

// ============================================================================
// S <-> Z
// ============================================================================

/// Convert S-parameters to Z-parameters
///
/// Formula: `Z = F * inv(I - S) * (I + S) * F` where `F = sqrt(diag(z0))`.
///
/// Entries of `s` equal to exactly +1 or -1 are offset by 1e-12 on a private
/// copy first, so an ideal open or short gives a very large but finite
/// impedance rather than a singular matrix.
pub fn s2z(s: &Array3<Complex64>, z0: &PortImpedance) -> NetworkResult<Array3<Complex64>> {
    let (nfreq, nports) = square_dims(s)?;
    let z0 = normalize_impedance(z0, nfreq, nports)?;
    s2z_fixed(s, &z0)
}

/// [`s2z`] with `z0` already shaped `(nfreq, nports)`
pub(crate) fn s2z_fixed(
    s: &Array3<Complex64>,
    z0: &Array2<Complex64>,
) -> NetworkResult<Array3<Complex64>> {
    let (nfreq, nports) = square_dims(s)?;
    let s = guard_unit_entries(s);
    let identity = Array2::<Complex64>::eye(nports);

    map_per_freq(nfreq, nports, |f| {
        let s_f = s.slice(s![f, .., ..]);
        let f_mat = sqrt_z0_matrix(z0.row(f));
        let inv_i_minus_s = invert(&(&identity - &s_f), "I - S", f)?;
        let i_plus_s = &identity + &s_f;
        Ok(f_mat.dot(&inv_i_minus_s).dot(&i_plus_s).dot(&f_mat))
    })
}

/// Convert Z-parameters to S-parameters
///
/// Formula: `S = (G*Z*G - I) * inv(G*Z*G + I)` where `G = sqrt(diag(1/z0))`.
pub fn z2s(z: &Array3<Complex64>, z0: &PortImpedance) -> NetworkResult<Array3<Complex64>> {
    let (nfreq, nports) = square_dims(z)?;
    let z0 = normalize_impedance(z0, nfreq, nports)?;
    z2s_fixed(z, &z0)
}

pub(crate) fn z2s_fixed(
    z: &Array3<Complex64>,
    z0: &Array2<Complex64>,
) -> NetworkResult<Array3<Complex64>> {
    let (nfreq, nports) = square_dims(z)?;
    let identity = Array2::<Complex64>::eye(nports);

    map_per_freq(nfreq, nports, |f| {
        let g_mat = sqrt_y0_matrix(z0.row(f), f)?;
        // Normalized Z' = G * Z * G
        let z_norm = g_mat.dot(&z.slice(s![f, .., ..])).dot(&g_mat);
        let inv_term = invert(&(&z_norm + &identity), "Z' + I", f)?;
        Ok((&z_norm - &identity).dot(&inv_term))
    })
}

// ============================================================================
// S <-> Y
// ============================================================================

/// Convert S-parameters to Y-parameters
///
/// Formula: `Y = G * (I - S) * inv(I + S) * G` where `G = sqrt(diag(1/z0))`.
/// Uses the same +-1 offset as [`s2z`].
pub fn s2y(s: &Array3<Complex64>, z0: &PortImpedance) -> NetworkResult<Array3<Complex64>> {
    let (nfreq, nports) = square_dims(s)?;
    let z0 = normalize_impedance(z0, nfreq, nports)?;
    s2y_fixed(s, &z0)
}

pub(crate) fn s2y_fixed(
    s: &Array3<Complex64>,
    z0: &Array2<Complex64>,
) -> NetworkResult<Array3<Complex64>> {
    let (nfreq, nports) = square_dims(s)?;
    let s = guard_unit_entries(s);
    let identity = Array2::<Complex64>::eye(nports);

    map_per_freq(nfreq, nports, |f| {
        let s_f = s.slice(s![f, .., ..]);
        let g_mat = sqrt_y0_matrix(z0.row(f), f)?;
        let inv_i_plus_s = invert(&(&identity + &s_f), "I + S", f)?;
        let i_minus_s = &identity - &s_f;
        Ok(g_mat.dot(&i_minus_s).dot(&inv_i_plus_s).dot(&g_mat))
    })
}

/// Convert Y-parameters to S-parameters
///
/// Formula: `S = (I - F*Y*F) * inv(I + F*Y*F)` where `F = sqrt(diag(z0))`.
pub fn y2s(y: &Array3<Complex64>, z0: &PortImpedance) -> NetworkResult<Array3<Complex64>> {
    let (nfreq, nports) = square_dims(y)?;
    let z0 = normalize_impedance(z0, nfreq, nports)?;
    y2s_fixed(y, &z0)
}

pub(crate) fn y2s_fixed(
    y: &Array3<Complex64>,
    z0: &Array2<Complex64>,
) -> NetworkResult<Array3<Complex64>> {
    let (nfreq, nports) = square_dims(y)?;
    let identity = Array2::<Complex64>::eye(nports);

    map_per_freq(nfreq, nports, |f| {
        let f_mat = sqrt_z0_matrix(z0.row(f));
        // Normalized Y' = F * Y * F
        let y_norm = f_mat.dot(&y.slice(s![f, .., ..])).dot(&f_mat);
        let inv_term = invert(&(&identity + &y_norm), "I + Y'", f)?;
        Ok((&identity - &y_norm).dot(&inv_term))
    })
}

// ============================================================================
// Z <-> Y
// ============================================================================

/// Convert Z-parameters to Y-parameters: `Y = inv(Z)` per frequency
pub fn z2y(z: &Array3<Complex64>) -> NetworkResult<Array3<Complex64>> {
    let (nfreq, nports) = square_dims(z)?;
    map_per_freq(nfreq, nports, |f| {
        invert(&z.slice(s![f, .., ..]).to_owned(), "Z", f)
    })
}

/// Convert Y-parameters to Z-parameters: `Z = inv(Y)` per frequency
pub fn y2z(y: &Array3<Complex64>) -> NetworkResult<Array3<Complex64>> {
    let (nfreq, nports) = square_dims(y)?;
    map_per_freq(nfreq, nports, |f| {
        invert(&y.slice(s![f, .., ..]).to_owned(), "Y", f)
    })
}

// ============================================================================
// S <-> T (2-port only)
// ============================================================================

/// Convert S-parameters to scattering transfer (T) parameters
///
/// Only 2-port data is accepted. With `S21 = s[f, 1, 0]`:
///
/// ```text
/// T11 = -(S11*S22 - S12*S21) / S21    T12 = S11 / S21
/// T21 = -S22 / S21                    T22 = 1 / S21
/// ```
pub fn s2t(s: &Array3<Complex64>) -> NetworkResult<Array3<Complex64>> {
    let nfreq = require_two_port(s, "s2t")?;
    map_per_freq(nfreq, 2, |f| {
        let (s11, s12) = (s[[f, 0, 0]], s[[f, 0, 1]]);
        let (s21, s22) = (s[[f, 1, 0]], s[[f, 1, 1]]);
        if s21 == Complex64::new(0.0, 0.0) {
            return Err(NetworkError::domain(format!(
                "S21 is zero at frequency index {}, T-parameters are undefined",
                f
            )));
        }
        let mut t = Array2::<Complex64>::zeros((2, 2));
        t[[0, 0]] = -(s11 * s22 - s12 * s21) / s21;
        t[[0, 1]] = s11 / s21;
        t[[1, 0]] = -s22 / s21;
        t[[1, 1]] = s21.inv();
        Ok(t)
    })
}

/// Convert scattering transfer (T) parameters to S-parameters
///
/// Inverse of [`s2t`]:
///
/// ```text
/// S11 = T12 / T22    S12 = (T11*T22 - T12*T21) / T22
/// S21 = 1 / T22      S22 = -T21 / T22
/// ```
pub fn t2s(t: &Array3<Complex64>) -> NetworkResult<Array3<Complex64>> {
    let nfreq = require_two_port(t, "t2s")?;
    map_per_freq(nfreq, 2, |f| {
        let (t11, t12) = (t[[f, 0, 0]], t[[f, 0, 1]]);
        let (t21, t22) = (t[[f, 1, 0]], t[[f, 1, 1]]);
        if t22 == Complex64::new(0.0, 0.0) {
            return Err(NetworkError::domain(format!(
                "T22 is zero at frequency index {}",
                f
            )));
        }
        let mut s = Array2::<Complex64>::zeros((2, 2));
        s[[0, 0]] = t12 / t22;
        s[[0, 1]] = (t11 * t22 - t12 * t21) / t22;
        s[[1, 0]] = t22.inv();
        s[[1, 1]] = -t21 / t22;
        Ok(s)
    })
}

// ============================================================================
// Unsupported pairs
// ============================================================================

/// Z to T is not provided; use `s2t(z2s(z, z0))`
pub fn z2t(_z: &Array3<Complex64>) -> NetworkResult<Array3<Complex64>> {
    Err(unsupported(ParamKind::Z, ParamKind::T))
}

/// T to Z is not provided; use `s2z(t2s(t), z0)`
pub fn t2z(_t: &Array3<Complex64>) -> NetworkResult<Array3<Complex64>> {
    Err(unsupported(ParamKind::T, ParamKind::Z))
}

/// Y to T is not provided; use `s2t(y2s(y, z0))`
pub fn y2t(_y: &Array3<Complex64>) -> NetworkResult<Array3<Complex64>> {
    Err(unsupported(ParamKind::Y, ParamKind::T))
}

/// T to Y is not provided; use `s2y(t2s(t), z0)`
pub fn t2y(_t: &Array3<Complex64>) -> NetworkResult<Array3<Complex64>> {
    Err(unsupported(ParamKind::T, ParamKind::Y))
}

// ============================================================================
// Dispatch
// ============================================================================

/// Convert `data` of kind `from` into kind `to` with one direct transform.
///
/// Same-kind requests return a copy. Pairs without a direct transform fail
/// with [`NetworkError::UnsupportedConversion`]; nothing is routed through S
/// implicitly.
pub fn convert(
    data: &Array3<Complex64>,
    from: ParamKind,
    to: ParamKind,
    z0: &PortImpedance,
) -> NetworkResult<Array3<Complex64>> {
    use ParamKind::*;
    match (from, to) {
        (S, S) | (Z, Z) | (Y, Y) | (T, T) => Ok(data.clone()),
        (S, Z) => s2z(data, z0),
        (S, Y) => s2y(data, z0),
        (S, T) => s2t(data),
        (Z, S) => z2s(data, z0),
        (Z, Y) => z2y(data),
        (Z, T) => z2t(data),
        (Y, S) => y2s(data, z0),
        (Y, Z) => y2z(data),
        (Y, T) => y2t(data),
        (T, S) => t2s(data),
        (T, Z) => t2z(data),
        (T, Y) => t2y(data),
    }
}
