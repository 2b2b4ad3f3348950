//! Shape normalization for port impedances and parameter tensors
//!
//! Callers may describe the reference impedance as a single number, a
//! per-port vector, a per-frequency vector or a full `(nfreq, nports)` matrix,
//! and may hand over one-port data as a flat sequence. Everything downstream
//! works on the canonical shapes produced here: `(nfreq, nports)` for z0 and
//! `(nfreq, nports, nports)` for parameter data.

use ndarray::{Array1, Array2, Array3, ArrayD, Ix3};
use num_complex::Complex64;

use crate::constants::DEFAULT_Z0;
use crate::error::{NetworkError, NetworkResult};

/// Reference impedance as supplied by the caller, before broadcasting.
#[derive(Debug, Clone, PartialEq)]
pub enum PortImpedance {
    /// Same impedance at every port and frequency
    Scalar(Complex64),
    /// Either one value per port (constant over frequency) or one value per
    /// frequency (constant over ports); resolved by [`normalize_impedance`]
    Vector(Array1<Complex64>),
    /// Already shaped `(nfreq, nports)`
    Full(Array2<Complex64>),
}

impl Default for PortImpedance {
    fn default() -> Self {
        PortImpedance::Scalar(Complex64::new(DEFAULT_Z0, 0.0))
    }
}

impl From<f64> for PortImpedance {
    fn from(z: f64) -> Self {
        PortImpedance::Scalar(Complex64::new(z, 0.0))
    }
}

impl From<Complex64> for PortImpedance {
    fn from(z: Complex64) -> Self {
        PortImpedance::Scalar(z)
    }
}

impl From<Vec<f64>> for PortImpedance {
    fn from(z: Vec<f64>) -> Self {
        PortImpedance::Vector(z.into_iter().map(|x| Complex64::new(x, 0.0)).collect())
    }
}

impl From<&[f64]> for PortImpedance {
    fn from(z: &[f64]) -> Self {
        PortImpedance::Vector(z.iter().map(|&x| Complex64::new(x, 0.0)).collect())
    }
}

impl From<Vec<Complex64>> for PortImpedance {
    fn from(z: Vec<Complex64>) -> Self {
        PortImpedance::Vector(Array1::from(z))
    }
}

impl From<Array1<Complex64>> for PortImpedance {
    fn from(z: Array1<Complex64>) -> Self {
        PortImpedance::Vector(z)
    }
}

impl From<Array1<f64>> for PortImpedance {
    fn from(z: Array1<f64>) -> Self {
        PortImpedance::Vector(z.mapv(|x| Complex64::new(x, 0.0)))
    }
}

impl From<Array2<Complex64>> for PortImpedance {
    fn from(z: Array2<Complex64>) -> Self {
        PortImpedance::Full(z)
    }
}

impl From<Array2<f64>> for PortImpedance {
    fn from(z: Array2<f64>) -> Self {
        PortImpedance::Full(z.mapv(|x| Complex64::new(x, 0.0)))
    }
}

/// Broadcast a reference impedance to shape `(nfreq, nports)`.
///
/// Resolution order:
/// 1. a full matrix that already has shape `(nfreq, nports)` is copied
/// 2. a scalar fills every entry
/// 3. a vector of length `nports` is repeated for every frequency
/// 4. a vector of length `nfreq` is repeated for every port
///
/// When `nfreq == nports` a vector always takes the per-port reading (3).
///
/// # Example
/// ```
/// use skrf_params::math::shape::{normalize_impedance, PortImpedance};
/// let z0 = normalize_impedance(&PortImpedance::from(vec![50.0, 25.0]), 5, 2).unwrap();
/// assert_eq!(z0.dim(), (5, 2));
/// assert_eq!(z0[[4, 1]].re, 25.0);
/// ```
pub fn normalize_impedance(
    z0: &PortImpedance,
    nfreq: usize,
    nports: usize,
) -> NetworkResult<Array2<Complex64>> {
    match z0 {
        PortImpedance::Full(m) if m.dim() == (nfreq, nports) => Ok(m.clone()),
        PortImpedance::Full(m) => Err(NetworkError::shape(format!(
            "z0 has shape {:?}, expected ({}, {})",
            m.dim(),
            nfreq,
            nports
        ))),
        PortImpedance::Scalar(z) => Ok(Array2::from_elem((nfreq, nports), *z)),
        PortImpedance::Vector(v) if v.len() == nports => {
            Ok(Array2::from_shape_fn((nfreq, nports), |(_, p)| v[p]))
        }
        PortImpedance::Vector(v) if v.len() == nfreq => {
            Ok(Array2::from_shape_fn((nfreq, nports), |(f, _)| v[f]))
        }
        PortImpedance::Vector(v) => Err(NetworkError::shape(format!(
            "z0 of length {} matches neither {} ports nor {} frequency points",
            v.len(),
            nports,
            nfreq
        ))),
    }
}

/// Parameter data of any dimensionality, before normalization.
///
/// Wraps a dynamic-dimension array so scalars, flat one-port sequences and
/// full tensors all go through the same entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamInput(ArrayD<Complex64>);

impl ParamInput {
    /// Shape of the wrapped data
    pub fn shape(&self) -> &[usize] {
        self.0.shape()
    }

    /// Unwrap the dynamic array
    pub fn into_inner(self) -> ArrayD<Complex64> {
        self.0
    }
}

impl From<ArrayD<Complex64>> for ParamInput {
    fn from(a: ArrayD<Complex64>) -> Self {
        ParamInput(a)
    }
}

impl From<Complex64> for ParamInput {
    fn from(c: Complex64) -> Self {
        ParamInput(ndarray::arr0(c).into_dyn())
    }
}

impl From<f64> for ParamInput {
    fn from(x: f64) -> Self {
        ParamInput::from(Complex64::new(x, 0.0))
    }
}

impl From<Vec<Complex64>> for ParamInput {
    fn from(v: Vec<Complex64>) -> Self {
        ParamInput(Array1::from(v).into_dyn())
    }
}

impl From<Vec<f64>> for ParamInput {
    fn from(v: Vec<f64>) -> Self {
        ParamInput(
            v.into_iter()
                .map(|x| Complex64::new(x, 0.0))
                .collect::<Array1<_>>()
                .into_dyn(),
        )
    }
}

impl From<Array1<Complex64>> for ParamInput {
    fn from(a: Array1<Complex64>) -> Self {
        ParamInput(a.into_dyn())
    }
}

impl From<Array1<f64>> for ParamInput {
    fn from(a: Array1<f64>) -> Self {
        ParamInput(a.mapv(|x| Complex64::new(x, 0.0)).into_dyn())
    }
}

impl From<Array2<Complex64>> for ParamInput {
    fn from(a: Array2<Complex64>) -> Self {
        ParamInput(a.into_dyn())
    }
}

impl From<Array3<Complex64>> for ParamInput {
    fn from(a: Array3<Complex64>) -> Self {
        ParamInput(a.into_dyn())
    }
}

impl From<&Array3<Complex64>> for ParamInput {
    fn from(a: &Array3<Complex64>) -> Self {
        ParamInput(a.clone().into_dyn())
    }
}

/// Bring parameter data into `(nfreq, nports, nports)` form.
///
/// - 0-D and 1-D input is one reflection coefficient per frequency point:
///   `(n,) -> (n, 1, 1)`.
/// - 2-D input shaped `(1, n)` or `(n, 1)` is likewise a one-port series,
///   `(n, 1, 1)`. Any other 2-D `(a, b)` with `b` a multiple of `a` is read
///   as `b / a` stacked `a x a` matrices, so a square `(n, n)` becomes a
///   single frequency point of an n-port, never n points of an n-port.
/// - 3-D input is passed through unchanged.
pub fn normalize_s(s: impl Into<ParamInput>) -> NetworkResult<Array3<Complex64>> {
    let s = s.into().into_inner();
    match s.ndim() {
        0 | 1 => one_port_series(s),
        2 => {
            let (a, b) = (s.shape()[0], s.shape()[1]);
            if a == 1 || b == 1 {
                one_port_series(s)
            } else if a > 0 && b % a == 0 {
                let values: Vec<Complex64> = s.iter().cloned().collect();
                Array3::from_shape_vec((b / a, a, a), values)
                    .map_err(|e| NetworkError::shape(e.to_string()))
            } else {
                Err(NetworkError::shape(format!(
                    "cannot read 2-D parameter data of shape ({}, {}) as square matrices",
                    a, b
                )))
            }
        }
        3 => s
            .into_dimensionality::<Ix3>()
            .map_err(|e| NetworkError::shape(e.to_string())),
        n => Err(NetworkError::shape(format!(
            "parameter data has {} dimensions, at most 3 are supported",
            n
        ))),
    }
}

fn one_port_series(s: ArrayD<Complex64>) -> NetworkResult<Array3<Complex64>> {
    let values: Vec<Complex64> = s.iter().cloned().collect();
    Array3::from_shape_vec((values.len(), 1, 1), values)
        .map_err(|e| NetworkError::shape(e.to_string()))
}

/// Check that `a` is a stack of square matrices and return `(nfreq, nports)`.
pub fn square_dims(a: &Array3<Complex64>) -> NetworkResult<(usize, usize)> {
    let (nfreq, rows, cols) = a.dim();
    if rows != cols {
        return Err(NetworkError::shape(format!(
            "parameter matrices must be square, got {}x{}",
            rows, cols
        )));
    }
    Ok((nfreq, rows))
}
