//! Linear algebra operations
//!
//! Matrix inversion for the per-frequency conversions. nalgebra is the
//! backend; all ndarray <-> nalgebra conversions are contained here so the
//! transform code only ever sees ndarray types.

use nalgebra::DMatrix;
use ndarray::{Array2, ArrayView2};
use num_complex::Complex64;

// ============================================================================
// Conversion helpers (internal)
// ============================================================================

/// Convert an ndarray view to nalgebra DMatrix<Complex<f64>>
#[inline]
fn to_na_complex(a: ArrayView2<Complex64>) -> DMatrix<nalgebra::Complex<f64>> {
    let (m, n) = a.dim();
    DMatrix::from_fn(m, n, |i, j| {
        nalgebra::Complex::new(a[[i, j]].re, a[[i, j]].im)
    })
}

/// Convert nalgebra DMatrix<Complex<f64>> to ndarray Array2<Complex64>
#[inline]
fn from_na_complex(m: &DMatrix<nalgebra::Complex<f64>>) -> Array2<Complex64> {
    Array2::from_shape_fn((m.nrows(), m.ncols()), |(i, j)| {
        Complex64::new(m[(i, j)].re, m[(i, j)].im)
    })
}

// ============================================================================
// Matrix inversion
// ============================================================================

/// Invert a complex matrix
///
/// Returns None if the matrix is non-square, empty, or exactly singular.
/// Near-singular matrices are inverted as-is; callers that need to avoid
/// them must condition the input first.
pub fn inv_complex(a: ArrayView2<Complex64>) -> Option<Array2<Complex64>> {
    let (m, n) = a.dim();
    if m != n || m == 0 {
        return None;
    }

    // Closed form for the 1x1 case, which covers every one-port network
    if m == 1 {
        let v = a[[0, 0]];
        if v == Complex64::new(0.0, 0.0) {
            return None;
        }
        return Some(Array2::from_elem((1, 1), v.inv()));
    }

    to_na_complex(a)
        .try_inverse()
        .map(|inv| from_na_complex(&inv))
}

// ============================================================================
// Singular Value Decomposition
// ============================================================================

/// Compute singular values of a complex matrix, largest first
pub fn singular_values(a: ArrayView2<Complex64>) -> Vec<f64> {
    let (m, n) = a.dim();
    if m == 0 || n == 0 {
        return Vec::new();
    }

    let mut sv: Vec<f64> = to_na_complex(a)
        .singular_values()
        .iter()
        .cloned()
        .collect();
    sv.sort_by(|x, y| y.total_cmp(x));
    sv
}
