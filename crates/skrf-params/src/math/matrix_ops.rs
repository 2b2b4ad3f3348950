//! Matrix operation helpers
//!
//! Diagonal reference-impedance matrices and the per-frequency driver shared
//! by every transform in [`crate::math::transforms`].

use ndarray::{s, Array2, Array3, ArrayView1};
use num_complex::Complex64;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "parallel")]
use crate::constants::PARALLEL_MIN_FREQS;
use crate::error::{NetworkError, NetworkResult};

/// Create a diagonal matrix from a sequence of values
#[inline]
pub fn diag_matrix<I>(values: I) -> Array2<Complex64>
where
    I: IntoIterator<Item = Complex64>,
{
    let values: Vec<Complex64> = values.into_iter().collect();
    let n = values.len();
    let mut m = Array2::<Complex64>::zeros((n, n));
    for (i, v) in values.into_iter().enumerate() {
        m[[i, i]] = v;
    }
    m
}

/// `sqrt(diag(z0))` for one frequency row of the reference impedance
#[inline]
pub fn sqrt_z0_matrix(z0_row: ArrayView1<Complex64>) -> Array2<Complex64> {
    diag_matrix(z0_row.iter().map(|z| z.sqrt()))
}

/// `sqrt(diag(1/z0))` for one frequency row of the reference impedance
///
/// Fails with a domain error if any port impedance is exactly zero.
pub fn sqrt_y0_matrix(z0_row: ArrayView1<Complex64>, f: usize) -> NetworkResult<Array2<Complex64>> {
    let mut vals = Vec::with_capacity(z0_row.len());
    for (port, z) in z0_row.iter().enumerate() {
        if *z == Complex64::new(0.0, 0.0) {
            return Err(NetworkError::domain(format!(
                "port impedance is zero at frequency index {}, port {}",
                f, port
            )));
        }
        vals.push(z.inv().sqrt());
    }
    Ok(diag_matrix(vals))
}

/// Build an `(nfreq, n, n)` tensor by evaluating `op` at every frequency index.
///
/// `op` must return an `n x n` matrix. With the `parallel` feature the
/// indices are spread over rayon once `nfreq` is large enough; the result is
/// always assembled in frequency order and the first failure aborts the
/// whole tensor.
pub fn map_per_freq<F>(nfreq: usize, n: usize, op: F) -> NetworkResult<Array3<Complex64>>
where
    F: Fn(usize) -> NetworkResult<Array2<Complex64>> + Sync + Send,
{
    // Zero-port data: nothing to evaluate
    if n == 0 {
        return Ok(Array3::zeros((nfreq, 0, 0)));
    }

    #[cfg(feature = "parallel")]
    let slices: Vec<Array2<Complex64>> = if nfreq >= PARALLEL_MIN_FREQS {
        (0..nfreq)
            .into_par_iter()
            .map(&op)
            .collect::<NetworkResult<Vec<_>>>()?
    } else {
        (0..nfreq).map(&op).collect::<NetworkResult<Vec<_>>>()?
    };

    #[cfg(not(feature = "parallel"))]
    let slices: Vec<Array2<Complex64>> =
        (0..nfreq).map(&op).collect::<NetworkResult<Vec<_>>>()?;

    let mut out = Array3::<Complex64>::zeros((nfreq, n, n));
    for (f, m) in slices.iter().enumerate() {
        out.slice_mut(s![f, .., ..]).assign(m);
    }
    Ok(out)
}
