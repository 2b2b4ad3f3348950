//! Network property checks
//!
//! Reciprocity on any parameter kind, passivity and losslessness on S.

use ndarray::s;
use num_complex::Complex64;

use super::core::Network;
use super::params::ParameterView;
use crate::constants::PROPERTY_TOL;
use crate::error::NetworkResult;
use crate::math::linalg::singular_values;

impl ParameterView<'_> {
    /// Test if the parameter matrices are symmetric (X = X^T) at every
    /// frequency, which is reciprocity for S, Z and Y alike.
    pub fn is_reciprocal(&self, tol: Option<f64>) -> NetworkResult<bool> {
        let tol = tol.unwrap_or(PROPERTY_TOL);
        let v = self.value()?;
        let (nfreq, nports, _) = v.dim();

        for f in 0..nfreq {
            for i in 0..nports {
                for j in i + 1..nports {
                    if (v[[f, i, j]] - v[[f, j, i]]).norm() > tol {
                        return Ok(false);
                    }
                }
            }
        }
        Ok(true)
    }
}

impl Network {
    /// Test if network is reciprocal
    ///
    /// A network is reciprocal if S = S^T (transpose).
    pub fn is_reciprocal(&self, tol: Option<f64>) -> bool {
        // S is stored, so reading it cannot fail
        self.s().is_reciprocal(tol).unwrap_or(false)
    }

    /// Test if network is passive
    ///
    /// A network is passive if no singular value of S exceeds 1 at any
    /// frequency, i.e. `I - S^H * S` is positive semi-definite.
    pub fn is_passive(&self, tol: Option<f64>) -> bool {
        let tol = tol.unwrap_or(PROPERTY_TOL);
        (0..self.nfreq()).all(|f| {
            singular_values(self.s.slice(s![f, .., ..]))
                .first()
                .map_or(true, |&max| max <= 1.0 + tol)
        })
    }

    /// Test if network is lossless
    ///
    /// A network is lossless if S is unitary: S^H * S = I
    pub fn is_lossless(&self, tol: Option<f64>) -> bool {
        let tol = tol.unwrap_or(PROPERTY_TOL);
        let nports = self.nports();

        for f in 0..self.nfreq() {
            for i in 0..nports {
                for j in 0..nports {
                    let mut sum = Complex64::new(0.0, 0.0);
                    for k in 0..nports {
                        sum += self.s[[f, k, i]].conj() * self.s[[f, k, j]];
                    }
                    let expected = if i == j { 1.0 } else { 0.0 };
                    if (sum.re - expected).abs() > tol || sum.im.abs() > tol {
                        return false;
                    }
                }
            }
        }
        true
    }
}
