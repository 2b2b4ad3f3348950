//! Scalar projections of network parameters
//!
//! Provides real-valued views (dB, phase, magnitude, real/imaginary part)
//! computed elementwise from a [`ParameterView`].

use std::fmt;

use ndarray::{Array1, Array3};
use num_complex::Complex64;

use super::params::ParameterView;
use crate::error::NetworkResult;
use crate::math::conversions::{
    complex_2_db, complex_2_db10, complex_2_degree, complex_2_magnitude, complex_2_radian,
};

/// Kind of scalar projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionKind {
    /// 10*log10(|x|)
    Db10,
    /// 20*log10(|x|)
    Db20,
    /// Phase in degrees
    Deg,
    /// Phase in radians
    Rad,
    /// |x|
    Mag,
    /// Real part
    Re,
    /// Imaginary part
    Im,
}

impl ProjectionKind {
    /// Short name ("db10", "db20", "deg", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectionKind::Db10 => "db10",
            ProjectionKind::Db20 => "db20",
            ProjectionKind::Deg => "deg",
            ProjectionKind::Rad => "rad",
            ProjectionKind::Mag => "mag",
            ProjectionKind::Re => "re",
            ProjectionKind::Im => "im",
        }
    }

    /// Unit of the projected values, empty when dimensionless or the unit of
    /// the parent parameter
    pub fn unit(&self) -> &'static str {
        match self {
            ProjectionKind::Db10 | ProjectionKind::Db20 => "dB",
            ProjectionKind::Deg => "deg",
            ProjectionKind::Rad => "rad",
            ProjectionKind::Mag | ProjectionKind::Re | ProjectionKind::Im => "",
        }
    }

    /// Apply the projection to one complex value
    #[inline]
    pub fn apply(&self, x: Complex64) -> f64 {
        match self {
            ProjectionKind::Db10 => complex_2_db10(x),
            ProjectionKind::Db20 => complex_2_db(x),
            ProjectionKind::Deg => complex_2_degree(x),
            ProjectionKind::Rad => complex_2_radian(x),
            ProjectionKind::Mag => complex_2_magnitude(x),
            ProjectionKind::Re => x.re,
            ProjectionKind::Im => x.im,
        }
    }
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Real-valued projection of a parameter view
///
/// Holds no data of its own; each read maps the parent's (possibly cached)
/// complex values.
#[derive(Debug, Clone, Copy)]
pub struct ScalarProjection<'v, 'a> {
    param: &'v ParameterView<'a>,
    kind: ProjectionKind,
}

impl<'v, 'a> ScalarProjection<'v, 'a> {
    pub(crate) fn new(param: &'v ParameterView<'a>, kind: ProjectionKind) -> Self {
        Self { param, kind }
    }

    /// Projection kind
    pub fn kind(&self) -> ProjectionKind {
        self.kind
    }

    /// Parameter view this projection reads from
    pub fn param(&self) -> &'v ParameterView<'a> {
        self.param
    }

    /// Unit of the projected values
    pub fn unit(&self) -> &'static str {
        self.kind.unit()
    }

    /// Projected tensor [nfreq, nports, nports]
    pub fn value(&self) -> NetworkResult<Array3<f64>> {
        let kind = self.kind;
        Ok(self.param.value()?.mapv(|x| kind.apply(x)))
    }

    /// Single projected element at `[freq, row port, column port]`
    pub fn get(&self, index: [usize; 3]) -> NetworkResult<f64> {
        Ok(self.kind.apply(self.param.get(index)?))
    }

    /// Projected trace of one port pair over frequency, `value[:, m, n]`
    pub fn port(&self, m: usize, n: usize) -> NetworkResult<Array1<f64>> {
        let kind = self.kind;
        Ok(self.param.port(m, n)?.mapv(|x| kind.apply(x)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Network;
    use approx::assert_relative_eq;

    #[test]
    fn test_db_projections() {
        let ntwk = Network::new(2usize, vec![0.1, 1.0], 50.0).unwrap();
        let s = ntwk.s();

        let db = s.db().value().unwrap();
        assert_relative_eq!(db[[0, 0, 0]], -20.0, epsilon = 1e-12);
        assert_relative_eq!(db[[1, 0, 0]], 0.0, epsilon = 1e-12);

        let db10 = s.db10().value().unwrap();
        assert_relative_eq!(db10[[0, 0, 0]], -10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_phase_projections() {
        let ntwk = Network::new(1usize, Complex64::new(0.0, 0.5), 50.0).unwrap();
        let s = ntwk.s();
        assert_relative_eq!(s.deg().get([0, 0, 0]).unwrap(), 90.0, epsilon = 1e-12);
        assert_relative_eq!(
            s.rad().get([0, 0, 0]).unwrap(),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        );
        assert_eq!(s.deg().unit(), "deg");
    }

    #[test]
    fn test_zero_magnitude_passes_through() {
        let ntwk = Network::new(1usize, 0.0, 50.0).unwrap();
        let db = ntwk.s().db().get([0, 0, 0]).unwrap();
        assert_eq!(db, f64::NEG_INFINITY);
    }

    #[test]
    fn test_projection_of_derived_view() {
        // S11 = 0.5 -> Z11 = 150 ohm
        let ntwk = Network::new(3usize, vec![0.5; 3], 50.0).unwrap();
        let z = ntwk.z();
        let mag = z.mag().port(0, 0).unwrap();
        assert_eq!(mag.len(), 3);
        for v in mag.iter() {
            assert_relative_eq!(*v, 150.0, epsilon = 1e-10);
        }
        assert_eq!(z.re().kind(), ProjectionKind::Re);
    }
}
