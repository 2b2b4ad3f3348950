//! Network parameter views (S, Z, Y, T)
//!
//! A [`ParameterView`] is a read-only window onto one parameter kind of a
//! [`Network`]. S is the network's own tensor; Z, Y and T are derived from it
//! on first access and cached in the view. Views borrow the network, so a
//! view obtained before a mutation cannot be used after it; take a new one.

use std::sync::OnceLock;

use ndarray::{s, Array1, Array2, Array3, ArrayView, Ix3, SliceArg};
use num_complex::Complex64;

use super::core::Network;
use super::projection::{ProjectionKind, ScalarProjection};
use crate::error::{NetworkError, NetworkResult};
use crate::math::shape::PortImpedance;
use crate::math::transforms::{convert, s2t, s2y_fixed, s2z_fixed, ParamKind};

/// Read-only view of one parameter kind of a network
#[derive(Debug)]
pub struct ParameterView<'a> {
    network: &'a Network,
    kind: ParamKind,
    cache: OnceLock<Array3<Complex64>>,
}

impl<'a> ParameterView<'a> {
    pub(crate) fn new(network: &'a Network, kind: ParamKind) -> Self {
        Self {
            network,
            kind,
            cache: OnceLock::new(),
        }
    }

    /// Parameter kind of this view
    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    /// Network this view reads from
    pub fn network(&self) -> &'a Network {
        self.network
    }

    /// Number of ports of the underlying network
    pub fn nports(&self) -> usize {
        self.network.nports()
    }

    /// Full parameter tensor [nfreq, nports, nports]
    ///
    /// For S this is the network's own data. Other kinds are computed on the
    /// first call and the same array is returned afterwards.
    pub fn value(&self) -> NetworkResult<&Array3<Complex64>> {
        if self.kind == ParamKind::S {
            return Ok(&self.network.s);
        }
        if let Some(v) = self.cache.get() {
            return Ok(v);
        }
        let v = self.compute()?;
        Ok(self.cache.get_or_init(|| v))
    }

    fn compute(&self) -> NetworkResult<Array3<Complex64>> {
        let ntwk = self.network;
        match self.kind {
            ParamKind::S => Ok(ntwk.s.clone()),
            ParamKind::Z => s2z_fixed(&ntwk.s, &ntwk.z0),
            ParamKind::Y => s2y_fixed(&ntwk.s, &ntwk.z0),
            ParamKind::T => s2t(&ntwk.s),
        }
    }

    /// Single element at `[freq, row port, column port]`
    pub fn get(&self, index: [usize; 3]) -> NetworkResult<Complex64> {
        let v = self.value()?;
        v.get(index).copied().ok_or_else(|| {
            NetworkError::shape(format!(
                "index {:?} out of bounds for shape {:?}",
                index,
                v.shape()
            ))
        })
    }

    /// Trace of one port pair over frequency, `value[:, m, n]`
    pub fn port(&self, m: usize, n: usize) -> NetworkResult<Array1<Complex64>> {
        self.check_port_pair(m, n)?;
        Ok(self.value()?.slice(s![.., m, n]).to_owned())
    }

    /// Parameter matrix at one frequency index, `value[f, :, :]`
    pub fn freq(&self, f: usize) -> NetworkResult<Array2<Complex64>> {
        if f >= self.network.nfreq() {
            return Err(NetworkError::shape(format!(
                "frequency index {} out of range for {} points",
                f,
                self.network.nfreq()
            )));
        }
        Ok(self.value()?.slice(s![f, .., ..]).to_owned())
    }

    /// Slice the parameter tensor with an ndarray slice spec
    ///
    /// Indexing is frequency first, then row port, then column port.
    ///
    /// # Panics
    /// Like [`ndarray::ArrayBase::slice`], if the slice argument is out of bounds.
    ///
    /// # Example
    /// ```
    /// use ndarray::s;
    /// use skrf_params::Network;
    /// let ntwk = Network::new(4usize, vec![0.5; 4], 50.0).unwrap();
    /// let z = ntwk.z();
    /// let first_two = z.slice(s![..2, 0, 0]).unwrap();
    /// assert_eq!(first_two.len(), 2);
    /// ```
    pub fn slice<I>(&self, info: I) -> NetworkResult<ArrayView<'_, Complex64, I::OutDim>>
    where
        I: SliceArg<Ix3>,
    {
        Ok(self.value()?.slice(info))
    }

    pub(crate) fn check_port_pair(&self, m: usize, n: usize) -> NetworkResult<()> {
        let nports = self.nports();
        if m >= nports || n >= nports {
            return Err(NetworkError::shape(format!(
                "port pair ({}, {}) out of range for a {}-port network",
                m, n, nports
            )));
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Scalar projections
    // ------------------------------------------------------------------------

    /// Scalar projection of the given kind
    pub fn project(&self, kind: ProjectionKind) -> ScalarProjection<'_, 'a> {
        ScalarProjection::new(self, kind)
    }

    /// Magnitude in dB, 20*log10(|x|)
    pub fn db(&self) -> ScalarProjection<'_, 'a> {
        self.db20()
    }

    /// Magnitude in dB, 20*log10(|x|)
    pub fn db20(&self) -> ScalarProjection<'_, 'a> {
        self.project(ProjectionKind::Db20)
    }

    /// Magnitude in dB, 10*log10(|x|)
    pub fn db10(&self) -> ScalarProjection<'_, 'a> {
        self.project(ProjectionKind::Db10)
    }

    /// Phase in degrees
    pub fn deg(&self) -> ScalarProjection<'_, 'a> {
        self.project(ProjectionKind::Deg)
    }

    /// Phase in radians
    pub fn rad(&self) -> ScalarProjection<'_, 'a> {
        self.project(ProjectionKind::Rad)
    }

    /// Linear magnitude
    pub fn mag(&self) -> ScalarProjection<'_, 'a> {
        self.project(ProjectionKind::Mag)
    }

    /// Real part
    pub fn re(&self) -> ScalarProjection<'_, 'a> {
        self.project(ProjectionKind::Re)
    }

    /// Imaginary part
    pub fn im(&self) -> ScalarProjection<'_, 'a> {
        self.project(ProjectionKind::Im)
    }
}

impl Network {
    /// View of the given parameter kind
    pub fn param(&self, kind: ParamKind) -> ParameterView<'_> {
        ParameterView::new(self, kind)
    }

    /// Get S-parameters
    pub fn s(&self) -> ParameterView<'_> {
        self.param(ParamKind::S)
    }

    /// Get Z-parameters (impedance)
    pub fn z(&self) -> ParameterView<'_> {
        self.param(ParamKind::Z)
    }

    /// Get Y-parameters (admittance)
    pub fn y(&self) -> ParameterView<'_> {
        self.param(ParamKind::Y)
    }

    /// Get T-parameters (scattering transfer)
    ///
    /// Reading the view fails with a dimension error unless the network is a
    /// 2-port.
    pub fn t(&self) -> ParameterView<'_> {
        self.param(ParamKind::T)
    }

    /// Express the network as `from` parameters, then apply the direct
    /// `from -> to` transform.
    ///
    /// Pairs with no direct transform (Z<->T, Y<->T) fail with
    /// [`NetworkError::UnsupportedConversion`].
    pub fn convert(&self, from: ParamKind, to: ParamKind) -> NetworkResult<Array3<Complex64>> {
        let view = self.param(from);
        let data = view.value()?;
        convert(data, from, to, &PortImpedance::Full(self.z0.clone()))
    }
}
