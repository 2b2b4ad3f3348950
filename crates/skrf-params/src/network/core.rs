//! Core Network struct and constructors
//!
//! Contains the Network data structure, its factory methods and the setters
//! that replace its canonical S tensor.

use ndarray::{Array2, Array3};
use num_complex::Complex64;

use crate::error::{NetworkError, NetworkResult};
use crate::frequency::FrequencyPoints;
use crate::math::shape::{normalize_impedance, normalize_s, square_dims, ParamInput, PortImpedance};
use crate::math::transforms::{y2s_fixed, z2s_fixed};

/// An N-port electrical network
///
/// S-parameters are the only stored representation. Assigning Z or Y
/// converts to S immediately and keeps nothing else, and every
/// [`ParameterView`](super::ParameterView) borrows the network, so no view
/// can survive a mutation.
#[derive(Debug, Clone)]
pub struct Network {
    /// Number of frequency points
    pub(crate) nfreq: usize,
    /// S-parameter data [nfreq, nports, nports]
    pub(crate) s: Array3<Complex64>,
    /// Reference impedance [nfreq, nports]
    pub(crate) z0: Array2<Complex64>,
    /// Reference impedance as last supplied, re-broadcast when nports changes
    z0_spec: PortImpedance,
    /// Network name
    name: Option<String>,
}

impl Network {
    /// Create a new Network from S-parameters
    ///
    /// `s` may be a full `(nfreq, nports, nports)` tensor or any form accepted
    /// by [`normalize_s`]; `z0` any form accepted by [`normalize_impedance`].
    ///
    /// # Example
    /// ```
    /// use skrf_params::Network;
    /// let ntwk = Network::new(5usize, vec![0.1, 0.2, 0.3, 0.4, 0.5], 50.0).unwrap();
    /// assert_eq!(ntwk.nports(), 1);
    /// assert_eq!(ntwk.z0().dim(), (5, 1));
    /// ```
    pub fn new(
        frequency: impl FrequencyPoints,
        s: impl Into<ParamInput>,
        z0: impl Into<PortImpedance>,
    ) -> NetworkResult<Self> {
        let nfreq = checked_nfreq(&frequency)?;
        let s = checked_tensor(normalize_s(s)?, nfreq)?;
        let z0_spec = z0.into();
        let z0 = normalize_impedance(&z0_spec, nfreq, s.shape()[1])?;

        Ok(Self {
            nfreq,
            s,
            z0,
            z0_spec,
            name: None,
        })
    }

    /// Create a Network with no ports yet and the default 50 ohm reference
    ///
    /// `nports()` is 0 until S, Z or Y data is assigned.
    pub fn empty(frequency: impl FrequencyPoints) -> NetworkResult<Self> {
        let nfreq = checked_nfreq(&frequency)?;
        Ok(Self {
            nfreq,
            s: Array3::zeros((nfreq, 0, 0)),
            z0: Array2::zeros((nfreq, 0)),
            z0_spec: PortImpedance::default(),
            name: None,
        })
    }

    /// Create from Z-parameters, converted to S against `z0`
    pub fn from_z(
        frequency: impl FrequencyPoints,
        z: impl Into<ParamInput>,
        z0: impl Into<PortImpedance>,
    ) -> NetworkResult<Self> {
        let mut ntwk = Self::empty(frequency)?;
        ntwk.z0_spec = z0.into();
        ntwk.set_z(z)?;
        Ok(ntwk)
    }

    /// Create from Y-parameters, converted to S against `z0`
    pub fn from_y(
        frequency: impl FrequencyPoints,
        y: impl Into<ParamInput>,
        z0: impl Into<PortImpedance>,
    ) -> NetworkResult<Self> {
        let mut ntwk = Self::empty(frequency)?;
        ntwk.z0_spec = z0.into();
        ntwk.set_y(y)?;
        Ok(ntwk)
    }

    /// Set the network name (builder style)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get the number of ports
    ///
    /// 0 for a network created with [`Network::empty`] and not yet assigned.
    #[inline]
    pub fn nports(&self) -> usize {
        self.s.shape()[2]
    }

    /// Get the number of frequency points
    #[inline]
    pub fn nfreq(&self) -> usize {
        self.nfreq
    }

    /// Get reference impedance, shaped [nfreq, nports]
    pub fn z0(&self) -> &Array2<Complex64> {
        &self.z0
    }

    /// Get the network name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set or clear the network name
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Replace the S-parameters
    ///
    /// The reference impedance is re-broadcast from its last supplied form,
    /// so a change of port count works as long as that form still fits.
    /// On error the network is left unchanged.
    pub fn set_s(&mut self, s: impl Into<ParamInput>) -> NetworkResult<()> {
        let s = checked_tensor(normalize_s(s)?, self.nfreq)?;
        let z0 = normalize_impedance(&self.z0_spec, self.nfreq, s.shape()[1])?;
        self.replace(s, z0);
        Ok(())
    }

    /// Replace the network with the given Z-parameters
    ///
    /// Converted to S with the current reference impedance; the Z data itself
    /// is not kept.
    pub fn set_z(&mut self, z: impl Into<ParamInput>) -> NetworkResult<()> {
        let z = checked_tensor(normalize_s(z)?, self.nfreq)?;
        let z0 = normalize_impedance(&self.z0_spec, self.nfreq, z.shape()[1])?;
        let s = z2s_fixed(&z, &z0)?;
        self.replace(s, z0);
        Ok(())
    }

    /// Replace the network with the given Y-parameters
    ///
    /// Converted to S with the current reference impedance; the Y data itself
    /// is not kept.
    pub fn set_y(&mut self, y: impl Into<ParamInput>) -> NetworkResult<()> {
        let y = checked_tensor(normalize_s(y)?, self.nfreq)?;
        let z0 = normalize_impedance(&self.z0_spec, self.nfreq, y.shape()[1])?;
        let s = y2s_fixed(&y, &z0)?;
        self.replace(s, z0);
        Ok(())
    }

    /// Set the reference impedance from any accepted form
    ///
    /// The S-parameters are kept as they are; only the impedance they are
    /// referred to changes.
    pub fn set_z0(&mut self, z0: impl Into<PortImpedance>) -> NetworkResult<()> {
        let spec = z0.into();
        self.z0 = normalize_impedance(&spec, self.nfreq, self.nports())?;
        self.z0_spec = spec;
        Ok(())
    }

    fn replace(&mut self, s: Array3<Complex64>, z0: Array2<Complex64>) {
        tracing::debug!(
            name = self.name.as_deref().unwrap_or(""),
            nfreq = self.nfreq,
            nports = s.shape()[1],
            "Replacing network S-parameters"
        );
        self.s = s;
        self.z0 = z0;
    }
}

fn checked_nfreq(frequency: &impl FrequencyPoints) -> NetworkResult<usize> {
    match frequency.npoints() {
        0 => Err(NetworkError::shape("a network needs at least one frequency point")),
        n => Ok(n),
    }
}

/// Validate that `a` is `(nfreq, n, n)`
fn checked_tensor(a: Array3<Complex64>, nfreq: usize) -> NetworkResult<Array3<Complex64>> {
    let (n, _) = square_dims(&a)?;
    if n != nfreq {
        return Err(NetworkError::shape(format!(
            "parameter data has {} frequency points, network has {}",
            n, nfreq
        )));
    }
    Ok(a)
}
