//! Frequency-length provider
//!
//! Frequency bookkeeping (units, sweeps, axis generation) lives outside this
//! crate. A network only needs to know how many frequency points there are,
//! so anything that can report that count can stand in for a frequency axis.

use ndarray::Array1;

/// Something that knows how many frequency points it holds.
///
/// # Example
/// ```
/// use skrf_params::frequency::FrequencyPoints;
/// let f = vec![1e9, 2e9, 3e9];
/// assert_eq!(f.npoints(), 3);
/// assert_eq!(201usize.npoints(), 201);
/// ```
pub trait FrequencyPoints {
    /// Number of frequency points
    fn npoints(&self) -> usize;
}

/// A bare count of frequency points
impl FrequencyPoints for usize {
    #[inline]
    fn npoints(&self) -> usize {
        *self
    }
}

impl FrequencyPoints for [f64] {
    #[inline]
    fn npoints(&self) -> usize {
        self.len()
    }
}

impl FrequencyPoints for Vec<f64> {
    #[inline]
    fn npoints(&self) -> usize {
        self.len()
    }
}

impl FrequencyPoints for Array1<f64> {
    #[inline]
    fn npoints(&self) -> usize {
        self.len()
    }
}

impl<T: FrequencyPoints + ?Sized> FrequencyPoints for &T {
    #[inline]
    fn npoints(&self) -> usize {
        (**self).npoints()
    }
}
