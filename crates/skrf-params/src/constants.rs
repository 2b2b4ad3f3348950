//! Numerical constants for parameter conversions
//!
//! Provides the tolerances and defaults shared across the library.

/// Offset added to S-parameter entries that are exactly +1 or -1 before an
/// `(I - S)` or `(I + S)` inversion, so fully reflecting ports stay invertible.
pub const SINGULARITY_EPS: f64 = 1e-12;

/// Reference impedance used when none is given (ohms).
pub const DEFAULT_Z0: f64 = 50.0;

/// Default tolerance for property checks (passivity, reciprocity, etc).
/// This is the tolerance used when None is passed to property check functions.
pub const PROPERTY_TOL: f64 = 1e-12;

/// Smallest number of frequency points for which per-frequency loops are
/// spread over the rayon thread pool. Below this the sequential loop wins.
pub const PARALLEL_MIN_FREQS: usize = 256;
