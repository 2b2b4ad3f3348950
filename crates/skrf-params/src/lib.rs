//! skrf-params: multi-port network parameters
//!
//! Scattering (S), impedance (Z), admittance (Y) and transfer (T) parameters
//! of linear N-port networks, and conversion between them.
//!
//! ## Modules
//!
//! - `math` - Shape normalization, parameter transforms, scalar conversions
//! - `network` - N-port network, parameter views and scalar projections
//! - `frequency` - Frequency-length provider trait
//! - `error` - Error type shared by every fallible operation
//!
//! ## Example
//!
//! ```
//! use skrf_params::{Network, ParamKind};
//!
//! // One-port, three frequency points, 50 ohm reference
//! let ntwk = Network::new(3usize, vec![0.0, 0.5, -0.5], 50.0).unwrap();
//! let z = ntwk.z();
//! assert!((z.get([1, 0, 0]).unwrap().re - 150.0).abs() < 1e-9);
//!
//! let s11_db = ntwk.s().db().port(0, 0).unwrap();
//! assert_eq!(s11_db.len(), 3);
//!
//! assert!(ntwk.convert(ParamKind::Z, ParamKind::T).is_err());
//! ```

pub mod constants;
pub mod error;
pub mod frequency;
pub mod math;
pub mod network;

pub use error::{NetworkError, NetworkResult};
pub use frequency::FrequencyPoints;
pub use math::shape::{ParamInput, PortImpedance};
pub use math::transforms::ParamKind;
pub use network::{Network, ParameterView, ProjectionKind, ScalarProjection};
