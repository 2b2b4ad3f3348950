//! Network module - N-port electrical network representation
//!
//! Provides the Network struct, lazily derived parameter views and their
//! scalar projections.

mod core;
mod params;
mod projection;
mod properties;

pub use self::core::Network;
pub use params::ParameterView;
pub use projection::{ProjectionKind, ScalarProjection};
