//! Error types for shape normalization and parameter conversion.

use thiserror::Error;

use crate::math::transforms::ParamKind;

/// Errors raised by the network parameter core.
///
/// Every failure is local and final: conversions either succeed for all
/// frequency points or return one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// Impedance or parameter input cannot be broadcast to the required shape.
    #[error("Shape error: {0}")]
    Shape(String),

    /// Operation needs a specific port count.
    #[error("{operation} requires a {expected}-port network, got {actual} ports")]
    Dimension {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Reciprocal of zero or inversion of a singular matrix.
    #[error("Domain error: {0}")]
    Domain(String),

    /// Conversion pair that is deliberately not provided.
    #[error("{from}->{to} conversion is not implemented, convert through S instead")]
    UnsupportedConversion { from: ParamKind, to: ParamKind },
}

impl NetworkError {
    pub(crate) fn shape(msg: impl Into<String>) -> Self {
        NetworkError::Shape(msg.into())
    }

    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        NetworkError::Domain(msg.into())
    }
}

/// Result type for network parameter operations.
pub type NetworkResult<T> = Result<T, NetworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_message() {
        let err = NetworkError::Dimension {
            operation: "s2t",
            expected: 2,
            actual: 3,
        };
        assert_eq!(err.to_string(), "s2t requires a 2-port network, got 3 ports");
    }

    #[test]
    fn test_unsupported_message() {
        let err = NetworkError::UnsupportedConversion {
            from: ParamKind::Z,
            to: ParamKind::T,
        };
        assert_eq!(
            err.to_string(),
            "z->t conversion is not implemented, convert through S instead"
        );
    }
}
