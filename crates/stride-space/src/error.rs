//! Error types for manifold construction.

use std::error::Error;
use std::fmt;

/// Errors arising from manifold construction.
#[derive(Clone, Debug, PartialEq)]
pub enum ManifoldError {
    /// A manifold was requested with zero dimensions.
    ZeroDimension,
    /// Lower and upper bound vectors have different lengths.
    BoundsLengthMismatch {
        /// Length of the lower bound vector.
        low: usize,
        /// Length of the upper bound vector.
        high: usize,
    },
    /// A bound pair is not finite or has `low >= high`.
    InvalidBounds {
        /// Axis index of the offending pair.
        axis: usize,
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
    },
    /// A compound manifold could not be assembled.
    InvalidComposition {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for ManifoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "manifold must have at least one dimension"),
            Self::BoundsLengthMismatch { low, high } => {
                write!(f, "bounds length mismatch: low has {low}, high has {high}")
            }
            Self::InvalidBounds { axis, low, high } => write!(
                f,
                "invalid bounds on axis {axis}: [{low}, {high}] must be finite with low < high"
            ),
            Self::InvalidComposition { reason } => {
                write!(f, "invalid composition: {reason}")
            }
        }
    }
}

impl Error for ManifoldError {}
