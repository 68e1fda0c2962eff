//! Error types for oracle construction.

use std::error::Error;
use std::fmt;

/// Errors arising when registering obstacles with an oracle.
#[derive(Clone, Debug, PartialEq)]
pub enum ObstacleError {
    /// An obstacle corner does not have the manifold's dimension.
    DimensionMismatch {
        /// The manifold's dimension.
        expected: usize,
        /// The corner's component count.
        got: usize,
    },
    /// An obstacle has `min > max` (or a NaN) on some axis.
    InvertedBox {
        /// Axis index of the offending pair.
        axis: usize,
    },
}

impl fmt::Display for ObstacleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, got } => {
                write!(f, "obstacle has {got} components, manifold has {expected}")
            }
            Self::InvertedBox { axis } => write!(f, "obstacle min > max on axis {axis}"),
        }
    }
}

impl Error for ObstacleError {}
