//! Error types for the Stride framework.
//!
//! Motion checks never fail: an inadmissible motion is an ordinary
//! `false`. The only error a validator raises is a rejected
//! configuration value.

use std::error::Error;
use std::fmt;

/// Errors raised when a validator configuration value is rejected.
///
/// The previously active configuration is always left in effect.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The resolution is not strictly inside `(f64::EPSILON, 1 - f64::EPSILON)`.
    ResolutionOutOfRange {
        /// The rejected value.
        value: f64,
    },
    /// A named parameter is not recognised by the component.
    UnknownParameter {
        /// The unrecognised name.
        name: String,
    },
    /// A named parameter's textual value could not be parsed.
    InvalidParameterValue {
        /// Parameter name.
        name: String,
        /// The text that failed to parse.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResolutionOutOfRange { value } => write!(
                f,
                "resolution must be larger than 0 and less than 1, got {value}"
            ),
            Self::UnknownParameter { name } => write!(f, "unknown parameter '{name}'"),
            Self::InvalidParameterValue { name, value } => {
                write!(f, "invalid value '{value}' for parameter '{name}'")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_error_mentions_value() {
        let err = ConfigError::ResolutionOutOfRange { value: 1.5 };
        let msg = format!("{err}");
        assert!(msg.contains("1.5"));
        assert!(msg.contains("resolution"));
    }

    #[test]
    fn parameter_errors_display() {
        let unknown = ConfigError::UnknownParameter {
            name: "range".to_string(),
        };
        assert_eq!(format!("{unknown}"), "unknown parameter 'range'");

        let invalid = ConfigError::InvalidParameterValue {
            name: "resolution".to_string(),
            value: "fine".to_string(),
        };
        assert!(format!("{invalid}").contains("'fine'"));
    }

    #[test]
    fn errors_are_std_errors() {
        fn takes_error(_: &dyn Error) {}
        takes_error(&ConfigError::ResolutionOutOfRange { value: 0.0 });
    }
}
