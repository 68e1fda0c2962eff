//! Validator configuration and the named-parameter surface.
//!
//! [`ValidatorConfig`] holds the single tunable of a discrete validator,
//! the probe spacing. Every value is range-checked when it is *set*; a
//! rejected value leaves the previous one in effect, so the checks
//! themselves never see an invalid configuration.

use indexmap::IndexMap;
use stride_core::ConfigError;

/// Name under which the resolution is exposed through [`ValidatorConfig::set_param`].
pub const RESOLUTION_PARAM: &str = "resolution";

/// Default probe spacing: one percent of the manifold's maximum extent.
pub const DEFAULT_RESOLUTION: f64 = 0.01;

/// Configuration for [`DiscreteMotionValidator`](crate::DiscreteMotionValidator).
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatorConfig {
    /// Spacing between probes as a fraction of the manifold's maximum
    /// extent. Must lie strictly inside `(f64::EPSILON, 1 - f64::EPSILON)`.
    /// Default: 0.01.
    pub resolution: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl ValidatorConfig {
    /// Check all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_resolution(self.resolution).map(|_| ())
    }

    /// Replace the resolution after range-checking the incoming value.
    ///
    /// On error the current resolution is unchanged.
    pub fn set_resolution(&mut self, value: f64) -> Result<(), ConfigError> {
        self.resolution = check_resolution(value)?;
        Ok(())
    }

    /// Set a parameter by name from its textual value.
    ///
    /// Recognised names: `"resolution"`. Unknown names and unparsable
    /// values are rejected without touching the configuration.
    pub fn set_param(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        match name {
            RESOLUTION_PARAM => {
                let parsed: f64 =
                    value
                        .trim()
                        .parse()
                        .map_err(|_| ConfigError::InvalidParameterValue {
                            name: name.to_string(),
                            value: value.to_string(),
                        })?;
                self.set_resolution(parsed)
            }
            _ => Err(ConfigError::UnknownParameter {
                name: name.to_string(),
            }),
        }
    }

    /// All parameters with their current textual values, in declaration order.
    pub fn params(&self) -> IndexMap<&'static str, String> {
        let mut out = IndexMap::new();
        out.insert(RESOLUTION_PARAM, self.resolution.to_string());
        out
    }
}

/// Range-check a candidate resolution, returning it unchanged when valid.
///
/// The comparison is written so that NaN fails it.
pub fn check_resolution(value: f64) -> Result<f64, ConfigError> {
    if value > f64::EPSILON && value < 1.0 - f64::EPSILON {
        Ok(value)
    } else {
        Err(ConfigError::ResolutionOutOfRange { value })
    }
}
