//! Discrete motion validation by point-wise probing.
//!
//! A motion from `a` to `b` is split into `nd = ceil(d / r)` equal segments,
//! where `d` is the manifold's `distance_as_fraction(a, b)` and `r` the
//! configured resolution. The interior probe indices are `1 ..= nd - 1`;
//! index `j` sits at parameter `j / nd`.
//!
//! Both strategies first test `b` directly and reject without any interior
//! probe if it is inadmissible. `a` is never tested.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use stride_core::{AdmissibilityOracle, ConfigError, Manifold, State};
use stride_validity::ScratchState;
use tracing::{debug, trace, warn};

use crate::config::ValidatorConfig;
use crate::stats::MotionStats;
use crate::validator::{LastValid, MotionValidator};

/// Validates motions by probing the admissibility oracle at a fixed spacing.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use stride_core::State;
/// use stride_motion::{DiscreteMotionValidator, LastValid, MotionValidator};
/// use stride_space::Interval;
/// use stride_validity::PredicateOracle;
///
/// let line = Arc::new(Interval::new(0.0, 10.0).unwrap());
/// let oracle = Arc::new(PredicateOracle::new(line.clone(), |s: &State| {
///     !(4.0..=6.0).contains(&s[0])
/// }));
/// let mut validator = DiscreteMotionValidator::new(line, oracle);
/// validator.set_resolution(0.05).unwrap();
///
/// let a: State = vec![0.0].into();
/// let b: State = vec![10.0].into();
/// assert!(!validator.check_motion(&a, &b));
///
/// let mut last = State::new();
/// let mut lv = LastValid::with_state(&mut last);
/// assert!(!validator.check_motion_with_last_valid(&a, &b, &mut lv));
/// assert!((lv.fraction - 0.35).abs() < 1e-12);
/// assert!((last[0] - 3.5).abs() < 1e-12);
/// ```
pub struct DiscreteMotionValidator {
    manifold: Arc<dyn Manifold>,
    oracle: Arc<dyn AdmissibilityOracle>,
    config: ValidatorConfig,
    stats: MotionStats,
}

impl DiscreteMotionValidator {
    /// Create a validator with the default configuration.
    pub fn new(manifold: Arc<dyn Manifold>, oracle: Arc<dyn AdmissibilityOracle>) -> Self {
        if let Some(id) = oracle.manifold_id() {
            if id != manifold.instance_id() {
                warn!(
                    oracle_manifold = %id,
                    validator_manifold = %manifold.instance_id(),
                    "admissibility oracle was built over a different manifold instance"
                );
            }
        }
        Self {
            manifold,
            oracle,
            config: ValidatorConfig::default(),
            stats: MotionStats::new(),
        }
    }

    /// Create a validator with an explicit configuration.
    ///
    /// Returns the configuration's validation error if it is invalid.
    pub fn with_config(
        manifold: Arc<dyn Manifold>,
        oracle: Arc<dyn AdmissibilityOracle>,
        config: ValidatorConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut v = Self::new(manifold, oracle);
        v.config = config;
        Ok(v)
    }

    /// Current probe spacing as a fraction of the manifold's maximum extent.
    pub fn resolution(&self) -> f64 {
        self.config.resolution
    }

    /// Replace the probe spacing.
    ///
    /// The incoming `value` is range-checked; on error the previous
    /// resolution stays in effect.
    pub fn set_resolution(&mut self, value: f64) -> Result<(), ConfigError> {
        let previous = self.config.resolution;
        self.config.set_resolution(value).inspect_err(|e| {
            warn!(value, previous, error = %e, "rejected resolution");
        })?;
        debug!(previous, resolution = value, "resolution changed");
        Ok(())
    }

    /// Set a parameter by name. See [`ValidatorConfig::set_param`].
    pub fn set_param(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let previous = self.config.resolution;
        self.config.set_param(name, value).inspect_err(|e| {
            warn!(name, value, error = %e, "rejected parameter");
        })?;
        debug!(name, value, previous, "parameter changed");
        Ok(())
    }

    /// All parameters with their current textual values.
    pub fn params(&self) -> IndexMap<&'static str, String> {
        self.config.params()
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The manifold motions are interpolated on.
    pub fn manifold(&self) -> &Arc<dyn Manifold> {
        &self.manifold
    }

    /// The oracle probes are tested against.
    pub fn oracle(&self) -> &Arc<dyn AdmissibilityOracle> {
        &self.oracle
    }

    /// Number of equal segments the motion from `a` to `b` is split into.
    ///
    /// Zero exactly when the manifold reports zero distance.
    pub fn discretization(&self, a: &State, b: &State) -> usize {
        (self.manifold.distance_as_fraction(a, b) / self.config.resolution).ceil() as usize
    }

    /// Breadth-first midpoint subdivision over the interior probe indices.
    fn check_subdivided(&self, a: &State, b: &State) -> bool {
        if !self.oracle.is_admissible(b) {
            trace!(strategy = "subdivide", "goal state inadmissible");
            return false;
        }
        let nd = self.discretization(a, b);
        if nd < 2 {
            return true;
        }

        let mut probe = ScratchState::acquire(&*self.oracle);
        let mut pending: VecDeque<(usize, usize)> = VecDeque::new();
        pending.push_back((1, nd - 1));
        let step = nd as f64;

        while let Some((lo, hi)) = pending.pop_front() {
            let mid = lo + (hi - lo) / 2;
            self.manifold.interpolate(a, b, mid as f64 / step, &mut probe);
            if !self.oracle.is_admissible(&probe) {
                trace!(strategy = "subdivide", index = mid, nd, "motion rejected");
                return false;
            }
            if lo < mid {
                pending.push_back((lo, mid - 1));
            }
            if hi > mid {
                pending.push_back((mid + 1, hi));
            }
        }
        true
    }

    /// Left-to-right scan over the interior probe indices.
    fn check_scanned(&self, a: &State, b: &State, last_valid: &mut LastValid<'_>) -> bool {
        if !self.oracle.is_admissible(b) {
            trace!(strategy = "scan", "goal state inadmissible");
            self.record_last_valid(a, b, 0.0, last_valid);
            return false;
        }
        let nd = self.discretization(a, b);
        if nd < 2 {
            return true;
        }

        let mut probe = ScratchState::acquire(&*self.oracle);
        let step = nd as f64;
        for j in 1..nd {
            self.manifold.interpolate(a, b, j as f64 / step, &mut probe);
            if !self.oracle.is_admissible(&probe) {
                trace!(strategy = "scan", index = j, nd, "motion rejected");
                self.record_last_valid(a, b, (j - 1) as f64 / step, last_valid);
                return false;
            }
        }
        true
    }

    fn record_last_valid(
        &self,
        a: &State,
        b: &State,
        fraction: f64,
        last_valid: &mut LastValid<'_>,
    ) {
        if let Some(dest) = last_valid.state.as_deref_mut() {
            self.manifold.interpolate(a, b, fraction, dest);
        }
        last_valid.fraction = fraction;
    }
}

impl MotionValidator for DiscreteMotionValidator {
    fn check_motion(&self, a: &State, b: &State) -> bool {
        self.stats.record(self.check_subdivided(a, b))
    }

    fn check_motion_with_last_valid(
        &self,
        a: &State,
        b: &State,
        last_valid: &mut LastValid<'_>,
    ) -> bool {
        self.stats.record(self.check_scanned(a, b, last_valid))
    }

    fn stats(&self) -> &MotionStats {
        &self.stats
    }
}

impl fmt::Debug for DiscreteMotionValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscreteMotionValidator")
            .field("manifold", &self.manifold.instance_id())
            .field("config", &self.config)
            .field("stats", &self.stats)
            .finish()
    }
}
