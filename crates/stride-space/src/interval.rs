//! Bounded one-dimensional interval.

use crate::error::ManifoldError;
use stride_core::{Manifold, ManifoldInstanceId, State};

/// A closed interval `[low, high]` of the real line.
///
/// States have a single component. Distance is `|a - b|`, the maximum
/// extent is `high - low`, and interpolation is linear.
///
/// # Examples
///
/// ```
/// use stride_core::{Manifold, State};
/// use stride_space::Interval;
///
/// let line = Interval::new(0.0, 10.0).unwrap();
/// assert_eq!(line.maximum_extent(), 10.0);
///
/// let a: State = vec![0.0].into();
/// let b: State = vec![10.0].into();
/// assert_eq!(line.distance_as_fraction(&a, &b), 1.0);
///
/// let mut mid = line.alloc_state();
/// line.interpolate(&a, &b, 0.35, &mut mid);
/// assert!((mid[0] - 3.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Interval {
    low: f64,
    high: f64,
    instance_id: ManifoldInstanceId,
}

impl Interval {
    /// Create an interval from `low` to `high`.
    ///
    /// Returns `Err(ManifoldError::InvalidBounds)` unless both bounds are
    /// finite and `low < high`.
    pub fn new(low: f64, high: f64) -> Result<Self, ManifoldError> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(ManifoldError::InvalidBounds { axis: 0, low, high });
        }
        Ok(Self {
            low,
            high,
            instance_id: ManifoldInstanceId::next(),
        })
    }

    /// Lower bound.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound.
    pub fn high(&self) -> f64 {
        self.high
    }
}

impl Manifold for Interval {
    fn dimension(&self) -> usize {
        1
    }

    fn maximum_extent(&self) -> f64 {
        self.high - self.low
    }

    fn distance(&self, a: &State, b: &State) -> f64 {
        (a[0] - b[0]).abs()
    }

    fn interpolate(&self, from: &State, to: &State, t: f64, out: &mut State) {
        out.clear();
        out.push(from[0] + (to[0] - from[0]) * t);
    }

    fn satisfies_bounds(&self, state: &State) -> bool {
        state.len() == 1 && state[0] >= self.low && state[0] <= self.high
    }

    fn enforce_bounds(&self, state: &mut State) {
        state[0] = state[0].clamp(self.low, self.high);
    }

    fn instance_id(&self) -> ManifoldInstanceId {
        self.instance_id
    }
}
