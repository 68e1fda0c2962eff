//! The `MotionValidator` trait and the last-valid output slot.

use crate::stats::MotionStats;
use stride_core::State;

/// Where a rejected motion stopped being known-admissible.
///
/// Owned by the caller and filled in by
/// [`check_motion_with_last_valid`](MotionValidator::check_motion_with_last_valid)
/// when a motion is rejected. `fraction` is the position of the last
/// admissible probe along the motion, in `[0, 1)`. If `state` is `Some`,
/// the point at that fraction is written into it.
///
/// On an accepted motion neither field is touched.
#[derive(Debug)]
pub struct LastValid<'a> {
    /// Optional destination for the last admissible point.
    pub state: Option<&'a mut State>,
    /// Path fraction of the last admissible point.
    pub fraction: f64,
}

impl<'a> LastValid<'a> {
    /// Request only the fraction.
    pub fn fraction_only() -> Self {
        Self {
            state: None,
            fraction: 0.0,
        }
    }

    /// Request both the fraction and the point, written into `state`.
    pub fn with_state(state: &'a mut State) -> Self {
        Self {
            state: Some(state),
            fraction: 0.0,
        }
    }
}

impl Default for LastValid<'_> {
    fn default() -> Self {
        Self::fraction_only()
    }
}

/// Decides whether the motion between two states is admissible.
///
/// The start state is assumed admissible and is never re-checked; the
/// goal state always is. Rejection is an ordinary `false`, never an error.
///
/// # Thread Safety
///
/// `Send + Sync` so planners can share one validator across worker
/// threads. Checks take `&self`.
pub trait MotionValidator: Send + Sync {
    /// Check the motion from `a` to `b`.
    fn check_motion(&self, a: &State, b: &State) -> bool;

    /// Check the motion from `a` to `b`, reporting where it stopped being
    /// admissible if it is rejected.
    fn check_motion_with_last_valid(
        &self,
        a: &State,
        b: &State,
        last_valid: &mut LastValid<'_>,
    ) -> bool;

    /// Outcome counters for this validator.
    fn stats(&self) -> &MotionStats;

    /// Number of motions found admissible so far.
    fn valid_motion_count(&self) -> u64 {
        self.stats().valid()
    }

    /// Number of motions found inadmissible so far.
    fn invalid_motion_count(&self) -> u64 {
        self.stats().invalid()
    }

    /// Fraction of checked motions that were admissible.
    fn checked_motion_fraction(&self) -> f64 {
        self.stats().valid_fraction()
    }

    /// Zero the outcome counters.
    fn reset_motion_counts(&self) {
        self.stats().reset();
    }
}
