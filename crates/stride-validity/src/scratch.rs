//! Scoped scratch state borrowed from an admissibility oracle.
//!
//! [`ScratchState`] acquires one state through
//! [`AdmissibilityOracle::alloc_state`] when constructed and returns it
//! through [`AdmissibilityOracle::release_state`] when dropped. Early
//! returns, `break`s and unwinding all run the release, so callers never
//! write a release call at each exit.

use std::ops::{Deref, DerefMut};
use stride_core::{AdmissibilityOracle, State};

/// A state owned by the current scope and released to its oracle on drop.
///
/// Dereferences to [`State`], so it can be passed anywhere a `&State` or
/// `&mut State` is expected.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use stride_core::{Manifold, State};
/// use stride_space::Interval;
/// use stride_validity::{PredicateOracle, ScratchState};
///
/// let line = Arc::new(Interval::new(0.0, 10.0).unwrap());
/// let oracle = PredicateOracle::new(line.clone(), |s: &State| s[0] < 4.0);
///
/// let a = line.alloc_state();
/// let b: State = vec![8.0].into();
/// let mut probe = ScratchState::acquire(&oracle);
/// line.interpolate(&a, &b, 0.25, &mut probe);
/// assert_eq!(probe[0], 2.0);
/// // `probe` is released here.
/// ```
pub struct ScratchState<'a> {
    state: State,
    oracle: &'a dyn AdmissibilityOracle,
}

impl<'a> ScratchState<'a> {
    /// Acquire a fresh state from `oracle` for the lifetime of the guard.
    pub fn acquire(oracle: &'a dyn AdmissibilityOracle) -> Self {
        Self {
            state: oracle.alloc_state(),
            oracle,
        }
    }
}

impl Deref for ScratchState<'_> {
    type Target = State;

    fn deref(&self) -> &State {
        &self.state
    }
}

impl DerefMut for ScratchState<'_> {
    fn deref_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl Drop for ScratchState<'_> {
    fn drop(&mut self) {
        self.oracle.release_state(std::mem::take(&mut self.state));
    }
}
