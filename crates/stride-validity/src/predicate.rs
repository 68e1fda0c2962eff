//! Closure-backed admissibility oracle.

use std::fmt;
use std::sync::Arc;
use stride_core::{AdmissibilityOracle, Manifold, ManifoldInstanceId, State};

/// An oracle that accepts in-bounds states satisfying a predicate.
///
/// States are allocated through the wrapped manifold. A state outside
/// the manifold's bounds is inadmissible regardless of the predicate.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use stride_core::{AdmissibilityOracle, State};
/// use stride_space::Interval;
/// use stride_validity::PredicateOracle;
///
/// let line = Arc::new(Interval::new(0.0, 10.0).unwrap());
/// let oracle = PredicateOracle::new(line, |s: &State| !(4.0..=6.0).contains(&s[0]));
///
/// assert!(oracle.is_admissible(&vec![3.9].into()));
/// assert!(!oracle.is_admissible(&vec![5.0].into()));
/// assert!(!oracle.is_admissible(&vec![11.0].into()));
/// ```
pub struct PredicateOracle<F> {
    manifold: Arc<dyn Manifold>,
    predicate: F,
}

impl<F> PredicateOracle<F>
where
    F: Fn(&State) -> bool + Send + Sync,
{
    /// Wrap `predicate` over `manifold`.
    pub fn new(manifold: Arc<dyn Manifold>, predicate: F) -> Self {
        Self {
            manifold,
            predicate,
        }
    }

    /// The manifold states are allocated from.
    pub fn manifold(&self) -> &Arc<dyn Manifold> {
        &self.manifold
    }
}

impl<F> fmt::Debug for PredicateOracle<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateOracle")
            .field("manifold", &self.manifold.instance_id())
            .finish_non_exhaustive()
    }
}

impl<F> AdmissibilityOracle for PredicateOracle<F>
where
    F: Fn(&State) -> bool + Send + Sync,
{
    fn is_admissible(&self, state: &State) -> bool {
        self.manifold.satisfies_bounds(state) && (self.predicate)(state)
    }

    fn alloc_state(&self) -> State {
        self.manifold.alloc_state()
    }

    fn manifold_id(&self) -> Option<ManifoldInstanceId> {
        Some(self.manifold.instance_id())
    }
}
