//! Strongly-typed identifiers and the [`State`] type alias.

use smallvec::SmallVec;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A point in a configuration space.
///
/// Components are interpreted only by the owning [`Manifold`](crate::Manifold).
/// Uses `SmallVec<[f64; 4]>` so that states of up to four components
/// (intervals, planar poses, SE(2) with a joint) live on the stack.
pub type State = SmallVec<[f64; 4]>;

/// Counter for unique [`ManifoldInstanceId`] allocation.
static MANIFOLD_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a `Manifold` object.
///
/// Allocated from a monotonic atomic counter via [`ManifoldInstanceId::next`].
/// Two distinct manifold instances always have different IDs, even if
/// they have identical bounds. Oracles built over a manifold record its
/// ID so that a validator can detect being wired to a mismatched pair.
///
/// Cloning a manifold preserves its instance ID, which is correct because
/// immutable manifolds with the same ID have the same geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ManifoldInstanceId(u64);

impl ManifoldInstanceId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(MANIFOLD_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ManifoldInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_ids_are_unique() {
        let a = ManifoldInstanceId::next();
        let b = ManifoldInstanceId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn instance_ids_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..100).map(|_| ManifoldInstanceId::next()).collect::<Vec<_>>()))
            .collect();
        let mut all: Vec<ManifoldInstanceId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let before = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), before);
    }

    #[test]
    fn small_states_stay_inline() {
        let s: State = smallvec::smallvec![1.0, 2.0, 3.0];
        assert!(!s.spilled());
        assert_eq!(s.len(), 3);
    }
}
