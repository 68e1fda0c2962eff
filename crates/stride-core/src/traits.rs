//! The capability traits a motion validator is written against.

use crate::id::{ManifoldInstanceId, State};
use smallvec::smallvec;
use std::any::Any;

/// Metric and interpolation structure over a configuration space.
///
/// Motion validators never inspect [`State`] components directly; every
/// comparison and every intermediate point goes through this trait, so a
/// validator works unchanged over intervals, angles, boxes, and compounds.
///
/// # Thread Safety
///
/// `Send + Sync` is required because validators are shared across planner
/// threads behind an `Arc<dyn Manifold>`. All methods take `&self`.
pub trait Manifold: Any + Send + Sync + 'static {
    /// Number of components in a state of this manifold.
    fn dimension(&self) -> usize;

    /// Largest distance that can separate two in-bounds states.
    ///
    /// Always finite and strictly positive for a bounded manifold.
    fn maximum_extent(&self) -> f64;

    /// Distance between two states. Non-negative and symmetric.
    fn distance(&self, a: &State, b: &State) -> f64;

    /// Distance normalised by [`maximum_extent`](Self::maximum_extent).
    ///
    /// Lies in `[0, 1]` for in-bounds states and is `0` exactly when
    /// [`equal_states`](Self::equal_states) holds.
    fn distance_as_fraction(&self, a: &State, b: &State) -> f64 {
        self.distance(a, b) / self.maximum_extent()
    }

    /// Write the state at parameter `t ∈ [0, 1]` along the canonical
    /// curve from `from` to `to` into `out`.
    ///
    /// `t = 0` yields `from` and `t = 1` yields `to`. `out` may hold any
    /// previous contents; implementations resize it as needed.
    fn interpolate(&self, from: &State, to: &State, t: f64, out: &mut State);

    /// Allocate a zero-initialised state with [`dimension`](Self::dimension) components.
    fn alloc_state(&self) -> State {
        smallvec![0.0; self.dimension()]
    }

    /// Returns `true` if every component of `state` is inside the bounds.
    fn satisfies_bounds(&self, state: &State) -> bool;

    /// Bring `state` back inside the bounds (clamp or wrap, per backend).
    fn enforce_bounds(&self, state: &mut State);

    /// Returns `true` if the two states are the same point of this manifold.
    ///
    /// Default implementation compares the distance against exactly zero.
    fn equal_states(&self, a: &State, b: &State) -> bool {
        self.distance(a, b) == 0.0
    }

    /// Unique instance identifier for this manifold object.
    fn instance_id(&self) -> ManifoldInstanceId;
}

impl dyn Manifold {
    /// Attempt to downcast a trait object to a concrete manifold type.
    pub fn downcast_ref<T: Manifold>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}

/// Point-wise admissibility test plus scratch-state ownership.
///
/// This is the only way a validator learns whether a configuration is
/// acceptable. The oracle also owns state allocation so that oracles
/// backed by pools or foreign memory can hand out and reclaim scratch
/// states on their own terms.
///
/// Implementations must be safe for concurrent `is_admissible` calls and
/// independent allocations; validators are shared across threads.
pub trait AdmissibilityOracle: Send + Sync {
    /// Returns `true` if `state` is an admissible configuration.
    fn is_admissible(&self, state: &State) -> bool;

    /// Allocate a fresh state owned by the caller.
    fn alloc_state(&self) -> State;

    /// Return a state previously obtained from [`alloc_state`](Self::alloc_state).
    ///
    /// The default implementation simply drops it.
    fn release_state(&self, state: State) {
        drop(state);
    }

    /// Instance ID of the manifold this oracle allocates states for, if any.
    ///
    /// Validators compare it against their own manifold to catch a
    /// mismatched pairing at construction time.
    fn manifold_id(&self) -> Option<ManifoldInstanceId> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Segment {
        id: ManifoldInstanceId,
    }

    impl Manifold for Segment {
        fn dimension(&self) -> usize {
            1
        }
        fn maximum_extent(&self) -> f64 {
            4.0
        }
        fn distance(&self, a: &State, b: &State) -> f64 {
            (a[0] - b[0]).abs()
        }
        fn interpolate(&self, from: &State, to: &State, t: f64, out: &mut State) {
            out.clear();
            out.push(from[0] + (to[0] - from[0]) * t);
        }
        fn satisfies_bounds(&self, state: &State) -> bool {
            (0.0..=4.0).contains(&state[0])
        }
        fn enforce_bounds(&self, state: &mut State) {
            state[0] = state[0].clamp(0.0, 4.0);
        }
        fn instance_id(&self) -> ManifoldInstanceId {
            self.id
        }
    }

    fn seg() -> Segment {
        Segment {
            id: ManifoldInstanceId::next(),
        }
    }

    #[test]
    fn default_distance_as_fraction_normalises() {
        let m = seg();
        let a: State = smallvec![0.0];
        let b: State = smallvec![3.0];
        assert_eq!(m.distance_as_fraction(&a, &b), 0.75);
    }

    #[test]
    fn default_alloc_state_matches_dimension() {
        let m = seg();
        let s = Manifold::alloc_state(&m);
        assert_eq!(s.as_slice(), &[0.0]);
    }

    #[test]
    fn default_equal_states_uses_distance() {
        let m = seg();
        let a: State = smallvec![1.0];
        let b: State = smallvec![1.0];
        let c: State = smallvec![1.5];
        assert!(m.equal_states(&a, &b));
        assert!(!m.equal_states(&a, &c));
    }

    #[test]
    fn downcast_dyn_manifold() {
        let boxed: Box<dyn Manifold> = Box::new(seg());
        assert!(boxed.downcast_ref::<Segment>().is_some());
    }

    #[test]
    fn default_release_state_accepts_any_state() {
        struct Always;
        impl AdmissibilityOracle for Always {
            fn is_admissible(&self, _: &State) -> bool {
                true
            }
            fn alloc_state(&self) -> State {
                smallvec![0.0]
            }
        }
        let o = Always;
        let s = o.alloc_state();
        o.release_state(s);
        assert_eq!(o.manifold_id(), None);
    }
}
