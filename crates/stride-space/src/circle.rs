//! SO(2): planar rotation angle with periodic boundary.

use stride_core::{Manifold, ManifoldInstanceId, State};
use std::f64::consts::PI;

/// The circle of planar rotations, represented as an angle in `[-π, π)`.
///
/// Distance is the length of the shorter arc, so the maximum extent is `π`.
/// Interpolation follows the shorter arc and wraps across the `±π` seam.
///
/// # Examples
///
/// ```
/// use stride_core::{Manifold, State};
/// use stride_space::Circle;
/// use std::f64::consts::PI;
///
/// let so2 = Circle::new();
/// let a: State = vec![PI - 0.1].into();
/// let b: State = vec![-PI + 0.1].into();
///
/// // The short way round crosses the seam.
/// assert!((so2.distance(&a, &b) - 0.2).abs() < 1e-12);
///
/// let mut mid = so2.alloc_state();
/// so2.interpolate(&a, &b, 0.5, &mut mid);
/// assert!((mid[0].abs() - PI).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Circle {
    instance_id: ManifoldInstanceId,
}

impl Circle {
    /// Create a new SO(2) manifold.
    pub fn new() -> Self {
        Self {
            instance_id: ManifoldInstanceId::next(),
        }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap an angle into `[-π, π)`.
fn normalize_angle(v: f64) -> f64 {
    let v = v % (2.0 * PI);
    if v < -PI {
        v + 2.0 * PI
    } else if v >= PI {
        v - 2.0 * PI
    } else {
        v
    }
}

impl Manifold for Circle {
    fn dimension(&self) -> usize {
        1
    }

    fn maximum_extent(&self) -> f64 {
        PI
    }

    fn distance(&self, a: &State, b: &State) -> f64 {
        let d = (a[0] - b[0]).abs();
        if d > PI {
            2.0 * PI - d
        } else {
            d
        }
    }

    fn interpolate(&self, from: &State, to: &State, t: f64, out: &mut State) {
        let diff = to[0] - from[0];
        let v = if diff.abs() <= PI {
            from[0] + diff * t
        } else {
            // Go the other way round, through the seam.
            let around = if diff > 0.0 {
                2.0 * PI - diff
            } else {
                -2.0 * PI - diff
            };
            normalize_angle(from[0] - around * t)
        };
        out.clear();
        out.push(v);
    }

    fn satisfies_bounds(&self, state: &State) -> bool {
        state.len() == 1 && state[0] >= -PI && state[0] <= PI
    }

    fn enforce_bounds(&self, state: &mut State) {
        state[0] = normalize_angle(state[0]);
    }

    fn instance_id(&self) -> ManifoldInstanceId {
        self.instance_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;
    use smallvec::smallvec;

    fn s(x: f64) -> State {
        smallvec![x]
    }

    #[test]
    fn distance_takes_shorter_arc() {
        let so2 = Circle::new();
        assert!((so2.distance(&s(-3.0), &s(3.0)) - (2.0 * PI - 6.0)).abs() < 1e-12);
        assert_eq!(so2.distance(&s(-1.0), &s(1.0)), 2.0);
        assert!((so2.distance_as_fraction(&s(0.0), &s(PI)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn interpolate_without_wrap() {
        let so2 = Circle::new();
        let mut out = so2.alloc_state();
        so2.interpolate(&s(-1.0), &s(1.0), 0.25, &mut out);
        assert!((out[0] + 0.5).abs() < 1e-12);
    }

    #[test]
    fn interpolate_across_seam_stays_normalised() {
        let so2 = Circle::new();
        let a = s(3.0);
        let b = s(-3.0);
        let mut out = so2.alloc_state();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            so2.interpolate(&a, &b, t, &mut out);
            assert!(so2.satisfies_bounds(&out), "t={t} gave {out:?}");
            // Never passes through zero on the short way round.
            assert!(out[0].abs() >= 3.0 - 1e-12, "t={t} gave {out:?}");
        }
    }

    #[test]
    fn enforce_bounds_wraps() {
        let so2 = Circle::new();
        let mut st = s(3.0 * PI / 2.0);
        so2.enforce_bounds(&mut st);
        assert!((st[0] + PI / 2.0).abs() < 1e-12);

        let mut st = s(PI);
        so2.enforce_bounds(&mut st);
        assert!((st[0] + PI).abs() < 1e-12);
    }

    #[test]
    fn compliance_samples() {
        let so2 = Circle::new();
        let states: Vec<State> = [-PI, -3.0, -1.5, 0.0, 0.7, 2.9, 3.1]
            .iter()
            .map(|&x| s(x))
            .collect();
        compliance::run_full_compliance(&so2, &states);
    }

    proptest! {
        #[test]
        fn distance_never_exceeds_extent(a in -PI..PI, b in -PI..PI) {
            let so2 = Circle::new();
            let d = so2.distance(&s(a), &s(b));
            prop_assert!(d >= 0.0);
            prop_assert!(d <= PI + 1e-12);
        }

        #[test]
        fn normalize_angle_in_range(v in -100.0f64..100.0) {
            let n = normalize_angle(v);
            prop_assert!((-PI..PI).contains(&n));
        }
    }
}
