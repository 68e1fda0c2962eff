//! Manifold trait compliance test helpers.
//!
//! These functions verify that a Manifold implementation satisfies the
//! invariants motion validators rely on. Reused across all backend test
//! modules (Interval, Circle, RealVectorSpace, ProductManifold).

use stride_core::{Manifold, State};

const TOL: f64 = 1e-9;

/// Assert that `distance(a, a) == 0.0` and `equal_states(a, a)` for all samples.
pub fn assert_distance_reflexive(m: &dyn Manifold, states: &[State]) {
    for s in states {
        let d = m.distance(s, s);
        assert!(d.abs() < f64::EPSILON, "distance({s:?}, {s:?}) = {d}, expected 0.0");
        assert!(m.equal_states(s, s), "equal_states({s:?}, {s:?}) is false");
    }
}

/// Assert that `distance(a, b) == distance(b, a)` for all sample pairs.
pub fn assert_distance_symmetric(m: &dyn Manifold, states: &[State]) {
    for a in states {
        for b in states {
            let dab = m.distance(a, b);
            let dba = m.distance(b, a);
            assert!(
                (dab - dba).abs() < TOL,
                "distance({a:?}, {b:?}) = {dab} != distance({b:?}, {a:?}) = {dba}"
            );
        }
    }
}

/// Assert triangle inequality: `d(a, c) <= d(a, b) + d(b, c)` for all triples.
pub fn assert_distance_triangle_inequality(m: &dyn Manifold, states: &[State]) {
    for a in states {
        for b in states {
            for c in states {
                let dac = m.distance(a, c);
                let dab = m.distance(a, b);
                let dbc = m.distance(b, c);
                assert!(
                    dac <= dab + dbc + TOL,
                    "triangle inequality violated: d({a:?},{c:?})={dac} > d({a:?},{b:?})={dab} + d({b:?},{c:?})={dbc}"
                );
            }
        }
    }
}

/// Assert that `distance_as_fraction` lies in `[0, 1]` for all in-bounds pairs.
pub fn assert_fraction_in_unit_range(m: &dyn Manifold, states: &[State]) {
    for a in states {
        for b in states {
            let f = m.distance_as_fraction(a, b);
            assert!(
                (0.0..=1.0 + TOL).contains(&f),
                "distance_as_fraction({a:?}, {b:?}) = {f} outside [0, 1]"
            );
        }
    }
}

/// Assert that interpolation at `t = 0` and `t = 1` reproduces the endpoints.
pub fn assert_interpolation_endpoints(m: &dyn Manifold, states: &[State]) {
    let mut out = m.alloc_state();
    for a in states {
        for b in states {
            m.interpolate(a, b, 0.0, &mut out);
            assert!(
                m.distance(&out, a) < TOL,
                "interpolate({a:?}, {b:?}, 0) = {out:?}, expected {a:?}"
            );
            m.interpolate(a, b, 1.0, &mut out);
            assert!(
                m.distance(&out, b) < TOL,
                "interpolate({a:?}, {b:?}, 1) = {out:?}, expected {b:?}"
            );
        }
    }
}

/// Assert that interpolated points split the distance proportionally.
pub fn assert_interpolation_proportional(m: &dyn Manifold, states: &[State]) {
    let mut out = m.alloc_state();
    for a in states {
        for b in states {
            let total = m.distance(a, b);
            for &t in &[0.25, 0.5, 0.75] {
                m.interpolate(a, b, t, &mut out);
                let travelled = m.distance(a, &out);
                assert!(
                    (travelled - t * total).abs() < 1e-6,
                    "interpolate({a:?}, {b:?}, {t}) travelled {travelled}, expected {}",
                    t * total
                );
                assert!(
                    m.satisfies_bounds(&out),
                    "interpolate({a:?}, {b:?}, {t}) = {out:?} left the bounds"
                );
            }
        }
    }
}

/// Assert that `alloc_state` yields `dimension()` components.
pub fn assert_alloc_matches_dimension(m: &dyn Manifold) {
    let s = m.alloc_state();
    assert_eq!(
        s.len(),
        m.dimension(),
        "alloc_state().len() ({}) != dimension ({})",
        s.len(),
        m.dimension()
    );
}

/// Run all compliance checks on a manifold over a sample of in-bounds states.
pub fn run_full_compliance(m: &dyn Manifold, states: &[State]) {
    for s in states {
        assert!(m.satisfies_bounds(s), "sample {s:?} is out of bounds");
    }
    assert_alloc_matches_dimension(m);
    assert_distance_reflexive(m, states);
    assert_distance_symmetric(m, states);
    assert_distance_triangle_inequality(m, states);
    assert_fraction_in_unit_range(m, states);
    assert_interpolation_endpoints(m, states);
    assert_interpolation_proportional(m, states);
}
