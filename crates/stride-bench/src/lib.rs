//! Benchmark profiles for the Stride motion validation crates.
//!
//! - [`cluttered_plane`]: a 10×10 plane with seeded random box obstacles
//! - [`reference_validator`]: a discrete validator over [`cluttered_plane`]
//! - [`motion_pairs`]: deterministic start/goal pairs with admissible starts

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;

use rand::Rng;
use stride_core::{AdmissibilityOracle, State};
use stride_motion::DiscreteMotionValidator;
use stride_space::RealVectorSpace;
use stride_test_utils::{random_state, seeded_rng};
use stride_validity::BoxObstacleOracle;

/// Per-axis bounds of the benchmark plane.
pub const PLANE: [(f64, f64); 2] = [(0.0, 10.0), (0.0, 10.0)];

/// A 10×10 plane with `n_boxes` axis-aligned obstacles.
///
/// Each box has sides between 0.2 and 1.0 and is placed from `seed`, so
/// the same arguments always build the same world.
pub fn cluttered_plane(n_boxes: usize, seed: u64) -> (Arc<RealVectorSpace>, Arc<BoxObstacleOracle>) {
    let plane = Arc::new(
        RealVectorSpace::new(&[PLANE[0].0, PLANE[1].0], &[PLANE[0].1, PLANE[1].1])
            .expect("benchmark plane bounds are valid"),
    );
    let mut oracle = BoxObstacleOracle::new(plane.clone());
    let mut rng = seeded_rng(seed);
    for _ in 0..n_boxes {
        let corner = random_state(&mut rng, &[(0.0, 9.0), (0.0, 9.0)]);
        let w = rng.random_range(0.2..1.0);
        let h = rng.random_range(0.2..1.0);
        let far = State::from_slice(&[corner[0] + w, corner[1] + h]);
        oracle
            .add_box(corner, far)
            .expect("generated boxes are 2D and not inverted");
    }
    (plane, Arc::new(oracle))
}

/// A discrete validator over [`cluttered_plane`] at the given resolution.
pub fn reference_validator(n_boxes: usize, seed: u64, resolution: f64) -> DiscreteMotionValidator {
    let (plane, oracle) = cluttered_plane(n_boxes, seed);
    let mut v = DiscreteMotionValidator::new(plane, oracle);
    v.set_resolution(resolution)
        .expect("benchmark resolution is in range");
    v
}

/// `n` deterministic motions whose start states are admissible under `oracle`.
pub fn motion_pairs(oracle: &dyn AdmissibilityOracle, n: usize, seed: u64) -> Vec<(State, State)> {
    let mut rng = seeded_rng(seed);
    let mut pairs = Vec::with_capacity(n);
    while pairs.len() < n {
        let a = random_state(&mut rng, &PLANE);
        let b = random_state(&mut rng, &PLANE);
        if oracle.is_admissible(&a) {
            pairs.push((a, b));
        }
    }
    pairs
}
