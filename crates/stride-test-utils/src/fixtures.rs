//! Reusable validation scenarios.
//!
//! - [`corridor`]: the 1D interval `[0, 10]` with the closed band `[4, 6]` forbidden.
//! - [`wall_world`]: a 10×10 plane split by a wall with a gap at the top.
//! - [`random_state`]: deterministic uniform sampling inside per-axis bounds.

use std::sync::Arc;

use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stride_core::{Manifold, State};
use stride_space::{Interval, RealVectorSpace};
use stride_validity::BoxObstacleOracle;

/// Length of the corridor interval.
pub const CORRIDOR_LEN: f64 = 10.0;

/// Closed forbidden band inside the corridor.
pub const CORRIDOR_BAND: (f64, f64) = (4.0, 6.0);

/// The corridor's box oracle over an arbitrary one-dimensional manifold.
pub fn corridor_oracle(manifold: Arc<dyn Manifold>) -> BoxObstacleOracle {
    let mut oracle = BoxObstacleOracle::new(manifold);
    oracle
        .add_box(
            State::from_slice(&[CORRIDOR_BAND.0]),
            State::from_slice(&[CORRIDOR_BAND.1]),
        )
        .expect("corridor band is a valid 1D box");
    oracle
}

/// The interval `[0, 10]` and an oracle forbidding `[4, 6]`.
pub fn corridor() -> (Arc<Interval>, Arc<BoxObstacleOracle>) {
    let line = Arc::new(Interval::new(0.0, CORRIDOR_LEN).expect("valid interval"));
    let oracle = Arc::new(corridor_oracle(line.clone()));
    (line, oracle)
}

/// A 10×10 plane with a wall `x ∈ [4.5, 5.5], y ∈ [0, 8]`.
///
/// Motions crossing `x = 5` below `y = 8` are inadmissible; the strip
/// `y > 8` is a free gap.
pub fn wall_world() -> (Arc<RealVectorSpace>, Arc<BoxObstacleOracle>) {
    let plane =
        Arc::new(RealVectorSpace::new(&[0.0, 0.0], &[10.0, 10.0]).expect("valid plane"));
    let mut oracle = BoxObstacleOracle::new(plane.clone());
    oracle
        .add_box(State::from_slice(&[4.5, 0.0]), State::from_slice(&[5.5, 8.0]))
        .expect("wall is a valid 2D box");
    (plane, Arc::new(oracle))
}

/// Deterministic RNG for reproducible sampling.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Sample a state uniformly inside `bounds`, one `(low, high)` pair per axis.
pub fn random_state(rng: &mut ChaCha8Rng, bounds: &[(f64, f64)]) -> State {
    bounds
        .iter()
        .map(|&(lo, hi)| rng.random_range(lo..=hi))
        .collect()
}
