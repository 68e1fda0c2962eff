//! Axis-aligned box obstacles over a manifold's coordinates.

use crate::error::ObstacleError;
use std::sync::Arc;
use stride_core::{AdmissibilityOracle, Manifold, ManifoldInstanceId, State};

/// A closed axis-aligned box `[min_0, max_0] × … × [min_{n-1}, max_{n-1}]`.
#[derive(Clone, Debug, PartialEq)]
pub struct AabbObstacle {
    /// Lower corner.
    pub min: State,
    /// Upper corner.
    pub max: State,
}

impl AabbObstacle {
    /// Returns `true` if `state` lies inside or on the boundary of the box.
    pub fn contains(&self, state: &State) -> bool {
        state
            .iter()
            .zip(self.min.iter().zip(self.max.iter()))
            .all(|(v, (lo, hi))| v >= lo && v <= hi)
    }
}

/// An oracle whose inadmissible set is a union of closed boxes.
///
/// A state is admissible when it satisfies the manifold's bounds and lies
/// outside every registered obstacle. Obstacles are tested in insertion
/// order and the first hit short-circuits.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use stride_core::{AdmissibilityOracle, State};
/// use stride_space::RealVectorSpace;
/// use stride_validity::BoxObstacleOracle;
///
/// let plane = Arc::new(RealVectorSpace::new(&[0.0, 0.0], &[10.0, 10.0]).unwrap());
/// let mut oracle = BoxObstacleOracle::new(plane);
/// oracle.add_box(vec![4.0, 0.0].into(), vec![6.0, 8.0].into()).unwrap();
///
/// assert!(oracle.is_admissible(&vec![5.0, 9.0].into()));
/// assert!(!oracle.is_admissible(&vec![5.0, 1.0].into()));
/// ```
#[derive(Clone)]
pub struct BoxObstacleOracle {
    manifold: Arc<dyn Manifold>,
    obstacles: Vec<AabbObstacle>,
}

impl BoxObstacleOracle {
    /// Create an oracle over `manifold` with no obstacles.
    pub fn new(manifold: Arc<dyn Manifold>) -> Self {
        Self {
            manifold,
            obstacles: Vec::new(),
        }
    }

    /// Register a forbidden box.
    ///
    /// Returns `Err(ObstacleError::DimensionMismatch)` if either corner's
    /// length differs from the manifold dimension, or
    /// `Err(ObstacleError::InvertedBox)` if `min > max` on any axis.
    pub fn add_box(&mut self, min: State, max: State) -> Result<(), ObstacleError> {
        let dim = self.manifold.dimension();
        for corner in [&min, &max] {
            if corner.len() != dim {
                return Err(ObstacleError::DimensionMismatch {
                    expected: dim,
                    got: corner.len(),
                });
            }
        }
        // `!(lo <= hi)` also rejects NaN corners.
        if let Some(axis) = (0..dim).find(|&i| !(min[i] <= max[i])) {
            return Err(ObstacleError::InvertedBox { axis });
        }
        self.obstacles.push(AabbObstacle { min, max });
        Ok(())
    }

    /// Registered obstacles, in insertion order.
    pub fn obstacles(&self) -> &[AabbObstacle] {
        &self.obstacles
    }

    /// The manifold states are allocated from.
    pub fn manifold(&self) -> &Arc<dyn Manifold> {
        &self.manifold
    }
}

impl std::fmt::Debug for BoxObstacleOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxObstacleOracle")
            .field("manifold", &self.manifold.instance_id())
            .field("obstacles", &self.obstacles)
            .finish()
    }
}

impl AdmissibilityOracle for BoxObstacleOracle {
    fn is_admissible(&self, state: &State) -> bool {
        self.manifold.satisfies_bounds(state) && !self.obstacles.iter().any(|o| o.contains(state))
    }

    fn alloc_state(&self) -> State {
        self.manifold.alloc_state()
    }

    fn manifold_id(&self) -> Option<ManifoldInstanceId> {
        Some(self.manifold.instance_id())
    }
}
