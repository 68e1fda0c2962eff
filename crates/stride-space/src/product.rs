//! Weighted compound of arbitrary manifolds.

use crate::error::ManifoldError;
use smallvec::SmallVec;
use std::fmt;
use stride_core::{Manifold, ManifoldInstanceId, State};

/// Cartesian product M_1 × M_2 × … × M_N of component manifolds.
///
/// # Formal definition
///
/// - **States**: concatenation of per-component states. If M_i has
///   dimension d_i, a product state has d_1 + … + d_N components laid out
///   as `[m_{1,0}, …, m_{2,0}, …]`.
/// - **Distance**: weighted sum `Σ w_i · d_i(a_i, b_i)`.
/// - **Maximum extent**: `Σ w_i · extent_i`, so the fraction stays in `[0, 1]`.
/// - **Interpolation**: each component interpolates independently with the
///   same parameter `t`; the distance travelled is therefore `t` times the
///   total.
///
/// Useful for SE(2)-style spaces such as `RealVectorSpace(2) × Circle`.
pub struct ProductManifold {
    components: Vec<Box<dyn Manifold>>,
    weights: Vec<f64>,
    dim_offsets: Vec<usize>,
    extent: f64,
    instance_id: ManifoldInstanceId,
}

impl fmt::Debug for ProductManifold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductManifold")
            .field("n_components", &self.components.len())
            .field("weights", &self.weights)
            .field("dim_offsets", &self.dim_offsets)
            .field("extent", &self.extent)
            .finish()
    }
}

impl ProductManifold {
    /// Create a product with unit weight on every component.
    pub fn new(components: Vec<Box<dyn Manifold>>) -> Result<Self, ManifoldError> {
        let weights = vec![1.0; components.len()];
        Self::weighted(components, weights)
    }

    /// Create a product with explicit per-component distance weights.
    ///
    /// Returns `Err(ManifoldError::InvalidComposition)` if:
    /// - `components` is empty
    /// - `weights.len() != components.len()`
    /// - any weight is not finite and strictly positive
    pub fn weighted(
        components: Vec<Box<dyn Manifold>>,
        weights: Vec<f64>,
    ) -> Result<Self, ManifoldError> {
        if components.is_empty() {
            return Err(ManifoldError::InvalidComposition {
                reason: "ProductManifold requires at least one component".to_string(),
            });
        }
        if weights.len() != components.len() {
            return Err(ManifoldError::InvalidComposition {
                reason: format!(
                    "{} weights supplied for {} components",
                    weights.len(),
                    components.len()
                ),
            });
        }
        if let Some((i, w)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w <= 0.0)
        {
            return Err(ManifoldError::InvalidComposition {
                reason: format!("weight {i} must be finite and positive, got {w}"),
            });
        }

        // dim_offsets: [0, dim_0, dim_0+dim_1, ...]
        let mut dim_offsets = Vec::with_capacity(components.len() + 1);
        dim_offsets.push(0);
        let mut total = 0usize;
        for comp in &components {
            total += comp.dimension();
            dim_offsets.push(total);
        }

        let extent = components
            .iter()
            .zip(&weights)
            .map(|(c, w)| w * c.maximum_extent())
            .sum();

        Ok(Self {
            components,
            weights,
            dim_offsets,
            extent,
            instance_id: ManifoldInstanceId::next(),
        })
    }

    /// Number of component manifolds.
    pub fn n_components(&self) -> usize {
        self.components.len()
    }

    /// Access the i-th component manifold.
    pub fn component(&self, i: usize) -> &dyn Manifold {
        &*self.components[i]
    }

    /// Distance weight of the i-th component.
    pub fn weight(&self, i: usize) -> f64 {
        self.weights[i]
    }

    /// Extract the i-th component's sub-state.
    pub fn project(&self, state: &State, i: usize) -> State {
        SmallVec::from_slice(&state[self.dim_offsets[i]..self.dim_offsets[i + 1]])
    }
}

impl Manifold for ProductManifold {
    fn dimension(&self) -> usize {
        self.dim_offsets[self.components.len()]
    }

    fn maximum_extent(&self) -> f64 {
        self.extent
    }

    fn distance(&self, a: &State, b: &State) -> f64 {
        (0..self.components.len())
            .map(|i| {
                let (sa, sb) = (self.project(a, i), self.project(b, i));
                self.weights[i] * self.components[i].distance(&sa, &sb)
            })
            .sum()
    }

    fn interpolate(&self, from: &State, to: &State, t: f64, out: &mut State) {
        out.clear();
        let mut part = State::new();
        for (i, comp) in self.components.iter().enumerate() {
            let (sf, st) = (self.project(from, i), self.project(to, i));
            comp.interpolate(&sf, &st, t, &mut part);
            out.extend_from_slice(&part);
        }
    }

    fn satisfies_bounds(&self, state: &State) -> bool {
        state.len() == self.dimension()
            && self
                .components
                .iter()
                .enumerate()
                .all(|(i, c)| c.satisfies_bounds(&self.project(state, i)))
    }

    fn enforce_bounds(&self, state: &mut State) {
        for (i, comp) in self.components.iter().enumerate() {
            let mut sub = self.project(state, i);
            comp.enforce_bounds(&mut sub);
            state[self.dim_offsets[i]..self.dim_offsets[i + 1]].copy_from_slice(&sub);
        }
    }

    fn equal_states(&self, a: &State, b: &State) -> bool {
        self.components
            .iter()
            .enumerate()
            .all(|(i, c)| c.equal_states(&self.project(a, i), &self.project(b, i)))
    }

    fn instance_id(&self) -> ManifoldInstanceId {
        self.instance_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::{Circle, Interval, RealVectorSpace};
    use smallvec::smallvec;
    use std::f64::consts::PI;

    fn se2() -> ProductManifold {
        ProductManifold::new(vec![
            Box::new(RealVectorSpace::new(&[0.0, 0.0], &[3.0, 4.0]).unwrap()),
            Box::new(Circle::new()),
        ])
        .unwrap()
    }

    #[test]
    fn dimension_is_sum_of_components() {
        let m = se2();
        assert_eq!(m.dimension(), 3);
        assert_eq!(m.n_components(), 2);
        assert_eq!(m.alloc_state().len(), 3);
    }

    #[test]
    fn extent_is_weighted_sum() {
        let m = ProductManifold::weighted(
            vec![
                Box::new(Interval::new(0.0, 10.0).unwrap()),
                Box::new(Circle::new()),
            ],
            vec![1.0, 0.5],
        )
        .unwrap();
        assert!((m.maximum_extent() - (10.0 + 0.5 * PI)).abs() < 1e-12);
        assert_eq!(m.weight(1), 0.5);
    }

    #[test]
    fn distance_is_weighted_sum() {
        let m = se2();
        let a: State = smallvec![0.0, 0.0, 0.0];
        let b: State = smallvec![3.0, 4.0, 1.0];
        assert!((m.distance(&a, &b) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn interpolate_wraps_angular_component() {
        let m = se2();
        let a: State = smallvec![0.0, 0.0, 3.0];
        let b: State = smallvec![2.0, 2.0, -3.0];
        let mut out = m.alloc_state();
        m.interpolate(&a, &b, 0.5, &mut out);
        assert_eq!(out.len(), 3);
        assert_eq!(&out[..2], &[1.0, 1.0]);
        assert!(out[2].abs() > 3.0);
    }

    #[test]
    fn enforce_bounds_per_component() {
        let m = se2();
        let mut st: State = smallvec![5.0, -1.0, 3.0 * PI / 2.0];
        m.enforce_bounds(&mut st);
        assert_eq!(&st[..2], &[3.0, 0.0]);
        assert!((st[2] + PI / 2.0).abs() < 1e-12);
        assert!(m.satisfies_bounds(&st));
    }

    #[test]
    fn equal_states_delegates_to_components() {
        let m = se2();
        let a: State = smallvec![1.0, 1.0, 0.5];
        let b: State = smallvec![1.0, 1.0, 0.5];
        let c: State = smallvec![1.0, 1.0, 0.6];
        assert!(m.equal_states(&a, &b));
        assert!(!m.equal_states(&a, &c));
    }

    #[test]
    fn rejects_invalid_composition() {
        assert!(matches!(
            ProductManifold::new(vec![]),
            Err(ManifoldError::InvalidComposition { .. })
        ));
        let bad_len = ProductManifold::weighted(
            vec![Box::new(Circle::new())],
            vec![1.0, 2.0],
        );
        assert!(bad_len.is_err());
        let bad_weight = ProductManifold::weighted(vec![Box::new(Circle::new())], vec![0.0]);
        assert!(bad_weight.is_err());
        let nan_weight = ProductManifold::weighted(vec![Box::new(Circle::new())], vec![f64::NAN]);
        assert!(nan_weight.is_err());
    }

    #[test]
    fn compliance_se2() {
        let m = se2();
        let states: Vec<State> = vec![
            smallvec![0.0, 0.0, 0.0],
            smallvec![3.0, 4.0, -PI],
            smallvec![1.5, 2.0, 3.0],
            smallvec![0.5, 3.5, -2.5],
            smallvec![2.0, 1.0, 1.0],
        ];
        compliance::run_full_compliance(&m, &states);
    }
}
