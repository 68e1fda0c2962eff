//! Bounded n-dimensional Euclidean box.

use crate::error::ManifoldError;
use stride_core::{Manifold, ManifoldInstanceId, State};

/// An axis-aligned box `[low_0, high_0] × … × [low_{n-1}, high_{n-1}]`.
///
/// Distance is Euclidean; the maximum extent is the length of the box
/// diagonal, so `distance_as_fraction` is 1 exactly between opposite
/// corners. Interpolation is linear per component.
///
/// # Examples
///
/// ```
/// use stride_core::{Manifold, State};
/// use stride_space::RealVectorSpace;
///
/// let plane = RealVectorSpace::new(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
/// assert_eq!(plane.dimension(), 2);
/// assert_eq!(plane.maximum_extent(), 5.0);
///
/// let a: State = vec![0.0, 0.0].into();
/// let b: State = vec![3.0, 4.0].into();
/// assert_eq!(plane.distance_as_fraction(&a, &b), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct RealVectorSpace {
    low: Vec<f64>,
    high: Vec<f64>,
    extent: f64,
    instance_id: ManifoldInstanceId,
}

impl RealVectorSpace {
    /// Create a box from per-axis lower and upper bounds.
    ///
    /// Returns `Err(ManifoldError::ZeroDimension)` for empty bounds,
    /// `Err(ManifoldError::BoundsLengthMismatch)` if the slices differ in
    /// length, and `Err(ManifoldError::InvalidBounds)` for any axis whose
    /// bounds are not finite with `low < high`.
    pub fn new(low: &[f64], high: &[f64]) -> Result<Self, ManifoldError> {
        if low.len() != high.len() {
            return Err(ManifoldError::BoundsLengthMismatch {
                low: low.len(),
                high: high.len(),
            });
        }
        if low.is_empty() {
            return Err(ManifoldError::ZeroDimension);
        }
        for (axis, (&l, &h)) in low.iter().zip(high).enumerate() {
            if !l.is_finite() || !h.is_finite() || l >= h {
                return Err(ManifoldError::InvalidBounds {
                    axis,
                    low: l,
                    high: h,
                });
            }
        }
        let extent = low
            .iter()
            .zip(high)
            .map(|(l, h)| (h - l) * (h - l))
            .sum::<f64>()
            .sqrt();
        Ok(Self {
            low: low.to_vec(),
            high: high.to_vec(),
            extent,
            instance_id: ManifoldInstanceId::next(),
        })
    }

    /// Unit hypercube `[0, 1]^dim`.
    pub fn unit(dim: usize) -> Result<Self, ManifoldError> {
        Self::new(&vec![0.0; dim], &vec![1.0; dim])
    }

    /// Per-axis lower bounds.
    pub fn low(&self) -> &[f64] {
        &self.low
    }

    /// Per-axis upper bounds.
    pub fn high(&self) -> &[f64] {
        &self.high
    }
}

impl Manifold for RealVectorSpace {
    fn dimension(&self) -> usize {
        self.low.len()
    }

    fn maximum_extent(&self) -> f64 {
        self.extent
    }

    fn distance(&self, a: &State, b: &State) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>()
            .sqrt()
    }

    fn interpolate(&self, from: &State, to: &State, t: f64, out: &mut State) {
        out.clear();
        out.extend(from.iter().zip(to.iter()).map(|(a, b)| a + (b - a) * t));
    }

    fn satisfies_bounds(&self, state: &State) -> bool {
        state.len() == self.low.len()
            && state
                .iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(v, (l, h))| v >= l && v <= h)
    }

    fn enforce_bounds(&self, state: &mut State) {
        for (v, (l, h)) in state.iter_mut().zip(self.low.iter().zip(&self.high)) {
            *v = v.clamp(*l, *h);
        }
    }

    fn instance_id(&self) -> ManifoldInstanceId {
        self.instance_id
    }
}
