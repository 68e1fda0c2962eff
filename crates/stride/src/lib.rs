//! Stride: discrete motion validation for sampling-based motion planners.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Stride sub-crates. For most users, adding `stride` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use stride::prelude::*;
//! use stride::space::RealVectorSpace;
//!
//! // A 10×10 plane with a wall down the middle, open above y = 8.
//! let plane = Arc::new(RealVectorSpace::new(&[0.0, 0.0], &[10.0, 10.0]).unwrap());
//! let mut oracle = BoxObstacleOracle::new(plane.clone());
//! oracle
//!     .add_box(State::from_slice(&[4.5, 0.0]), State::from_slice(&[5.5, 8.0]))
//!     .unwrap();
//!
//! let mut validator = DiscreteMotionValidator::new(plane, Arc::new(oracle));
//! validator.set_resolution(0.005).unwrap();
//!
//! let start = State::from_slice(&[1.0, 2.0]);
//! assert!(!validator.check_motion(&start, &State::from_slice(&[9.0, 2.0])));
//! assert!(validator.check_motion(&start, &State::from_slice(&[4.0, 9.0])));
//!
//! let mut reached = State::new();
//! let mut last = LastValid::with_state(&mut reached);
//! validator.check_motion_with_last_valid(&start, &State::from_slice(&[9.0, 2.0]), &mut last);
//! assert!(last.fraction < 0.5);
//! assert!(reached[0] < 4.5);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stride-core` | `State`, manifold and oracle traits, config errors |
//! | [`space`] | `stride-space` | Concrete manifolds (interval, circle, vector space, product) |
//! | [`validity`] | `stride-validity` | Admissibility oracles and scratch-state guard |
//! | [`motion`] | `stride-motion` | Motion validators, last-valid reporting, statistics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`stride-core`).
///
/// Contains the [`types::State`] alias, the [`types::Manifold`] and
/// [`types::AdmissibilityOracle`] traits, and [`types::ConfigError`].
pub use stride_core as types;

/// Concrete manifolds (`stride-space`).
///
/// [`space::Interval`], [`space::Circle`], [`space::RealVectorSpace`], and
/// [`space::ProductManifold`] for composites such as SE(2).
pub use stride_space as space;

/// Admissibility oracles (`stride-validity`).
///
/// [`validity::PredicateOracle`] wraps a closure,
/// [`validity::BoxObstacleOracle`] tests against axis-aligned boxes.
pub use stride_validity as validity;

/// Motion validators (`stride-motion`).
///
/// The [`motion::MotionValidator`] trait and its discrete implementation
/// [`motion::DiscreteMotionValidator`].
pub use stride_motion as motion;

/// Common imports for typical Stride usage.
///
/// ```rust
/// use stride::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use stride_core::{AdmissibilityOracle, ConfigError, Manifold, State};

    // Oracles
    pub use stride_validity::{BoxObstacleOracle, PredicateOracle};

    // Validation
    pub use stride_motion::{
        DiscreteMotionValidator, LastValid, MotionStats, MotionValidator, ValidatorConfig,
    };
}
