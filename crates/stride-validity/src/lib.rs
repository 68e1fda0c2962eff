//! Admissibility oracles and scoped scratch states for Stride.
//!
//! - [`PredicateOracle`] turns any `Fn(&State) -> bool` into an
//!   [`AdmissibilityOracle`](stride_core::AdmissibilityOracle).
//! - [`BoxObstacleOracle`] rejects states inside axis-aligned forbidden boxes.
//! - [`ScratchState`] borrows one state from an oracle for the duration
//!   of a scope and hands it back on drop, on every exit path.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod obstacle;
pub mod predicate;
pub mod scratch;

pub use error::ObstacleError;
pub use obstacle::{AabbObstacle, BoxObstacleOracle};
pub use predicate::PredicateOracle;
pub use scratch::ScratchState;
