//! Motion validation for sampling-based planners.
//!
//! A *motion* is the manifold's canonical curve between two states. This
//! crate decides whether a motion stays inside the admissible set using
//! only point-wise [`AdmissibilityOracle`](stride_core::AdmissibilityOracle)
//! queries at a fixed spacing, the [resolution](ValidatorConfig::resolution).
//!
//! [`DiscreteMotionValidator`] offers two probing strategies over the same
//! probe set:
//!
//! - [`check_motion`](MotionValidator::check_motion): breadth-first
//!   midpoint subdivision. Spreads probes over the whole motion from the
//!   start, so an inadmissible region anywhere is found early.
//! - [`check_motion_with_last_valid`](MotionValidator::check_motion_with_last_valid):
//!   left-to-right scan that also reports how far along a rejected motion
//!   a planner may safely advance.
//!
//! Both always agree on the boolean outcome.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod discrete;
pub mod stats;
pub mod validator;

pub use config::ValidatorConfig;
pub use discrete::DiscreteMotionValidator;
pub use stats::MotionStats;
pub use validator::{LastValid, MotionValidator};
