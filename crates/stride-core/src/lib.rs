//! Core types and traits for the Stride motion-validation framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions every other Stride crate is written against:
//! the [`State`] point type, instance identifiers, error types, and
//! the two capability traits a motion validator consumes:
//!
//! - [`Manifold`]: distance and interpolation over the configuration space.
//! - [`AdmissibilityOracle`]: point-wise validity plus scratch allocation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::ConfigError;
pub use id::{ManifoldInstanceId, State};
pub use traits::{AdmissibilityOracle, Manifold};
