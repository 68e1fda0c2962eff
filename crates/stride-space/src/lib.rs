//! Configuration-space manifolds for Stride.
//!
//! This crate provides concrete implementations of the
//! [`Manifold`](stride_core::Manifold) trait, the metric and interpolation
//! structure that motion validators discretise motions with.
//!
//! # Backends
//!
//! - [`Interval`]: bounded 1D segment, linear interpolation
//! - [`Circle`]: SO(2) angle in `[-π, π)`, shorter-arc interpolation
//! - [`RealVectorSpace`]: bounded n-dimensional box, Euclidean metric
//! - [`ProductManifold`]: weighted compound of arbitrary manifolds

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod circle;
pub mod error;
pub mod interval;
pub mod product;
pub mod real_vector;

#[cfg(test)]
pub(crate) mod compliance;

pub use circle::Circle;
pub use error::ManifoldError;
pub use interval::Interval;
pub use product::ProductManifold;
pub use real_vector::RealVectorSpace;
