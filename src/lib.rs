//! Generic fixed-size vectors, matrices and quaternions for real-time graphics.
//!
//! # Overview
//!
//! - [`Vector`] is an `N`-element vector with named element access (`x`, `y`, `z`, `w`) for up to
//!   4 elements.
//! - [`Matrix`] is an `R`x`C` matrix stored as `R` row [`Vector`]s. Matrices transform column
//!   vectors (`matrix * vector`). Square matrices up to 4x4 can be inverted, and 4x4 matrices
//!   provide the usual affine, projection and view transformations.
//! - [`Quat`] is a quaternion, used to represent rotations.
//! - [`Transform`] combines scale, rotation and translation into a lazily computed matrix.
//!
//! All types are generic over their element type. Geometric operations require a [`Float`] type
//! ([`f32`] or [`f64`]), while arithmetic works with any [`Number`].
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Dimensions are const generics, and
//!   operations that only make sense for some dimensions (eg. the cross product, or the
//!   determinant of a non-square matrix) fail to compile when used with others.
//! - Use a single, row-major, unpadded data layout. Every type implements [`bytemuck::Pod`] when
//!   its element type does, so they can be uploaded to the GPU directly.
//! - Preconditions (out-of-range indices, unnormalized rotation axes, division by zero, inverting
//!   a singular matrix) are checked with assertions instead of being reported as errors. Most of
//!   them are debug assertions.
//! - Degenerate inputs with a sensible answer (eg. normalizing a zero-length quaternion) are
//!   handled and logged via the [`log`] crate at `trace` or `debug` level.
//!
//! # Conventions
//!
//! The dispatching projection and view constructors ([`Matrix::frustum`], [`Matrix::look_at`],
//! ...) follow the handedness and clip-space depth range selected by the `right-handed` and
//! `depth-negative-one-to-one` Cargo features. See [`HANDEDNESS`] and [`DEPTH_RANGE`].

mod config;
mod matrix;
mod quat;
mod scalar;
mod simd;
mod traits;
mod transform;
mod vector;

pub use config::*;
pub use matrix::*;
pub use quat::*;
pub use scalar::*;
pub use traits::*;
pub use transform::*;
pub use vector::*;
