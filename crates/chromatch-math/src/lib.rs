//! # chromatch-math
//!
//! Linear algebra primitives for the chromatch color transforms.
//!
//! - [`Mat3`] - 3x3 matrices for the LMS, Lab and RGB basis changes
//! - [`Vec3`] - 3-component pixel triplets
//!
//! # Design
//!
//! All arithmetic is `f64`. Matrices are stored **row-major** and act on
//! **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chromatch_math::{Mat3, Vec3};
//!
//! let to_lms = Mat3::from_rows([
//!     [0.3811, 0.5783, 0.0402],
//!     [0.1967, 0.7244, 0.0782],
//!     [0.0241, 0.1288, 0.8444],
//! ]);
//!
//! let lms = to_lms * Vec3::ONE;
//! assert!((lms.x - 0.9996).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - `DMat3` storage and matrix arithmetic
//!
//! # Used By
//!
//! - `chromatch-color` - Color space conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;
