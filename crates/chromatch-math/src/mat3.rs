//! 3x3 matrix type for color transformations.
//!
//! [`Mat3`] carries the fixed basis changes between RGB, LMS and the
//! logarithmic Lab space. Storage and arithmetic are delegated to
//! [`glam::DMat3`].
//!
//! # Convention
//!
//! Matrices are written in **row-major** order and act on **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! glam stores columns, so [`Mat3::from_rows`] transposes on construction.
//!
//! # Usage
//!
//! ```rust
//! use chromatch_math::{Mat3, Vec3};
//!
//! let scale = Mat3::diagonal(0.5774, 0.4082, 0.7071);
//! let v = scale * Vec3::new(1.0, 1.0, 1.0);
//! assert_eq!(v, Vec3::new(0.5774, 0.4082, 0.7071));
//! ```

use crate::Vec3;
use glam::{DMat3, DVec3};
use std::ops::Mul;

/// Determinants below this are treated as singular by [`Mat3::inverse`].
const SINGULAR_EPSILON: f64 = 1e-12;

/// A 3x3 `f64` matrix.
///
/// # Example
///
/// ```rust
/// use chromatch_math::{Mat3, Vec3};
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(Mat3::IDENTITY * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3(DMat3);

impl Mat3 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self(DMat3::IDENTITY);

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(r: [[f64; 3]; 3]) -> Self {
        Self(DMat3::from_cols(
            DVec3::new(r[0][0], r[1][0], r[2][0]),
            DVec3::new(r[0][1], r[1][1], r[2][1]),
            DVec3::new(r[0][2], r[1][2], r[2][2]),
        ))
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f64, d1: f64, d2: f64) -> Self {
        Self::from_rows([[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]])
    }

    /// Returns the elements as row arrays.
    #[inline]
    pub fn to_rows(&self) -> [[f64; 3]; 3] {
        self.0.transpose().to_cols_array_2d()
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        if self.0.determinant().abs() < SINGULAR_EPSILON {
            return None;
        }
        Some(Self(self.0.inverse()))
    }

    /// Transforms a Vec3 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::from_glam(self.0 * v.to_glam())
    }

    /// Transforms a `[f64; 3]` triplet by this matrix.
    #[inline]
    pub fn transform_array(&self, v: [f64; 3]) -> [f64; 3] {
        (self.0 * DVec3::from_array(v)).to_array()
    }
}

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}
