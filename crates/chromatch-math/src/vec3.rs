//! 3-component vector type for pixel triplets.
//!
//! [`Vec3`] holds one pixel's channels while it passes through a matrix
//! transform, along with the component-wise helpers the conversions need
//! (floor clamping, base-10 logarithm and exponent).
//!
//! # Usage
//!
//! ```rust
//! use chromatch_math::Vec3;
//!
//! let rgb = Vec3::new(0.0, 0.5, 1.0);
//! let floored = rgb.max(Vec3::splat(0.1));
//! assert_eq!(floored, Vec3::new(0.1, 0.5, 1.0));
//! ```

use glam::DVec3;

/// A 3D `f64` vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// First channel
    pub x: f64,
    /// Second channel
    pub y: f64,
    /// Third channel
    pub z: f64,
}

impl Vec3 {
    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Creates a vector from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_glam(self.to_glam().max(other.to_glam()))
    }

    /// Component-wise base-10 logarithm.
    #[inline]
    pub fn log10(self) -> Self {
        self.map(f64::log10)
    }

    /// Component-wise `10^v`.
    #[inline]
    pub fn exp10(self) -> Self {
        self.map(|v| 10f64.powf(v))
    }

    #[inline]
    pub(crate) fn to_glam(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub(crate) fn from_glam(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
