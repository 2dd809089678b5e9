//! Error types for chromatch-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of buffer construction,
//! row access, image construction and the pixel codec:
//! - Byte buffers whose length disagrees with the declared geometry
//! - Row strides that cannot hold a full row of pixels
//! - Pixel images handed to an operation expecting another color space
//!
//! # Usage
//!
//! ```rust
//! use chromatch_core::{BgrBuffer, Error};
//!
//! // 2x2 image needs 12 bytes
//! let err = BgrBuffer::new(vec![0; 10], 2, 2).unwrap_err();
//! assert!(matches!(err, Error::DimensionMismatch { expected: 12, got: 10, .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

use crate::ColorSpaceTag;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in core buffer and codec operations.
///
/// # Categories
///
/// - **Geometry errors**: [`DimensionMismatch`](Error::DimensionMismatch),
///   [`InvalidStride`](Error::InvalidStride), [`OutOfBounds`](Error::OutOfBounds)
/// - **Content errors**: [`SpaceMismatch`](Error::SpaceMismatch)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Element count disagrees with the declared width and height.
    ///
    /// `what` names the container (`"bytes"` for byte buffers,
    /// `"pixels"` for pixel images).
    #[error("dimension mismatch for {width}x{height}: expected {expected} {what}, got {got}")]
    DimensionMismatch {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// Expected element count
        expected: usize,
        /// Actual element count
        got: usize,
        /// Element kind
        what: &'static str,
    },

    /// Stride is too small for the given width.
    ///
    /// The stride must be at least `width * 3` bytes.
    #[error("stride {stride} is less than minimum {min_stride} for width {width}")]
    InvalidStride {
        /// Provided stride
        stride: usize,
        /// Minimum required stride
        min_stride: usize,
        /// Image width
        width: u32,
    },

    /// Row index outside the buffer.
    #[error("row {y} out of bounds for height {height}")]
    OutOfBounds {
        /// Requested row
        y: u32,
        /// Buffer height
        height: u32,
    },

    /// Image is in a different color space than the operation requires.
    #[error("color space mismatch: expected {expected}, got {got}")]
    SpaceMismatch {
        /// Space the operation requires
        expected: ColorSpaceTag,
        /// Space of the image supplied
        got: ColorSpaceTag,
    },
}

impl Error {
    /// Creates an [`Error::DimensionMismatch`] for a byte buffer.
    #[inline]
    pub fn byte_mismatch(width: u32, height: u32, expected: usize, got: usize) -> Self {
        Self::DimensionMismatch {
            width,
            height,
            expected,
            got,
            what: "bytes",
        }
    }

    /// Creates an [`Error::DimensionMismatch`] for a pixel sequence.
    #[inline]
    pub fn pixel_mismatch(width: u32, height: u32, expected: usize, got: usize) -> Self {
        Self::DimensionMismatch {
            width,
            height,
            expected,
            got,
            what: "pixels",
        }
    }
}
