//! Error types for color operations.
//!
//! Covers the failure modes of conversion, statistics and transfer. Every
//! error is local to the call (or pipeline) that produced it.

use chromatch_core::ColorSpaceTag;
use thiserror::Error;

/// Color operation error.
///
/// Covers all possible failure modes in the color pipeline:
/// - Requested conversions with no direct edge
/// - Images with no pixels to take statistics over
/// - Channels whose standard deviation makes the contrast ratio undefined
/// - Transfers that overflow to NaN or infinity on the way back to RGB
/// - Core buffer and codec errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// No direct conversion edge between the two spaces.
    #[error("unsupported conversion: {from} -> {to}")]
    UnsupportedConversion {
        /// Source color space.
        from: ColorSpaceTag,
        /// Target color space.
        to: ColorSpaceTag,
    },

    /// Statistics requested over an image with zero pixels.
    #[error("image contains no pixels")]
    EmptyImage,

    /// A channel has zero standard deviation and no custom ratio was given.
    #[error("degenerate variance in {space} channel {channel}: contrast ratio is undefined")]
    DegenerateVariance {
        /// Channel index (0, 1 or 2).
        channel: usize,
        /// Working space the statistics were taken in.
        space: ColorSpaceTag,
    },

    /// Custom contrast ratio is NaN or infinite.
    #[error("invalid contrast ratio: {0}")]
    InvalidRatio(f64),

    /// A pixel left the finite range after the inverse chain.
    ///
    /// Happens when a large custom ratio pushes Lab values past the range
    /// where `10^v` is representable.
    #[error("non-finite {space} value at pixel {pixel}: contrast ratio too large")]
    NonFinite {
        /// Space the value was found in.
        space: ColorSpaceTag,
        /// Linear index of the first offending pixel.
        pixel: usize,
    },

    /// Buffer or codec error.
    #[error(transparent)]
    Core(#[from] chromatch_core::Error),
}

impl ColorError {
    /// Creates an [`ColorError::UnsupportedConversion`].
    #[inline]
    pub fn unsupported(from: ColorSpaceTag, to: ColorSpaceTag) -> Self {
        Self::UnsupportedConversion { from, to }
    }

    /// Returns `true` if supplying a custom contrast ratio would avoid this error.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateVariance { .. })
    }
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
