//! # chromatch-core
//!
//! Core types for statistical color transfer.
//!
//! This crate provides the foundational types used throughout chromatch:
//!
//! - [`ColorSpaceTag`] - Closed set of working domains (Rgb, Lms, Lab, Hsl)
//! - [`PixelImage`] - Immutable row-major sequence of 3-component pixels
//! - [`BgrBuffer`] - Bounds-checked, stride-aware packed B,G,R byte buffer
//! - [`codec`] - Conversion between [`BgrBuffer`] and [`PixelImage`]
//!
//! ## Crate Structure
//!
//! ```text
//! chromatch-core (this crate)
//!    ^
//!    |
//!    +-- chromatch-color (conversion graph, statistics, transfer, merge)
//!    +-- chromatch-cli (file loading, presets, benchmarking)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use chromatch_core::{codec, BgrBuffer, ColorSpaceTag};
//!
//! // One white pixel, one black pixel
//! let buffer = BgrBuffer::new(vec![255, 255, 255, 0, 0, 0], 2, 1).unwrap();
//! let image = codec::decode(&buffer, false);
//! assert_eq!(image.space(), ColorSpaceTag::Rgb);
//! assert_eq!(image.pixel(0), [1.0, 1.0, 1.0]);
//!
//! let back = codec::encode(&image).unwrap();
//! assert_eq!(back.data(), buffer.data());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod codec;
pub mod colorspace;
pub mod error;
pub mod image;

pub use buffer::{BgrBuffer, BYTES_PER_PIXEL};
pub use colorspace::ColorSpaceTag;
pub use error::{Error, Result};
pub use image::{Pixel, PixelImage};

/// Normalization headroom applied by compressed decoding: `235 / 255`.
///
/// Also the upper clamp bound of the Lab pipeline output.
pub const COMPRESSION: f64 = 235.0 / 255.0;

/// Prelude module for convenient imports.
///
/// ```
/// use chromatch_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::BgrBuffer;
    pub use crate::codec::{decode, encode};
    pub use crate::colorspace::ColorSpaceTag;
    pub use crate::error::{Error, Result};
    pub use crate::image::{Pixel, PixelImage};
    pub use crate::COMPRESSION;
}
