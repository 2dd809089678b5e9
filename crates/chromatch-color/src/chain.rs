//! Explicit conversion paths.
//!
//! A [`Chain`] is an ordered list of color spaces, starting from the space
//! of the input image. Applying it converts through each hop in order
//! using only direct graph edges.
//!
//! # Example
//!
//! ```rust
//! use chromatch_color::Chain;
//! use chromatch_core::{ColorSpaceTag as Tag, PixelImage};
//!
//! let forward = Chain::new(Tag::Rgb).via(Tag::Lms).to(Tag::Lab);
//! let inverse = forward.inverse();
//! assert_eq!(inverse.path(), &[Tag::Lab, Tag::Lms, Tag::Rgb]);
//!
//! let rgb = PixelImage::filled(Tag::Rgb, 3, 3, [0.5, 0.5, 0.5]);
//! let lab = forward.apply(&rgb).unwrap();
//! let back = inverse.apply(&lab).unwrap();
//! assert_eq!(back.space(), Tag::Rgb);
//! ```

use chromatch_core::{ColorSpaceTag, Error, PixelImage};

use crate::convert::{apply_path, validate_path};
use crate::ColorResult;

/// An ordered conversion path between color spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    path: Vec<ColorSpaceTag>,
}

impl Chain {
    /// Creates a chain that starts (and, so far, ends) at `start`.
    pub fn new(start: ColorSpaceTag) -> Self {
        Self { path: vec![start] }
    }

    /// Appends an intermediate hop.
    pub fn via(mut self, tag: ColorSpaceTag) -> Self {
        self.path.push(tag);
        self
    }

    /// Appends the final hop.
    pub fn to(self, tag: ColorSpaceTag) -> Self {
        self.via(tag)
    }

    /// The full path, start included.
    pub fn path(&self) -> &[ColorSpaceTag] {
        &self.path
    }

    /// First space of the path.
    pub fn start(&self) -> ColorSpaceTag {
        self.path[0]
    }

    /// Last space of the path.
    pub fn end(&self) -> ColorSpaceTag {
        self.path[self.path.len() - 1]
    }

    /// Number of hops.
    pub fn len(&self) -> usize {
        self.path.len() - 1
    }

    /// Returns `true` if the chain has no hops.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The same path walked backwards.
    pub fn inverse(&self) -> Self {
        Self {
            path: self.path.iter().rev().copied().collect(),
        }
    }

    /// Checks that every hop is a direct edge.
    ///
    /// # Errors
    ///
    /// [`ColorError::UnsupportedConversion`](crate::ColorError::UnsupportedConversion)
    /// for the first missing edge.
    pub fn validate(&self) -> ColorResult<()> {
        validate_path(&self.path)
    }

    /// Converts `image` along the path.
    ///
    /// # Errors
    ///
    /// - [`Error::SpaceMismatch`] (wrapped) if the image is not in [`Chain::start`]
    /// - [`ColorError::UnsupportedConversion`](crate::ColorError::UnsupportedConversion)
    ///   if any hop has no edge; nothing is converted in that case
    pub fn apply(&self, image: &PixelImage) -> ColorResult<PixelImage> {
        if image.space() != self.start() {
            return Err(Error::SpaceMismatch {
                expected: self.start(),
                got: image.space(),
            }
            .into());
        }
        self.validate()?;
        apply_path(image, &self.path[1..])
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, tag) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}
