//! Pixel image container.
//!
//! A [`PixelImage`] is an immutable, row-major sequence of exactly
//! `width * height` three-component pixels, tagged with the
//! [`ColorSpaceTag`] its values belong to.
//!
//! # Memory Layout
//!
//! ```text
//! pixels: [p(0,0) p(1,0) ... p(w-1,0)]  <- Row 0
//!         [p(0,1) p(1,1) ... p(w-1,1)]  <- Row 1
//!         ...
//! ```
//!
//! Conversions never modify an image in place. Each step builds a new
//! image of the same dimensions through [`PixelImage::map`], so the pixel
//! count is invariant along any conversion chain.

use rayon::prelude::*;

use crate::{ColorSpaceTag, Error, Result};

/// A single pixel: three channel values in the image's color space.
pub type Pixel = [f64; 3];

/// Immutable image of three-component pixels in one color space.
///
/// # Example
///
/// ```rust
/// use chromatch_core::{ColorSpaceTag, PixelImage};
///
/// let img = PixelImage::filled(ColorSpaceTag::Rgb, 4, 2, [0.5, 0.25, 0.0]);
/// assert_eq!(img.len(), 8);
///
/// let doubled = img.map(ColorSpaceTag::Rgb, |[r, g, b]| [r * 2.0, g * 2.0, b]);
/// assert_eq!(doubled.pixel(7), [1.0, 0.5, 0.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PixelImage {
    space: ColorSpaceTag,
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelImage {
    /// Creates an image from existing pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `pixels.len() != width * height`.
    pub fn from_pixels(
        space: ColorSpaceTag,
        width: u32,
        height: u32,
        pixels: Vec<Pixel>,
    ) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::pixel_mismatch(width, height, expected, pixels.len()));
        }
        Ok(Self {
            space,
            width,
            height,
            pixels,
        })
    }

    /// Creates an image whose pixel count is correct by construction.
    pub(crate) fn from_parts(space: ColorSpaceTag, width: u32, height: u32, pixels: Vec<Pixel>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            space,
            width,
            height,
            pixels,
        }
    }

    /// Creates an image where every pixel has the same value.
    pub fn filled(space: ColorSpaceTag, width: u32, height: u32, pixel: Pixel) -> Self {
        Self {
            space,
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        }
    }

    /// Color space of the channel values.
    #[inline]
    pub fn space(&self) -> ColorSpaceTag {
        self.space
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Returns `true` if the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Pixel at linear index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn pixel(&self, i: usize) -> Pixel {
        self.pixels[i]
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Values of one channel in pixel order.
    pub fn channel(&self, channel: usize) -> impl Iterator<Item = f64> + '_ {
        self.pixels.iter().map(move |p| p[channel])
    }

    /// Builds a new image in `space` by applying `f` to every pixel.
    ///
    /// Runs as an index-preserving parallel map: output pixel `i` is
    /// always `f(input pixel i)`.
    pub fn map<F>(&self, space: ColorSpaceTag, f: F) -> Self
    where
        F: Fn(Pixel) -> Pixel + Sync + Send,
    {
        let pixels: Vec<Pixel> = self.pixels.par_iter().map(|&p| f(p)).collect();
        Self {
            space,
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels() {
        let img = PixelImage::from_pixels(ColorSpaceTag::Lab, 2, 1, vec![[0.0; 3], [1.0; 3]]).unwrap();
        assert_eq!(img.space(), ColorSpaceTag::Lab);
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.pixel(1), [1.0; 3]);
    }

    #[test]
    fn test_from_pixels_wrong_size() {
        let result = PixelImage::from_pixels(ColorSpaceTag::Rgb, 2, 2, vec![[0.0; 3]; 3]);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch { expected: 4, got: 3, .. })
        ));
    }

    #[test]
    fn test_get_row_major() {
        let pixels = (0..6).map(|i| [i as f64, 0.0, 0.0]).collect();
        let img = PixelImage::from_pixels(ColorSpaceTag::Rgb, 3, 2, pixels).unwrap();
        assert_eq!(img.get(0, 1), Some([3.0, 0.0, 0.0]));
        assert_eq!(img.get(2, 1), Some([5.0, 0.0, 0.0]));
        assert_eq!(img.get(3, 0), None);
        assert_eq!(img.get(0, 2), None);
    }

    #[test]
    fn test_map_preserves_order_and_count() {
        let pixels: Vec<Pixel> = (0..10_000).map(|i| [i as f64, 0.0, 0.0]).collect();
        let img = PixelImage::from_pixels(ColorSpaceTag::Rgb, 100, 100, pixels).unwrap();
        let mapped = img.map(ColorSpaceTag::Lms, |[a, b, c]| [a + 1.0, b, c]);
        assert_eq!(mapped.len(), img.len());
        assert_eq!(mapped.space(), ColorSpaceTag::Lms);
        for (i, p) in mapped.pixels().iter().enumerate() {
            assert_eq!(p[0], i as f64 + 1.0);
        }
    }

    #[test]
    fn test_channel_iter() {
        let img = PixelImage::filled(ColorSpaceTag::Hsl, 2, 2, [120.0, 0.5, 0.25]);
        let sum: f64 = img.channel(0).sum();
        assert_eq!(sum, 480.0);
    }

    #[test]
    fn test_empty() {
        let img = PixelImage::filled(ColorSpaceTag::Rgb, 0, 5, [0.0; 3]);
        assert!(img.is_empty());
    }
}
