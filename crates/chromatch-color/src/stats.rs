//! Per-channel image statistics.
//!
//! Mean and population standard deviation (divide by N) of each channel.
//!
//! Sums are taken over fixed-size chunks in parallel, then the partial sums
//! are added in chunk order. The result for a given image is the same on
//! every run regardless of thread count, so a self-transfer computes a
//! ratio of exactly 1.

use chromatch_core::{ColorSpaceTag, Pixel, PixelImage};
use rayon::prelude::*;

use crate::{ColorError, ColorResult};

/// Pixels per reduction chunk.
const CHUNK: usize = 4096;

/// Mean and standard deviation of the three channels of one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStats {
    /// Space the statistics were taken in.
    pub space: ColorSpaceTag,
    /// Per-channel mean.
    pub mean: [f64; 3],
    /// Per-channel population standard deviation.
    pub std_dev: [f64; 3],
}

impl ChannelStats {
    /// Computes statistics for every channel of `image`.
    ///
    /// # Errors
    ///
    /// [`ColorError::EmptyImage`] if the image has no pixels.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chromatch_color::ChannelStats;
    /// use chromatch_core::{ColorSpaceTag, PixelImage};
    ///
    /// let img = PixelImage::from_pixels(
    ///     ColorSpaceTag::Rgb, 2, 1, vec![[0.0, 0.5, 1.0], [1.0, 0.5, 1.0]],
    /// ).unwrap();
    /// let stats = ChannelStats::compute(&img).unwrap();
    /// assert_eq!(stats.mean, [0.5, 0.5, 1.0]);
    /// assert_eq!(stats.std_dev, [0.5, 0.0, 0.0]);
    /// ```
    pub fn compute(image: &PixelImage) -> ColorResult<Self> {
        let mut mean = [0.0; 3];
        let mut std_dev = [0.0; 3];
        for c in 0..3 {
            mean[c] = channel_mean(image, c)?;
            std_dev[c] = channel_std_dev(image, c, mean[c])?;
        }
        Ok(Self {
            space: image.space(),
            mean,
            std_dev,
        })
    }

    /// Returns `true` if any channel has zero spread.
    pub fn has_flat_channel(&self) -> bool {
        self.std_dev.iter().any(|&s| s == 0.0)
    }
}

/// Mean of one channel.
///
/// Values are summed relative to the first pixel, so a constant channel
/// yields its value back exactly.
///
/// # Errors
///
/// [`ColorError::EmptyImage`] if the image has no pixels.
pub fn channel_mean(image: &PixelImage, channel: usize) -> ColorResult<f64> {
    let pixels = image.pixels();
    let Some(first) = pixels.first() else {
        return Err(ColorError::EmptyImage);
    };
    let pivot = first[channel];
    let shifted = ordered_sum(pixels, |p| p[channel] - pivot);
    Ok(pivot + shifted / pixels.len() as f64)
}

/// Population standard deviation of one channel around `mean`.
///
/// # Errors
///
/// [`ColorError::EmptyImage`] if the image has no pixels.
pub fn channel_std_dev(image: &PixelImage, channel: usize, mean: f64) -> ColorResult<f64> {
    let pixels = image.pixels();
    if pixels.is_empty() {
        return Err(ColorError::EmptyImage);
    }
    let squares = ordered_sum(pixels, |p| {
        let d = p[channel] - mean;
        d * d
    });
    Ok((squares / pixels.len() as f64).sqrt())
}

/// Parallel sum whose association order depends only on the input length.
fn ordered_sum<F>(pixels: &[Pixel], f: F) -> f64
where
    F: Fn(&Pixel) -> f64 + Sync,
{
    let partials: Vec<f64> = pixels
        .par_chunks(CHUNK)
        .map(|chunk| chunk.iter().map(&f).sum::<f64>())
        .collect();
    partials.into_iter().sum()
}
