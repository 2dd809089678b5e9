//! Statistical color transfer.
//!
//! Every channel of the target image is remapped so its distribution takes
//! on the source's mean and (scaled) spread:
//!
//! ```text
//! updated = source_mean + (value - target_mean) * ratio
//! ratio   = custom, or source_std / target_std
//! ```
//!
//! Statistics are fixed before the pixel pass starts, which then runs as
//! one index-preserving parallel map.

use chromatch_core::{Error, PixelImage};
use tracing::trace;

use crate::{ChannelStats, ColorError, ColorResult};

/// Contrast ratio for one channel.
///
/// A custom ratio overrides the computed one and must be finite.
///
/// # Errors
///
/// - [`ColorError::InvalidRatio`] if `custom` is NaN or infinite
/// - [`ColorError::DegenerateVariance`] if no custom ratio is given and
///   either standard deviation is zero
pub fn contrast_ratio(
    source: &ChannelStats,
    target: &ChannelStats,
    channel: usize,
    custom: Option<f64>,
) -> ColorResult<f64> {
    if let Some(ratio) = custom {
        if !ratio.is_finite() {
            return Err(ColorError::InvalidRatio(ratio));
        }
        return Ok(ratio);
    }

    let (src, tgt) = (source.std_dev[channel], target.std_dev[channel]);
    if tgt == 0.0 || src == 0.0 {
        return Err(ColorError::DegenerateVariance {
            channel,
            space: target.space,
        });
    }
    Ok(src / tgt)
}

/// Recolors `target` toward the source statistics.
///
/// `target_stats` must describe `target`; both stats must be taken in the
/// target's space.
///
/// # Errors
///
/// - [`Error::SpaceMismatch`] (wrapped) if either stats set is from another space
/// - any error from [`contrast_ratio`]
///
/// # Example
///
/// ```rust
/// use chromatch_color::{transfer, ChannelStats};
/// use chromatch_core::{ColorSpaceTag, PixelImage};
///
/// let src = PixelImage::from_pixels(
///     ColorSpaceTag::Lab, 2, 1, vec![[1.0, 1.0, 1.0], [3.0, 3.0, 3.0]],
/// ).unwrap();
/// let tgt = PixelImage::from_pixels(
///     ColorSpaceTag::Lab, 2, 1, vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
/// ).unwrap();
///
/// let out = transfer(
///     &tgt,
///     &ChannelStats::compute(&src).unwrap(),
///     &ChannelStats::compute(&tgt).unwrap(),
///     None,
/// ).unwrap();
/// assert_eq!(out.pixels(), src.pixels());
/// ```
pub fn transfer(
    target: &PixelImage,
    source_stats: &ChannelStats,
    target_stats: &ChannelStats,
    custom: Option<f64>,
) -> ColorResult<PixelImage> {
    for stats in [source_stats, target_stats] {
        if stats.space != target.space() {
            return Err(Error::SpaceMismatch {
                expected: target.space(),
                got: stats.space,
            }
            .into());
        }
    }

    let ratio = [
        contrast_ratio(source_stats, target_stats, 0, custom)?,
        contrast_ratio(source_stats, target_stats, 1, custom)?,
        contrast_ratio(source_stats, target_stats, 2, custom)?,
    ];
    let src_mean = source_stats.mean;
    let tgt_mean = target_stats.mean;
    trace!(space = %target.space(), ?ratio, "transfer::run");

    Ok(target.map(target.space(), move |p| {
        [
            src_mean[0] + (p[0] - tgt_mean[0]) * ratio[0],
            src_mean[1] + (p[1] - tgt_mean[1]) * ratio[1],
            src_mean[2] + (p[2] - tgt_mean[2]) * ratio[2],
        ]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chromatch_core::{ColorSpaceTag, Pixel};

    fn gradient(space: ColorSpaceTag, offset: f64, scale: f64) -> PixelImage {
        let pixels: Vec<Pixel> = (0..100)
            .map(|i| {
                let t = i as f64 / 99.0;
                [offset + scale * t, offset - scale * t, offset + scale * t * t]
            })
            .collect();
        PixelImage::from_pixels(space, 10, 10, pixels).unwrap()
    }

    #[test]
    fn test_self_transfer_identity() {
        let img = gradient(ColorSpaceTag::Lab, -0.3, 0.8);
        let stats = ChannelStats::compute(&img).unwrap();
        for c in 0..3 {
            assert_eq!(contrast_ratio(&stats, &stats, c, None).unwrap(), 1.0);
        }
        let out = transfer(&img, &stats, &stats, None).unwrap();
        for (a, b) in img.pixels().iter().zip(out.pixels()) {
            for c in 0..3 {
                assert_abs_diff_eq!(a[c], b[c], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_output_takes_source_statistics() {
        let src = gradient(ColorSpaceTag::Hsl, 0.5, 0.2);
        let tgt = gradient(ColorSpaceTag::Hsl, 0.1, 0.6);
        let s = ChannelStats::compute(&src).unwrap();
        let t = ChannelStats::compute(&tgt).unwrap();
        let out = ChannelStats::compute(&transfer(&tgt, &s, &t, None).unwrap()).unwrap();
        for c in 0..3 {
            assert_abs_diff_eq!(out.mean[c], s.mean[c], epsilon = 1e-12);
            assert_abs_diff_eq!(out.std_dev[c], s.std_dev[c], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_custom_ratio() {
        let src = gradient(ColorSpaceTag::Lab, 1.0, 0.5);
        let tgt = gradient(ColorSpaceTag::Lab, 0.0, 1.0);
        let s = ChannelStats::compute(&src).unwrap();
        let t = ChannelStats::compute(&tgt).unwrap();
        let out = transfer(&tgt, &s, &t, Some(2.0)).unwrap();
        let o = ChannelStats::compute(&out).unwrap();
        for c in 0..3 {
            assert_abs_diff_eq!(o.mean[c], s.mean[c], epsilon = 1e-12);
            assert_abs_diff_eq!(o.std_dev[c], 2.0 * t.std_dev[c], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_flat_source_is_degenerate() {
        let flat = PixelImage::filled(ColorSpaceTag::Lab, 10, 10, [0.2, 0.1, 0.0]);
        let tgt = gradient(ColorSpaceTag::Lab, 0.0, 1.0);
        let s = ChannelStats::compute(&flat).unwrap();
        let t = ChannelStats::compute(&tgt).unwrap();
        assert_eq!(
            transfer(&tgt, &s, &t, None).unwrap_err(),
            ColorError::DegenerateVariance {
                channel: 0,
                space: ColorSpaceTag::Lab
            }
        );
        // a custom ratio sidesteps the undefined one
        let out = transfer(&tgt, &s, &t, Some(1.0)).unwrap();
        assert!(out.pixels().iter().flatten().all(|v| v.is_finite()));
    }

    #[test]
    fn test_flat_target_is_degenerate() {
        let src = gradient(ColorSpaceTag::Hsl, 0.0, 1.0);
        let flat = PixelImage::filled(ColorSpaceTag::Hsl, 3, 3, [0.0, 0.0, 0.5]);
        let s = ChannelStats::compute(&src).unwrap();
        let t = ChannelStats::compute(&flat).unwrap();
        assert!(contrast_ratio(&s, &t, 2, None).unwrap_err().is_degenerate());
    }

    #[test]
    fn test_invalid_custom_ratio() {
        let img = gradient(ColorSpaceTag::Lab, 0.0, 1.0);
        let s = ChannelStats::compute(&img).unwrap();
        assert!(matches!(
            contrast_ratio(&s, &s, 0, Some(f64::NAN)),
            Err(ColorError::InvalidRatio(r)) if r.is_nan()
        ));
        assert_eq!(
            contrast_ratio(&s, &s, 0, Some(f64::INFINITY)),
            Err(ColorError::InvalidRatio(f64::INFINITY))
        );
    }

    #[test]
    fn test_space_mismatch() {
        let lab = gradient(ColorSpaceTag::Lab, 0.0, 1.0);
        let hsl = gradient(ColorSpaceTag::Hsl, 0.0, 1.0);
        let s = ChannelStats::compute(&hsl).unwrap();
        let t = ChannelStats::compute(&lab).unwrap();
        assert!(matches!(
            transfer(&lab, &s, &t, None),
            Err(ColorError::Core(Error::SpaceMismatch { .. }))
        ));
    }
}
