//! Merge orchestrator: full color transfer pipelines over byte buffers.
//!
//! A pipeline decodes both buffers, converts them into its working space,
//! transfers the source statistics onto the target, converts back to RGB,
//! clamps and encodes at the target's dimensions.
//!
//! | Pipeline | Decode | Forward chain | Clamp |
//! |----------|--------|---------------|-------|
//! | Lab | compressed (x 235/255) | Rgb -> Lms -> Lab | [0, 235/255] |
//! | Hsl | plain | Rgb -> Hsl | [0, 1] |
//!
//! [`merge`] runs the selected pipelines concurrently. Each one succeeds or
//! fails on its own; a failed Lab pipeline never hides the Hsl result.
//!
//! # Example
//!
//! ```rust
//! use chromatch_color::{merge, TransferOptions};
//! use chromatch_core::BgrBuffer;
//!
//! let source = BgrBuffer::new((0..48).map(|i| (i * 37 % 256) as u8).collect(), 4, 4).unwrap();
//! let target = BgrBuffer::new((0..24).map(|i| (i * 91 % 256) as u8).collect(), 4, 2).unwrap();
//!
//! let [lab, hsl] = merge(&source, &target, &TransferOptions::default()).into_slots();
//! let lab = lab.unwrap().unwrap();
//! assert_eq!((lab.width(), lab.height()), (4, 2));
//! assert!(hsl.unwrap().is_ok());
//! ```

use std::fmt;
use std::str::FromStr;

use chromatch_core::{codec, BgrBuffer, ColorSpaceTag, PixelImage, COMPRESSION};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{transfer, ChannelStats, Chain, ColorError, ColorResult};

/// One of the two color transfer pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pipeline {
    /// Transfer in the logarithmic Lab space.
    Lab,
    /// Transfer in HSL.
    Hsl,
}

impl Pipeline {
    /// Both pipelines in output slot order.
    pub const ALL: [Pipeline; 2] = [Self::Lab, Self::Hsl];

    /// Space statistics and transfer are computed in.
    pub fn working_space(self) -> ColorSpaceTag {
        match self {
            Self::Lab => ColorSpaceTag::Lab,
            Self::Hsl => ColorSpaceTag::Hsl,
        }
    }

    /// Path from decoded RGB to the working space.
    pub fn forward(self) -> Chain {
        match self {
            Self::Lab => Chain::new(ColorSpaceTag::Rgb)
                .via(ColorSpaceTag::Lms)
                .to(ColorSpaceTag::Lab),
            Self::Hsl => Chain::new(ColorSpaceTag::Rgb).to(ColorSpaceTag::Hsl),
        }
    }

    /// Path from the working space back to RGB.
    pub fn inverse(self) -> Chain {
        self.forward().inverse()
    }

    /// Whether decoding applies the 235/255 compression.
    pub fn compress(self) -> bool {
        matches!(self, Self::Lab)
    }

    /// Inclusive `(min, max)` every RGB channel is clamped to before encoding.
    pub fn clamp_range(self) -> (f64, f64) {
        match self {
            Self::Lab => (0.0, COMPRESSION),
            Self::Hsl => (0.0, 1.0),
        }
    }

    /// Output slot index.
    pub fn slot(self) -> usize {
        match self {
            Self::Lab => 0,
            Self::Hsl => 1,
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lab => f.write_str("lab"),
            Self::Hsl => f.write_str("hsl"),
        }
    }
}

impl FromStr for Pipeline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lab" => Ok(Self::Lab),
            "hsl" => Ok(Self::Hsl),
            other => Err(format!("unknown pipeline: {other} (expected lab or hsl)")),
        }
    }
}

/// Pipeline selection and contrast override.
///
/// Deserializes from partial documents; missing fields take their defaults
/// (both pipelines on, computed contrast).
///
/// ```rust
/// use chromatch_color::TransferOptions;
///
/// let opts: TransferOptions = serde_yaml::from_str("hsl: false\ncontrast: 1.5").unwrap();
/// assert!(opts.lab && !opts.hsl);
/// assert_eq!(opts.contrast, Some(1.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferOptions {
    /// Run the Lab pipeline.
    pub lab: bool,
    /// Run the Hsl pipeline.
    pub hsl: bool,
    /// Ratio used in place of `source_std / target_std` for every channel.
    pub contrast: Option<f64>,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            lab: true,
            hsl: true,
            contrast: None,
        }
    }
}

impl TransferOptions {
    /// Options running only `pipeline`.
    pub fn only(pipeline: Pipeline) -> Self {
        Self {
            lab: pipeline == Pipeline::Lab,
            hsl: pipeline == Pipeline::Hsl,
            contrast: None,
        }
    }

    /// Sets the contrast override.
    pub fn with_contrast(mut self, contrast: Option<f64>) -> Self {
        self.contrast = contrast;
        self
    }

    /// Returns `true` if `pipeline` is selected.
    pub fn is_selected(&self, pipeline: Pipeline) -> bool {
        match pipeline {
            Pipeline::Lab => self.lab,
            Pipeline::Hsl => self.hsl,
        }
    }

    /// Selected pipelines in slot order.
    pub fn selected(&self) -> Vec<Pipeline> {
        Pipeline::ALL
            .into_iter()
            .filter(|&p| self.is_selected(p))
            .collect()
    }
}

/// Per-pipeline results of [`merge`]. `None` marks an unselected pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutput {
    /// Lab pipeline result.
    pub lab: Option<ColorResult<BgrBuffer>>,
    /// Hsl pipeline result.
    pub hsl: Option<ColorResult<BgrBuffer>>,
}

impl MergeOutput {
    /// Result slot of `pipeline`.
    pub fn get(&self, pipeline: Pipeline) -> Option<&ColorResult<BgrBuffer>> {
        match pipeline {
            Pipeline::Lab => self.lab.as_ref(),
            Pipeline::Hsl => self.hsl.as_ref(),
        }
    }

    /// Returns `true` if any selected pipeline failed.
    pub fn has_failures(&self) -> bool {
        [&self.lab, &self.hsl]
            .into_iter()
            .any(|slot| matches!(slot, Some(Err(_))))
    }

    /// Results in fixed order: `[lab, hsl]`.
    pub fn into_slots(self) -> [Option<ColorResult<BgrBuffer>>; 2] {
        [self.lab, self.hsl]
    }
}

/// Runs one pipeline end to end.
///
/// # Errors
///
/// Any conversion, statistics or transfer error, e.g.
/// [`ColorError::DegenerateVariance`](crate::ColorError::DegenerateVariance)
/// when a channel is flat and `contrast` is `None`.
/// [`ColorError::NonFinite`](crate::ColorError::NonFinite) if the
/// recolored image overflows before clamping.
pub fn run_pipeline(
    pipeline: Pipeline,
    source: &BgrBuffer,
    target: &BgrBuffer,
    contrast: Option<f64>,
) -> ColorResult<BgrBuffer> {
    debug!(
        %pipeline,
        source = ?(source.width(), source.height()),
        target = ?(target.width(), target.height()),
        "merge::pipeline start"
    );

    let forward = pipeline.forward();
    let (src, tgt) = rayon::join(
        || forward.apply(&codec::decode(source, pipeline.compress())),
        || forward.apply(&codec::decode(target, pipeline.compress())),
    );
    let (src, tgt) = (src?, tgt?);

    let src_stats = ChannelStats::compute(&src)?;
    let tgt_stats = ChannelStats::compute(&tgt)?;
    debug!(
        %pipeline,
        src_mean = ?src_stats.mean,
        src_std = ?src_stats.std_dev,
        tgt_mean = ?tgt_stats.mean,
        tgt_std = ?tgt_stats.std_dev,
        "merge::stats"
    );

    let recolored = transfer(&tgt, &src_stats, &tgt_stats, contrast)?;
    let rgb = pipeline.inverse().apply(&recolored)?;
    ensure_finite(&rgb)?;

    let (lo, hi) = pipeline.clamp_range();
    let clamped = rgb.map(ColorSpaceTag::Rgb, |[r, g, b]| {
        [r.clamp(lo, hi), g.clamp(lo, hi), b.clamp(lo, hi)]
    });
    let out = codec::encode(&clamped)?;

    debug!(%pipeline, bytes = out.data().len(), "merge::pipeline done");
    Ok(out)
}

// Clamping would keep NaN and the byte cast would turn it into 0.
fn ensure_finite(image: &PixelImage) -> ColorResult<()> {
    match image
        .pixels()
        .par_iter()
        .position_first(|p| !p.iter().all(|v| v.is_finite()))
    {
        Some(pixel) => Err(ColorError::NonFinite {
            space: image.space(),
            pixel,
        }),
        None => Ok(()),
    }
}

/// Runs every selected pipeline on the same inputs.
///
/// Selected pipelines run concurrently and fail independently.
pub fn merge(source: &BgrBuffer, target: &BgrBuffer, options: &TransferOptions) -> MergeOutput {
    let run = |pipeline: Pipeline| {
        options.is_selected(pipeline).then(|| {
            let result = run_pipeline(pipeline, source, target, options.contrast);
            if let Err(e) = &result {
                warn!(%pipeline, error = %e, "merge::pipeline failed");
            }
            result
        })
    };

    let (lab, hsl) = rayon::join(|| run(Pipeline::Lab), || run(Pipeline::Hsl));
    MergeOutput { lab, hsl }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noise(width: u32, height: u32, seed: u32) -> BgrBuffer {
        let mut state = seed.wrapping_mul(2_654_435_761).max(1);
        let data = (0..width * height * 3)
            .map(|_| {
                // xorshift32
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state >> 24) as u8
            })
            .collect();
        BgrBuffer::new(data, width, height).unwrap()
    }

    #[test]
    fn test_pipeline_properties() {
        assert_eq!(Pipeline::Lab.forward().path(), &[ColorSpaceTag::Rgb, ColorSpaceTag::Lms, ColorSpaceTag::Lab]);
        assert_eq!(Pipeline::Hsl.inverse().path(), &[ColorSpaceTag::Hsl, ColorSpaceTag::Rgb]);
        assert!(Pipeline::Lab.compress());
        assert!(!Pipeline::Hsl.compress());
        assert_eq!(Pipeline::Lab.clamp_range(), (0.0, 235.0 / 255.0));
        assert_eq!(Pipeline::Hsl.slot(), 1);
        assert_eq!("HSL".parse::<Pipeline>(), Ok(Pipeline::Hsl));
        assert!("lms".parse::<Pipeline>().is_err());
        for p in Pipeline::ALL {
            assert!(p.forward().validate().is_ok());
            assert_eq!(p.forward().end(), p.working_space());
        }
    }

    #[test]
    fn test_unselected_slots_are_none() {
        let src = noise(4, 4, 1);
        let tgt = noise(4, 4, 2);
        let out = merge(&src, &tgt, &TransferOptions::only(Pipeline::Hsl));
        assert!(out.lab.is_none());
        assert!(matches!(out.hsl, Some(Ok(_))));

        let none = TransferOptions {
            lab: false,
            hsl: false,
            contrast: None,
        };
        assert_eq!(merge(&src, &tgt, &none).into_slots(), [None, None]);
    }

    #[test]
    fn test_output_has_target_dimensions() {
        let src = noise(7, 3, 3);
        let tgt = noise(5, 9, 4);
        let [lab, hsl] = merge(&src, &tgt, &TransferOptions::default()).into_slots();
        for buf in [lab.unwrap().unwrap(), hsl.unwrap().unwrap()] {
            assert_eq!((buf.width(), buf.height()), (5, 9));
            assert_eq!(buf.data().len(), 5 * 9 * 3);
            assert!(buf.is_packed());
        }
    }

    #[test]
    fn test_lab_output_respects_headroom() {
        // extreme black and white pixels mixed with noise
        let mut data = noise(8, 8, 5).into_data();
        data[..12].copy_from_slice(&[0; 12]);
        data[12..24].copy_from_slice(&[255; 12]);
        let src = BgrBuffer::new(data, 8, 8).unwrap();
        let mut tgt_data = noise(8, 8, 6).into_data();
        tgt_data[..6].copy_from_slice(&[255; 6]);
        tgt_data[6..12].copy_from_slice(&[0; 6]);
        let tgt = BgrBuffer::new(tgt_data, 8, 8).unwrap();

        let lab = run_pipeline(Pipeline::Lab, &src, &tgt, Some(3.0)).unwrap();
        // 235/255 * 255 = 235
        assert!(lab.data().iter().all(|&b| b <= 235));
    }

    #[test]
    fn test_flat_target_is_degenerate_in_both_spaces() {
        // gray target: flat in Hsl and Lab alike
        let src = noise(6, 6, 7);
        let tgt = BgrBuffer::new(vec![128; 6 * 6 * 3], 6, 6).unwrap();
        let out = merge(&src, &tgt, &TransferOptions::default());
        assert!(out.has_failures());
        assert!(out.get(Pipeline::Lab).unwrap().as_ref().unwrap_err().is_degenerate());
        assert!(out.get(Pipeline::Hsl).unwrap().as_ref().unwrap_err().is_degenerate());

        // with an override both complete
        let out = merge(&src, &tgt, &TransferOptions::default().with_contrast(Some(1.0)));
        assert!(!out.has_failures());
    }

    #[test]
    fn test_hsl_fails_lab_succeeds_independently() {
        // pure primaries: Hsl saturation and lightness are flat, Lab channels are not
        let mut data = Vec::new();
        for i in 0..16 {
            let px: [u8; 3] = match i % 3 {
                0 => [0, 0, 255],
                1 => [0, 255, 0],
                _ => [255, 0, 0],
            };
            data.extend_from_slice(&px);
        }
        let tgt = BgrBuffer::new(data, 4, 4).unwrap();
        let src = noise(4, 4, 8);
        let out = merge(&src, &tgt, &TransferOptions::default());
        assert!(matches!(out.lab, Some(Ok(_))));
        assert!(matches!(
            out.hsl,
            Some(Err(ColorError::DegenerateVariance { channel: 1, space: ColorSpaceTag::Hsl }))
        ));
    }

    #[test]
    fn test_empty_image_error() {
        let src = noise(2, 2, 9);
        let empty = BgrBuffer::new(Vec::new(), 0, 0).unwrap();
        let out = merge(&src, &empty, &TransferOptions::only(Pipeline::Lab));
        assert_eq!(out.lab, Some(Err(ColorError::EmptyImage)));
    }

    #[test]
    fn test_self_merge_hsl_is_identity() {
        let img = noise(8, 8, 10);
        let out = run_pipeline(Pipeline::Hsl, &img, &img, None).unwrap();
        for (a, b) in img.data().iter().zip(out.data()) {
            assert!((*a as i32 - *b as i32).abs() <= 1, "{a} vs {b}");
        }
    }

    #[test]
    fn test_invalid_ratio_propagates() {
        let src = noise(2, 2, 11);
        let out = merge(&src, &src, &TransferOptions::default().with_contrast(Some(f64::INFINITY)));
        assert_eq!(out.hsl, Some(Err(ColorError::InvalidRatio(f64::INFINITY))));
    }

    #[test]
    fn test_overflowing_contrast_is_reported() {
        let src = noise(4, 4, 5);
        let tgt = noise(4, 4, 6);
        let opts = TransferOptions::default().with_contrast(Some(1e6));
        let out = merge(&src, &tgt, &opts);
        assert!(matches!(
            out.lab,
            Some(Err(ColorError::NonFinite { space: ColorSpaceTag::Rgb, .. }))
        ));
        // hue wraps and saturation/lightness stay finite, so Hsl still clamps
        assert!(matches!(out.hsl, Some(Ok(_))));
    }

    #[test]
    fn test_ensure_finite_reports_first_pixel() {
        let mut pixels = vec![[0.5; 3]; 6];
        pixels[4] = [0.5, f64::NAN, 0.5];
        pixels[5] = [f64::INFINITY, 0.5, 0.5];
        let img = PixelImage::from_pixels(ColorSpaceTag::Rgb, 3, 2, pixels).unwrap();
        assert_eq!(
            ensure_finite(&img),
            Err(ColorError::NonFinite { space: ColorSpaceTag::Rgb, pixel: 4 })
        );
        assert!(ensure_finite(&PixelImage::filled(ColorSpaceTag::Rgb, 2, 2, [1e300; 3])).is_ok());
    }

    #[test]
    fn test_options_serde_roundtrip() {
        let opts = TransferOptions::only(Pipeline::Lab).with_contrast(Some(0.75));
        let yaml = serde_yaml::to_string(&opts).unwrap();
        let back: TransferOptions = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, opts);
        assert_eq!(opts.selected(), vec![Pipeline::Lab]);
    }
}
