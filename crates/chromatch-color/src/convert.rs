//! Conversion graph between color spaces.
//!
//! Only the following direct edges exist:
//!
//! | From | To  | Transform |
//! |------|-----|-----------|
//! | Rgb  | Lms | `RGB_TO_LMS * max(rgb, FLOOR)` |
//! | Lms  | Rgb | `LMS_TO_RGB * 10^lms` |
//! | Lms  | Lab | `LAB_FORWARD * log10(max(lms, FLOOR))` |
//! | Lab  | Lms | `LAB_INVERSE * lab` |
//! | Rgb  | Hsl | max/min hue sector formula |
//! | Hsl  | Rgb | hue ramp formula |
//!
//! Nothing is routed implicitly. Reaching Lab from Rgb means asking for
//! the path `Rgb -> Lms -> Lab` through [`convert_chain`] or [`Chain`](crate::Chain).
//!
//! # Example
//!
//! ```rust
//! use chromatch_color::{convert, convert_chain, ColorError};
//! use chromatch_core::{ColorSpaceTag as Tag, PixelImage};
//!
//! let rgb = PixelImage::filled(Tag::Rgb, 2, 2, [0.2, 0.4, 0.6]);
//!
//! let lab = convert_chain(&rgb, &[Tag::Lms], Tag::Lab).unwrap();
//! assert_eq!(lab.space(), Tag::Lab);
//!
//! let err = convert(&rgb, Tag::Lab).unwrap_err();
//! assert_eq!(err, ColorError::unsupported(Tag::Rgb, Tag::Lab));
//! ```

use chromatch_core::{ColorSpaceTag, Pixel, PixelImage};
use chromatch_math::Vec3;
use tracing::trace;

use crate::hsl::{hsl_to_rgb, rgb_to_hsl};
use crate::matrices::{FLOOR, LAB_FORWARD, LAB_INVERSE, LMS_TO_RGB, RGB_TO_LMS};
use crate::{ColorError, ColorResult};

/// Per-pixel conversion function for one graph edge.
pub type EdgeFn = fn(Pixel) -> Pixel;

/// Rgb -> Lms.
#[inline]
pub fn rgb_to_lms(rgb: Pixel) -> Pixel {
    let v = Vec3::from_array(rgb).max(Vec3::splat(FLOOR));
    (RGB_TO_LMS * v).to_array()
}

/// Lms -> Rgb. Exponentiates the incoming values before the matrix.
#[inline]
pub fn lms_to_rgb(lms: Pixel) -> Pixel {
    (LMS_TO_RGB * Vec3::from_array(lms).exp10()).to_array()
}

/// Lms -> Lab.
#[inline]
pub fn lms_to_lab(lms: Pixel) -> Pixel {
    let v = Vec3::from_array(lms).max(Vec3::splat(FLOOR)).log10();
    (LAB_FORWARD * v).to_array()
}

/// Lab -> Lms. Output stays in the log domain.
#[inline]
pub fn lab_to_lms(lab: Pixel) -> Pixel {
    LAB_INVERSE.transform_array(lab)
}

/// Looks up the direct edge from `from` to `to`.
///
/// Returns `None` for pairs outside the table, including `from == to`.
pub fn edge(from: ColorSpaceTag, to: ColorSpaceTag) -> Option<EdgeFn> {
    use ColorSpaceTag::*;

    match (from, to) {
        (Rgb, Lms) => Some(rgb_to_lms),
        (Lms, Rgb) => Some(lms_to_rgb),
        (Lms, Lab) => Some(lms_to_lab),
        (Lab, Lms) => Some(lab_to_lms),
        (Rgb, Hsl) => Some(rgb_to_hsl),
        (Hsl, Rgb) => Some(hsl_to_rgb),
        _ => None,
    }
}

/// Returns `true` if a direct edge exists.
#[inline]
pub fn has_edge(from: ColorSpaceTag, to: ColorSpaceTag) -> bool {
    edge(from, to).is_some()
}

/// Converts an image along one direct edge.
///
/// Converting to the image's own space returns a copy.
///
/// # Errors
///
/// [`ColorError::UnsupportedConversion`] if there is no direct edge.
pub fn convert(image: &PixelImage, to: ColorSpaceTag) -> ColorResult<PixelImage> {
    let from = image.space();
    if from == to {
        return Ok(image.clone());
    }
    let f = edge(from, to).ok_or_else(|| ColorError::unsupported(from, to))?;
    trace!(%from, %to, pixels = image.len(), "convert::edge");
    Ok(image.map(to, f))
}

/// Converts an image along the explicit path `image.space() -> via... -> to`.
///
/// The whole path is checked before any pixel is touched. Steps where
/// consecutive tags are equal are no-ops.
///
/// # Errors
///
/// [`ColorError::UnsupportedConversion`] naming the first pair in the path
/// that has no direct edge.
pub fn convert_chain(
    image: &PixelImage,
    via: &[ColorSpaceTag],
    to: ColorSpaceTag,
) -> ColorResult<PixelImage> {
    let path: Vec<ColorSpaceTag> = std::iter::once(image.space())
        .chain(via.iter().copied())
        .chain(std::iter::once(to))
        .collect();
    validate_path(&path)?;
    apply_path(image, &path[1..])
}

/// Fails on the first adjacent pair of `path` with no direct edge.
pub(crate) fn validate_path(path: &[ColorSpaceTag]) -> ColorResult<()> {
    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if from != to && !has_edge(from, to) {
            return Err(ColorError::unsupported(from, to));
        }
    }
    Ok(())
}

/// Applies each hop in `steps` to `image` in order.
pub(crate) fn apply_path(image: &PixelImage, steps: &[ColorSpaceTag]) -> ColorResult<PixelImage> {
    let Some((&first, rest)) = steps.split_first() else {
        return Ok(image.clone());
    };
    let mut current = convert(image, first)?;
    for &step in rest {
        current = convert(&current, step)?;
    }
    Ok(current)
}
