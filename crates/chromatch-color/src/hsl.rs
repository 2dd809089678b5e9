//! RGB <-> HSL per-pixel conversion.
//!
//! Hue is stored in degrees in `[0, 360)`, saturation and lightness in
//! `[0, 1]`. Sector selection uses exact equality against the channel
//! maximum, and a pixel with `max == min` is achromatic (`h = s = 0`).

use chromatch_core::Pixel;

/// Converts one `[r, g, b]` pixel to `[h, s, l]`.
///
/// # Example
///
/// ```rust
/// use chromatch_color::hsl::rgb_to_hsl;
///
/// assert_eq!(rgb_to_hsl([0.0, 1.0, 0.0]), [120.0, 1.0, 0.5]);
/// assert_eq!(rgb_to_hsl([0.4, 0.4, 0.4]), [0.0, 0.0, 0.4]);
/// ```
pub fn rgb_to_hsl([r, g, b]: Pixel) -> Pixel {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, l];
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let mut h = if max == r {
        ((g - b) / 6.0) / d
    } else if max == g {
        1.0 / 3.0 + ((b - r) / 6.0) / d
    } else {
        2.0 / 3.0 + ((r - g) / 6.0) / d
    };
    if h < 0.0 {
        h += 1.0;
    }
    if h >= 1.0 {
        h -= 1.0;
    }

    [h * 360.0, s, l]
}

/// Converts one `[h, s, l]` pixel to `[r, g, b]`.
///
/// Hue outside `[0, 360)` is wrapped, so transferred hues that drift past
/// either end still land in the right sector.
pub fn hsl_to_rgb([h, s, l]: Pixel) -> Pixel {
    if s == 0.0 {
        return [l, l, l];
    }

    let hue = (h / 360.0).rem_euclid(1.0);
    let v2 = if l < 0.5 { l * (1.0 + s) } else { (l + s) - l * s };
    let v1 = 2.0 * l - v2;

    [
        hue_to_rgb(v1, v2, hue + 1.0 / 3.0),
        hue_to_rgb(v1, v2, hue),
        hue_to_rgb(v1, v2, hue - 1.0 / 3.0),
    ]
}

/// Piecewise-linear channel ramp over one hue turn.
#[inline]
fn hue_to_rgb(v1: f64, v2: f64, mut vh: f64) -> f64 {
    if vh < 0.0 {
        vh += 1.0;
    }
    if vh > 1.0 {
        vh -= 1.0;
    }

    if 6.0 * vh < 1.0 {
        v1 + (v2 - v1) * 6.0 * vh
    } else if 2.0 * vh < 1.0 {
        v2
    } else if 3.0 * vh < 2.0 {
        v1 + (v2 - v1) * (2.0 / 3.0 - vh) * 6.0
    } else {
        v1
    }
}
