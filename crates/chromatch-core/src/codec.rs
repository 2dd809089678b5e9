//! Pixel codec: packed B,G,R bytes to and from Rgb pixel images.
//!
//! # Decoding
//!
//! Each byte is normalized by dividing by 255. With `compress` set, the
//! result is further scaled by [`COMPRESSION`](crate::COMPRESSION)
//! (235/255), leaving headroom above the brightest input. Output channel
//! order is (R, G, B); row padding is skipped.
//!
//! # Encoding
//!
//! Each channel is multiplied by 255 and converted to a byte with a float
//! to integer cast, then written in (B, G, R) order with no row padding.
//! The cast truncates toward zero, saturates at 0 and 255 and maps NaN to
//! 0. No clamping happens here: callers clamp to the intended range first.
//!
//! Both directions run as index-preserving rayon maps.

use rayon::prelude::*;

use crate::{BgrBuffer, ColorSpaceTag, Error, Pixel, PixelImage, Result, BYTES_PER_PIXEL, COMPRESSION};

/// Decodes a B,G,R byte buffer into an Rgb pixel image.
///
/// # Example
///
/// ```rust
/// use chromatch_core::{codec, BgrBuffer, COMPRESSION};
///
/// let buf = BgrBuffer::new(vec![0, 0, 255], 1, 1).unwrap();
/// assert_eq!(codec::decode(&buf, false).pixel(0), [1.0, 0.0, 0.0]);
/// assert_eq!(codec::decode(&buf, true).pixel(0), [COMPRESSION, 0.0, 0.0]);
/// ```
pub fn decode(buffer: &BgrBuffer, compress: bool) -> PixelImage {
    let scale = if compress { COMPRESSION } else { 1.0 };
    let row_bytes = buffer.row_bytes();

    let pixels: Vec<Pixel> = if buffer.pixel_count() == 0 {
        Vec::new()
    } else {
        buffer
            .data()
            .par_chunks(buffer.stride())
            .flat_map_iter(|row| {
                row[..row_bytes]
                    .chunks_exact(BYTES_PER_PIXEL)
                    .map(move |px| {
                        [
                            px[2] as f64 / 255.0 * scale,
                            px[1] as f64 / 255.0 * scale,
                            px[0] as f64 / 255.0 * scale,
                        ]
                    })
            })
            .collect()
    };

    PixelImage::from_parts(ColorSpaceTag::Rgb, buffer.width(), buffer.height(), pixels)
}

/// Encodes an Rgb pixel image into a tightly packed B,G,R byte buffer.
///
/// # Errors
///
/// Returns [`Error::SpaceMismatch`] if the image is not in
/// [`ColorSpaceTag::Rgb`].
pub fn encode(image: &PixelImage) -> Result<BgrBuffer> {
    if image.space() != ColorSpaceTag::Rgb {
        return Err(Error::SpaceMismatch {
            expected: ColorSpaceTag::Rgb,
            got: image.space(),
        });
    }

    let data: Vec<u8> = image
        .pixels()
        .par_iter()
        .flat_map_iter(|&[r, g, b]| [to_byte(b), to_byte(g), to_byte(r)])
        .collect();

    BgrBuffer::new(data, image.width(), image.height())
}

#[inline]
fn to_byte(v: f64) -> u8 {
    (v * 255.0) as u8
}
