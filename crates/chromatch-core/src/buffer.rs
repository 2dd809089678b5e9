//! Packed B,G,R byte buffers.
//!
//! [`BgrBuffer`] owns the raw bytes exchanged with the outside world:
//! 3 bytes per pixel in blue, green, red order, rows top-to-bottom, each
//! row starting `stride` bytes after the previous one. Rows may carry
//! trailing padding (`stride > width * 3`), which is never interpreted as
//! pixel data.
//!
//! ```text
//! stride
//! |<------------------------------------------>|
//! [B G R][B G R] ... [B G R][pad pad]           <- Row 0
//! [B G R][B G R] ... [B G R][pad pad]           <- Row 1
//! |<------ width * 3 ------>|
//! ```
//!
//! Every constructor validates the geometry up front, so row access after
//! construction can only fail on an out-of-range row index.

use crate::{Error, Result};

/// Bytes per packed pixel.
pub const BYTES_PER_PIXEL: usize = 3;

/// Bounds-checked, stride-aware packed B,G,R byte buffer.
///
/// # Example
///
/// ```rust
/// use chromatch_core::BgrBuffer;
///
/// // 1x2 image with one padding byte per row
/// let data = vec![10, 20, 30, 0, 40, 50, 60, 0];
/// let buf = BgrBuffer::with_stride(data, 1, 2, 4).unwrap();
/// assert_eq!(buf.row(1).unwrap(), &[40, 50, 60]);
/// assert_eq!(buf.bgr(0, 1), Some([40, 50, 60]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BgrBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
}

impl BgrBuffer {
    /// Creates a tightly packed buffer (`stride == width * 3`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `data.len() != width * height * 3`.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let stride = width as usize * BYTES_PER_PIXEL;
        Self::with_stride(data, width, height, stride)
    }

    /// Creates a buffer whose rows are `stride` bytes apart.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidStride`] if `stride < width * 3`
    /// - [`Error::DimensionMismatch`] if `data.len() != stride * height`
    pub fn with_stride(data: Vec<u8>, width: u32, height: u32, stride: usize) -> Result<Self> {
        let min_stride = width as usize * BYTES_PER_PIXEL;
        if stride < min_stride {
            return Err(Error::InvalidStride {
                stride,
                min_stride,
                width,
            });
        }
        let expected = stride * height as usize;
        if data.len() != expected {
            return Err(Error::byte_mismatch(width, height, expected, data.len()));
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Builds a tightly packed buffer from R,G,B ordered bytes.
    ///
    /// Image decoders usually hand out RGB; this reorders each pixel into
    /// the B,G,R layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `rgb.len() != width * height * 3`.
    pub fn from_rgb8(width: u32, height: u32, rgb: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if rgb.len() != expected {
            return Err(Error::byte_mismatch(width, height, expected, rgb.len()));
        }
        let data = rgb
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|px| [px[2], px[1], px[0]])
            .collect();
        Self::new(data, width, height)
    }

    /// Returns the pixel bytes in R,G,B order, padding removed.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.rows()
            .flat_map(|row| {
                row.chunks_exact(BYTES_PER_PIXEL)
                    .flat_map(|px| [px[2], px[1], px[0]])
            })
            .collect()
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

    /// Bytes from the start of one row to the start of the next.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Bytes of pixel data in one row, excluding padding.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Returns `true` if rows carry no padding.
    #[inline]
    pub fn is_packed(&self) -> bool {
        self.stride == self.row_bytes()
    }

    /// Raw bytes including any row padding.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer and returns its raw bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Pixel bytes of row `y`, excluding padding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `y >= height`.
    pub fn row(&self, y: u32) -> Result<&[u8]> {
        if y >= self.height {
            return Err(Error::OutOfBounds {
                y,
                height: self.height,
            });
        }
        let start = y as usize * self.stride;
        Ok(&self.data[start..start + self.row_bytes()])
    }

    /// Iterates over all rows, excluding padding.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let row_bytes = self.row_bytes();
        // chunks() panics on a zero chunk size; a zero-height buffer has no data either way
        self.data
            .chunks(self.stride.max(1))
            .take(self.height as usize)
            .map(move |row| &row[..row_bytes])
    }

    /// `[b, g, r]` bytes of pixel `(x, y)`, or `None` outside the image.
    pub fn bgr(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width {
            return None;
        }
        let row = self.row(y).ok()?;
        let i = x as usize * BYTES_PER_PIXEL;
        Some([row[i], row[i + 1], row[i + 2]])
    }
}
