//! PixelBuffer - the owned frame container
//!
//! A `PixelBuffer` holds one decoded frame as a contiguous row-major array
//! of canonical BGRA [`Pixel`]s plus its dimensions. Buffers are built once,
//! from a decoded source image or as the output of a differencing operation,
//! and never mutated afterwards.
//!
//! # Indexing
//!
//! `(x, y)` maps to flat index `x + y * width`. The hot paths use
//! [`PixelBuffer::pixel_unchecked`]; callers that cannot guarantee bounds use
//! [`PixelBuffer::pixel`], which returns `None` out of range.

use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// An immutable-once-built, owned, contiguous frame of BGRA pixels.
///
/// Invariant: `pixels.len() == width as usize * height as usize`, with both
/// dimensions nonzero. Enforced at every construction site, so indexed
/// access never has to re-validate.
///
/// # Examples
///
/// ```
/// use stillframe_core::{Pixel, PixelBuffer};
///
/// let frame = PixelBuffer::filled(4, 3, Pixel::grey(128)).unwrap();
/// assert_eq!(frame.width(), 4);
/// assert_eq!(frame.height(), 3);
/// assert_eq!(frame.pixel(3, 2), Some(Pixel::grey(128)));
/// assert_eq!(frame.pixel(4, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Build a buffer from an owned pixel vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero, or
    /// [`Error::LengthMismatch`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            pixels,
        })
    }

    /// Build a buffer with every pixel set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn filled(width: u32, height: u32, fill: Pixel) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize;
        Ok(PixelBuffer {
            width,
            height,
            pixels: vec![fill; len],
        })
    }

    /// Build a buffer from raw bytes already in canonical B, G, R, A order.
    ///
    /// The bytes are copied in one pass; the buffer owns independent storage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero, or
    /// [`Error::LengthMismatch`] if `bytes.len() != width * height * 4`.
    pub fn from_bgra_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Pixel::from_bgra(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(PixelBuffer {
            width,
            height,
            pixels,
        })
    }

    /// Frame width in pixels. Always nonzero.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels. Always nonzero.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count, `width * height`. Always nonzero.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false for a constructed buffer; present for slice-like APIs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The flat row-major pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Get the pixel at `(x, y)`, or `None` out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[x as usize + y as usize * self.width as usize])
    }

    /// Get the pixel at `(x, y)` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn pixel_unchecked(&self, x: u32, y: u32) -> Pixel {
        self.pixels[x as usize + y as usize * self.width as usize]
    }

    /// Serialize the buffer to bytes in canonical B, G, R, A order.
    ///
    /// Row-major, four bytes per pixel; the inverse of
    /// [`PixelBuffer::from_bgra_bytes`].
    pub fn to_bgra_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.bytes());
        }
        bytes
    }

    /// The buffer as packed little-endian 32-bit words, one per pixel.
    ///
    /// The word view carries the same bytes as the channel view; it exists
    /// for bulk copy and transmission.
    pub fn to_words(&self) -> Vec<u32> {
        self.pixels.iter().map(|p| p.word()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels() {
        let pixels = vec![Pixel::BLACK; 12];
        let buffer = PixelBuffer::from_pixels(4, 3, pixels).unwrap();
        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.height(), 3);
        assert_eq!(buffer.len(), 12);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_from_pixels_zero_dimension() {
        assert!(PixelBuffer::from_pixels(0, 3, vec![]).is_err());
        assert!(PixelBuffer::from_pixels(4, 0, vec![]).is_err());
        assert!(PixelBuffer::filled(0, 0, Pixel::BLACK).is_err());
    }

    #[test]
    fn test_from_pixels_length_mismatch() {
        let err = PixelBuffer::from_pixels(4, 3, vec![Pixel::BLACK; 11]).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 12,
                actual: 11
            }
        ));
    }

    #[test]
    fn test_row_major_indexing() {
        let mut pixels = vec![Pixel::BLACK; 6];
        pixels[1 + 2 * 2] = Pixel::WHITE; // (1, 2) in a 2x3 buffer
        let buffer = PixelBuffer::from_pixels(2, 3, pixels).unwrap();
        assert_eq!(buffer.pixel_unchecked(1, 2), Pixel::WHITE);
        assert_eq!(buffer.pixel(1, 2), Some(Pixel::WHITE));
        assert_eq!(buffer.pixel(0, 0), Some(Pixel::BLACK));
        assert_eq!(buffer.pixel(2, 0), None);
        assert_eq!(buffer.pixel(0, 3), None);
    }

    #[test]
    fn test_bgra_byte_round_trip() {
        let bytes = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let buffer = PixelBuffer::from_bgra_bytes(2, 1, &bytes).unwrap();
        assert_eq!(buffer.pixel_unchecked(0, 0), Pixel::from_bgra(1, 2, 3, 4));
        assert_eq!(buffer.pixel_unchecked(1, 0), Pixel::from_bgra(5, 6, 7, 8));
        assert_eq!(buffer.to_bgra_bytes(), bytes);
    }

    #[test]
    fn test_from_bgra_bytes_length_mismatch() {
        assert!(PixelBuffer::from_bgra_bytes(2, 1, &[0u8; 7]).is_err());
    }

    #[test]
    fn test_word_view_matches_byte_view() {
        let buffer =
            PixelBuffer::from_pixels(1, 1, vec![Pixel::from_bgra(0x11, 0x22, 0x33, 0x44)]).unwrap();
        assert_eq!(buffer.to_words(), vec![0x4433_2211]);
    }
}
