//! Canonicalization of decoded images
//!
//! Converts any raster the host's decoding layer produces (an `image`
//! crate [`DynamicImage`], whatever its native pixel format) into the
//! canonical BGRA [`PixelBuffer`] all analysis operates on.

use crate::error::{IoError, IoResult};
use image::DynamicImage;
use stillframe_core::{Pixel, PixelBuffer};

/// Canonicalize a decoded image into an owned BGRA pixel buffer.
///
/// Non-BGRA sources are first expanded to 8-bit RGBA (a lossless
/// reinterpretation for the standard formats; precision loss for exotic
/// depths is accepted), then every pixel is copied once into one contiguous
/// owned buffer, row-major, with red and blue swapped into canonical
/// order. The result shares no memory with the source.
///
/// This is the most expensive step for large frames since it touches every
/// pixel; the copy runs in a single pass over the raw sample slice.
///
/// # Errors
///
/// Returns [`IoError::EmptySource`] if the source reports a zero width or
/// height. A zero-dimension source must never become an empty buffer whose
/// indexing other operations would silently mis-use.
pub fn from_decoded(source: &DynamicImage) -> IoResult<PixelBuffer> {
    let width = source.width();
    let height = source.height();
    if width == 0 || height == 0 {
        return Err(IoError::EmptySource { width, height });
    }

    let rgba = source.to_rgba8();
    let pixels = rgba
        .as_raw()
        .chunks_exact(4)
        .map(|c| Pixel::from_rgba(c[0], c[1], c[2], c[3]))
        .collect();
    Ok(PixelBuffer::from_pixels(width, height, pixels)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_channel_order_swapped() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([1, 2, 3, 4]));
        img.put_pixel(1, 0, Rgba([200, 100, 50, 255]));

        let buffer = from_decoded(&DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(buffer.pixel_unchecked(0, 0), Pixel::from_bgra(3, 2, 1, 4));
        assert_eq!(
            buffer.pixel_unchecked(1, 0),
            Pixel::from_bgra(50, 100, 200, 255)
        );
    }

    #[test]
    fn test_non_rgba_source_is_converted() {
        // An 8-bit luma source expands to R=G=B with opaque alpha.
        let mut img = image::GrayImage::new(1, 1);
        img.put_pixel(0, 0, image::Luma([90]));

        let buffer = from_decoded(&DynamicImage::ImageLuma8(img)).unwrap();
        assert_eq!(buffer.pixel_unchecked(0, 0), Pixel::grey(90));
    }

    #[test]
    fn test_dimensions_preserved() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(7, 5));
        let buffer = from_decoded(&img).unwrap();
        assert_eq!(buffer.width(), 7);
        assert_eq!(buffer.height(), 5);
        assert_eq!(buffer.len(), 35);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(0, 5));
        assert!(matches!(
            from_decoded(&img),
            Err(IoError::EmptySource {
                width: 0,
                height: 5
            })
        ));
    }
}
