//! Rendering buffers back to displayable rasters
//!
//! The output side of the interop boundary: classification and differencing
//! results come back as [`PixelBuffer`]s, and the host UI displays them as
//! `image` crate rasters.

use image::RgbaImage;
use stillframe_core::PixelBuffer;

/// Render a pixel buffer as an 8-bit RGBA raster.
///
/// A lossless channel reorder of the canonical BGRA layout; the raster owns
/// independent storage. Pure, and infallible since a constructed buffer
/// always has nonzero dimensions and exactly `width * height` pixels.
pub fn to_rgba_image(buffer: &PixelBuffer) -> RgbaImage {
    let mut bytes = Vec::with_capacity(buffer.len() * 4);
    for pixel in buffer.pixels() {
        bytes.extend_from_slice(&[pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()]);
    }
    match RgbaImage::from_raw(buffer.width(), buffer.height(), bytes) {
        Some(image) => image,
        // len == width * height * 4 is a PixelBuffer construction invariant
        None => unreachable!("pixel buffer length matches its dimensions"),
    }
}
