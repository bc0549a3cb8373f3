//! stillframe-test - Synthetic frame builders for regression tests
//!
//! Camera-trap test fixtures are awkward to check into a repository, so the
//! regression tests build small deterministic frames instead: uniform fills,
//! gradients, and frames with a planted rectangular "subject". All builders
//! panic on invalid dimensions; they are test-only constructors.

use stillframe_core::{Pixel, PixelBuffer};

/// A uniform frame with every pixel set to `fill`.
pub fn uniform_frame(width: u32, height: u32, fill: Pixel) -> PixelBuffer {
    PixelBuffer::filled(width, height, fill).expect("valid test dimensions")
}

/// An opaque greyscale frame whose level ramps 0..=255 left to right.
///
/// Each column x gets level `x * 255 / (width - 1)` (a single column is
/// all-zero).
pub fn horizontal_gradient_frame(width: u32, height: u32) -> PixelBuffer {
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for _y in 0..height {
        for x in 0..width {
            let level = if width == 1 {
                0
            } else {
                (x as usize * 255 / (width as usize - 1)) as u8
            };
            pixels.push(Pixel::grey(level));
        }
    }
    PixelBuffer::from_pixels(width, height, pixels).expect("valid test dimensions")
}

/// A uniform `background` frame with an axis-aligned `subject` rectangle.
///
/// The rectangle spans `[x0, x0 + w) x [y0, y0 + h)` and must lie inside the
/// frame. Used to model a foreground object present in one frame of a
/// temporal triple.
pub fn frame_with_subject(
    width: u32,
    height: u32,
    background: Pixel,
    subject: Pixel,
    (x0, y0, w, h): (u32, u32, u32, u32),
) -> PixelBuffer {
    assert!(x0 + w <= width && y0 + h <= height, "subject out of frame");
    let mut pixels = vec![background; width as usize * height as usize];
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            pixels[x as usize + y as usize * width as usize] = subject;
        }
    }
    PixelBuffer::from_pixels(width, height, pixels).expect("valid test dimensions")
}
