//! Frame differencing
//!
//! Produces greyscale difference images used to highlight change between
//! temporally adjacent frames:
//!
//! - [`difference`] - pairwise mean per-channel absolute difference
//! - [`combined_difference`] - three-frame gated difference that surfaces
//!   a subject visible in one frame but absent from both neighbors
//!
//! Inputs of differing size are silently clipped to the minimum shared
//! width and height, never rejected. Output buffers are always opaque with
//! B = G = R (a greyscale encoding of change magnitude).

use crate::error::AnalysisResult;
use stillframe_core::{Pixel, PixelBuffer};

/// Mean of the per-channel differences, truncating each term.
///
/// `b/3 + g/3 + r/3` rather than `(b+g+r)/3`; the per-term truncation is
/// kept for compatibility with downstream tools calibrated against it.
#[inline]
fn channel_mean(b: u8, g: u8, r: u8) -> u8 {
    b / 3 + g / 3 + r / 3
}

/// Gate a channel difference pair against the noise threshold.
///
/// Reports magnitude only where the subject frame differs from both
/// neighbors; a channel within threshold of either neighbor is suppressed
/// to exactly 0.
#[inline]
fn gate(threshold: u8, d1: u8, d2: u8) -> u8 {
    if d1 > threshold && d2 > threshold {
        ((u16::from(d1) + u16::from(d2)) / 2) as u8
    } else {
        0
    }
}

/// Visual difference between two frames.
///
/// Each output pixel encodes the mean per-channel absolute difference of
/// the corresponding input pixels as an opaque grey level. Output
/// dimensions are `(min(widths), min(heights))`; coordinates are re-derived
/// per buffer, so differing-width inputs compare aligned pixels within the
/// clipped region. Symmetric in its arguments.
///
/// # Errors
///
/// None in practice; the output buffer dimensions are nonzero whenever the
/// inputs are constructed buffers.
pub fn difference(a: &PixelBuffer, b: &PixelBuffer) -> AnalysisResult<PixelBuffer> {
    let width = a.width().min(b.width());
    let height = a.height().min(b.height());

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let pa = a.pixel_unchecked(x, y);
            let pb = b.pixel_unchecked(x, y);
            let db = pa.blue().abs_diff(pb.blue());
            let dg = pa.green().abs_diff(pb.green());
            let dr = pa.red().abs_diff(pb.red());
            pixels.push(Pixel::grey(channel_mean(db, dg, dr)));
        }
    }
    Ok(PixelBuffer::from_pixels(width, height, pixels)?)
}

/// Visual difference of a frame against both of its temporal neighbors.
///
/// For each channel, the absolute differences against the two neighbors are
/// computed independently and gated: a channel contributes
/// `(d1 + d2) / 2` only when both differences exceed `threshold`, and 0
/// otherwise. The gated channels are then averaged into an opaque grey
/// level. This suppresses sub-threshold channel noise and highlights a
/// foreground subject present in `main` but in neither neighbor.
///
/// Output dimensions are the minimum width and height across all three
/// inputs. Defined for any `threshold` in 0..=255.
///
/// # Errors
///
/// None in practice, as for [`difference`].
pub fn combined_difference(
    main: &PixelBuffer,
    neighbor1: &PixelBuffer,
    neighbor2: &PixelBuffer,
    threshold: u8,
) -> AnalysisResult<PixelBuffer> {
    let width = main.width().min(neighbor1.width()).min(neighbor2.width());
    let height = main
        .height()
        .min(neighbor1.height())
        .min(neighbor2.height());

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let pm = main.pixel_unchecked(x, y);
            let p1 = neighbor1.pixel_unchecked(x, y);
            let p2 = neighbor2.pixel_unchecked(x, y);

            let b = gate(
                threshold,
                pm.blue().abs_diff(p1.blue()),
                pm.blue().abs_diff(p2.blue()),
            );
            let g = gate(
                threshold,
                pm.green().abs_diff(p1.green()),
                pm.green().abs_diff(p2.green()),
            );
            let r = gate(
                threshold,
                pm.red().abs_diff(p1.red()),
                pm.red().abs_diff(p2.red()),
            );
            pixels.push(Pixel::grey(channel_mean(b, g, r)));
        }
    }
    Ok(PixelBuffer::from_pixels(width, height, pixels)?)
}
