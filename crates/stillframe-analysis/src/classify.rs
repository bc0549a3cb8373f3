//! Darkness and color classification
//!
//! Decides whether a frame is too dark to be useful and whether it is a
//! color or greyscale (infrared/night) capture. The scan samples a strided
//! subset of pixels rather than every pixel; classification is approximate
//! by design and reproducible for a given stride.
//!
//! Decision order matters: a frame that fails the greyscale-ratio test is
//! judged color and never judged dark, since dark frames from trail cameras
//! are infrared captures and effectively greyscale.

use crate::error::{AnalysisError, AnalysisResult};
use stillframe_core::{Pixel, PixelBuffer};

/// Tunable thresholds for darkness classification.
///
/// These are host policy values, passed explicitly per call; the engine
/// holds no global configuration.
#[derive(Debug, Clone)]
pub struct DarknessOptions {
    /// Brightness at or below which a sampled pixel counts as dark (0-255)
    pub dark_pixel_threshold: u8,
    /// Minimum fraction of dark samples for the frame to classify as dark
    pub dark_pixel_ratio: f64,
    /// Sample every n-th pixel by flat index; must be nonzero
    pub sample_stride: usize,
    /// Maximum RGB spread for a sample to still count as greyscale
    pub color_slop: u8,
    /// Minimum fraction of greyscale samples for the frame to count as greyscale
    pub greyscale_ratio_threshold: f64,
}

impl Default for DarknessOptions {
    fn default() -> Self {
        Self {
            dark_pixel_threshold: 60,
            dark_pixel_ratio: 0.9,
            sample_stride: 20,
            color_slop: 40,
            greyscale_ratio_threshold: 0.9,
        }
    }
}

/// Result of classifying one frame.
///
/// Recomputed on demand; carries no persistent identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Whether the frame is predominantly dark
    pub is_dark: bool,
    /// Fraction of dark samples found; for a color frame this is repurposed
    /// as `1 - greyscale_ratio`, a generic distance-from-expectation signal
    pub dark_ratio: f64,
    /// Whether the frame failed the greyscale-ratio test
    pub is_color: bool,
}

/// Perceived brightness of a pixel, rounded to the nearest integer.
///
/// Asymmetric per-channel weighting: green weighted heaviest, blue least.
/// A fixed heuristic for apparent luminance, not a calibrated color model.
#[inline]
fn brightness(pixel: Pixel) -> f64 {
    let r = f64::from(pixel.red());
    let g = f64::from(pixel.green());
    let b = f64::from(pixel.blue());
    (0.299 * r + 0.5876 * g + 0.114 * b).round()
}

/// Total spread between the color channels of a pixel.
///
/// A perfectly grey pixel has delta 0; the slop allows for the small color
/// cast some cameras leave in their night shots.
#[inline]
fn rgb_delta(pixel: Pixel) -> u32 {
    let r = u32::from(pixel.red());
    let g = u32::from(pixel.green());
    let b = u32::from(pixel.blue());
    r.abs_diff(g) + g.abs_diff(b) + b.abs_diff(r)
}

/// Classify a frame as dark/light and color/greyscale.
///
/// Samples flat indices `0, stride, 2*stride, ...` and accumulates dark and
/// greyscale counts, then decides in order:
///
/// 1. If the greyscale sample fraction is below
///    `greyscale_ratio_threshold`, the frame is color and not dark.
/// 2. Otherwise the frame is effectively greyscale and is dark when the
///    dark sample fraction reaches `dark_pixel_ratio`.
///
/// Deterministic for identical inputs and options.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidParameters`] if `sample_stride` is zero,
/// and [`AnalysisError::NoSamples`] if no pixel was sampled (structurally
/// unreachable for a constructed buffer, which always has index 0).
pub fn classify(buffer: &PixelBuffer, options: &DarknessOptions) -> AnalysisResult<Classification> {
    if options.sample_stride == 0 {
        return Err(AnalysisError::InvalidParameters(
            "sample_stride must be nonzero".to_string(),
        ));
    }

    let dark_threshold = f64::from(options.dark_pixel_threshold);
    let slop = u32::from(options.color_slop);

    let mut dark_count = 0u64;
    let mut grey_count = 0u64;
    let mut total = 0u64;
    for index in (0..buffer.len()).step_by(options.sample_stride) {
        let pixel = buffer.pixels()[index];
        total += 1;
        if brightness(pixel) <= dark_threshold {
            dark_count += 1;
        }
        if rgb_delta(pixel) <= slop {
            grey_count += 1;
        }
    }
    if total == 0 {
        return Err(AnalysisError::NoSamples {
            len: buffer.len(),
            stride: options.sample_stride,
        });
    }

    let greyscale_ratio = grey_count as f64 / total as f64;
    if greyscale_ratio < options.greyscale_ratio_threshold {
        return Ok(Classification {
            is_dark: false,
            dark_ratio: 1.0 - greyscale_ratio,
            is_color: true,
        });
    }

    let dark_ratio = dark_count as f64 / total as f64;
    Ok(Classification {
        is_dark: dark_ratio >= options.dark_pixel_ratio,
        dark_ratio,
        is_color: false,
    })
}

/// Classify a frame and report only the dark/light verdict.
///
/// Convenience wrapper over [`classify`] for callers that do not need the
/// measured ratios.
///
/// # Errors
///
/// Same as [`classify`].
pub fn is_dark(buffer: &PixelBuffer, options: &DarknessOptions) -> AnalysisResult<bool> {
    Ok(classify(buffer, options)?.is_dark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(width: u32, height: u32, pixel: Pixel) -> PixelBuffer {
        PixelBuffer::filled(width, height, pixel).unwrap()
    }

    #[test]
    fn test_uniform_dark_frame() {
        let buffer = uniform(10, 10, Pixel::from_bgra(10, 10, 10, 255));
        let options = DarknessOptions {
            dark_pixel_threshold: 60,
            dark_pixel_ratio: 0.5,
            sample_stride: 1,
            ..DarknessOptions::default()
        };
        let result = classify(&buffer, &options).unwrap();
        assert!(result.is_dark);
        assert!(!result.is_color);
        assert_eq!(result.dark_ratio, 1.0);
    }

    #[test]
    fn test_saturated_color_frame() {
        // Pure red: B=0, G=0, R=255. Delta 510 dwarfs the slop, so every
        // sample is color and the greyscale ratio is 0.
        let buffer = uniform(10, 10, Pixel::from_bgra(0, 0, 255, 255));
        let result = classify(&buffer, &DarknessOptions::default()).unwrap();
        assert!(result.is_color);
        assert!(!result.is_dark);
        assert_eq!(result.dark_ratio, 1.0);
    }

    #[test]
    fn test_bright_greyscale_frame() {
        let buffer = uniform(10, 10, Pixel::grey(200));
        let result = classify(&buffer, &DarknessOptions::default()).unwrap();
        assert!(!result.is_dark);
        assert!(!result.is_color);
        assert_eq!(result.dark_ratio, 0.0);
    }

    #[test]
    fn test_brightness_weighting_is_asymmetric() {
        // Pure green reads much brighter than pure blue under the heuristic.
        assert_eq!(brightness(Pixel::from_bgra(0, 255, 0, 255)), 150.0);
        assert_eq!(brightness(Pixel::from_bgra(255, 0, 0, 255)), 29.0);
        assert_eq!(brightness(Pixel::from_bgra(0, 0, 255, 255)), 76.0);
    }

    #[test]
    fn test_brightness_at_threshold_counts_as_dark() {
        // Grey level 60 has brightness 60 exactly; <= comparison is inclusive.
        let buffer = uniform(5, 5, Pixel::grey(60));
        let options = DarknessOptions {
            sample_stride: 1,
            ..DarknessOptions::default()
        };
        let result = classify(&buffer, &options).unwrap();
        assert_eq!(result.dark_ratio, 1.0);
        assert!(result.is_dark);
    }

    #[test]
    fn test_zero_stride_rejected() {
        let buffer = uniform(5, 5, Pixel::BLACK);
        let options = DarknessOptions {
            sample_stride: 0,
            ..DarknessOptions::default()
        };
        assert!(matches!(
            classify(&buffer, &options),
            Err(AnalysisError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_stride_larger_than_buffer_samples_first_pixel() {
        let buffer = uniform(2, 2, Pixel::grey(10));
        let options = DarknessOptions {
            sample_stride: 100,
            dark_pixel_ratio: 0.5,
            ..DarknessOptions::default()
        };
        // Only index 0 is sampled; a single dark sample still classifies.
        let result = classify(&buffer, &options).unwrap();
        assert_eq!(result.dark_ratio, 1.0);
        assert!(result.is_dark);
    }

    #[test]
    fn test_deterministic() {
        let buffer = uniform(32, 32, Pixel::from_bgra(30, 70, 50, 255));
        let options = DarknessOptions::default();
        let first = classify(&buffer, &options).unwrap();
        let second = classify(&buffer, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_is_dark_convenience() {
        let buffer = uniform(10, 10, Pixel::grey(5));
        let options = DarknessOptions {
            sample_stride: 1,
            ..DarknessOptions::default()
        };
        assert!(is_dark(&buffer, &options).unwrap());
        assert!(!is_dark(&uniform(10, 10, Pixel::grey(200)), &options).unwrap());
    }
}
