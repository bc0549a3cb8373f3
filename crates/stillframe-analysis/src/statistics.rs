//! Whole-frame brightness and coloration statistics
//!
//! Unlike the strided classifier, these scan every pixel. They back the
//! host's interactive threshold dialog, which shows the operator how bright
//! and how colored the current frame measures while they tune thresholds.

use stillframe_core::PixelBuffer;

/// Mean perceived luminosity and mean coloration of a frame.
///
/// Luminosity is the per-pixel brightness heuristic
/// (0.299 R + 0.5876 G + 0.114 B) averaged over the frame and normalized by
/// 255, giving 0.0 for black and ~1.0 for white. Coloration is the RGB
/// spread |R-G| + |G-B| + |B-R| averaged and normalized by 255, giving 0.0
/// for perfect greyscale and up to 2.0 for saturated primaries.
pub fn luminosity_and_coloration(buffer: &PixelBuffer) -> (f64, f64) {
    let mut luminosity_total = 0.0f64;
    let mut coloration_total = 0u64;
    for pixel in buffer.pixels() {
        let r = f64::from(pixel.red());
        let g = f64::from(pixel.green());
        let b = f64::from(pixel.blue());
        luminosity_total += 0.299 * r + 0.5876 * g + 0.114 * b;

        let r = u64::from(pixel.red());
        let g = u64::from(pixel.green());
        let b = u64::from(pixel.blue());
        coloration_total += r.abs_diff(g) + g.abs_diff(b) + b.abs_diff(r);
    }

    let count = buffer.len() as f64;
    (
        luminosity_total / (255.0 * count),
        coloration_total as f64 / (255.0 * count),
    )
}

/// Whether every pixel in the frame is black in B, G, and R.
///
/// Alpha is ignored. Used on initial video frames, which some cameras emit
/// entirely black.
pub fn is_black(buffer: &PixelBuffer) -> bool {
    buffer
        .pixels()
        .iter()
        .all(|p| p.blue() == 0 && p.green() == 0 && p.red() == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stillframe_core::Pixel;

    #[test]
    fn test_luminosity_of_uniform_grey() {
        let buffer = PixelBuffer::filled(8, 8, Pixel::grey(128)).unwrap();
        let (luminosity, coloration) = luminosity_and_coloration(&buffer);
        assert!((luminosity - 128.0 * 1.0006 / 255.0).abs() < 1e-3);
        assert_eq!(coloration, 0.0);
    }

    #[test]
    fn test_coloration_of_pure_red() {
        let buffer = PixelBuffer::filled(4, 4, Pixel::from_bgra(0, 0, 255, 255)).unwrap();
        let (_, coloration) = luminosity_and_coloration(&buffer);
        assert_eq!(coloration, 2.0);
    }

    #[test]
    fn test_is_black() {
        assert!(is_black(
            &PixelBuffer::filled(3, 3, Pixel::BLACK).unwrap()
        ));
        // Alpha does not participate
        assert!(is_black(
            &PixelBuffer::filled(3, 3, Pixel::from_bgra(0, 0, 0, 0)).unwrap()
        ));
        assert!(!is_black(
            &PixelBuffer::filled(3, 3, Pixel::from_bgra(0, 1, 0, 255)).unwrap()
        ));
    }
}
