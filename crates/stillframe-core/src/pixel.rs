//! Canonical BGRA pixel
//!
//! All analysis operates on a single 4-byte-per-pixel layout: Blue, Green,
//! Red, Alpha at fixed byte offsets. A pixel is addressable two ways:
//!
//! - per channel, by name (`blue()`, `green()`, `red()`, `alpha()`)
//! - as one packed little-endian 32-bit word (`word()` / `from_word()`)
//!
//! Both views alias the same four bytes, so a buffer can be bulk-copied or
//! transmitted as 32-bit words while algorithms address channels by name
//! without shifting or masking. The word view is a safe reinterpretation of
//! the byte array, not pointer aliasing.

/// Blue channel (byte 0)
pub const BLUE: usize = 0;
/// Green channel (byte 1)
pub const GREEN: usize = 1;
/// Red channel (byte 2)
pub const RED: usize = 2;
/// Alpha channel (byte 3)
pub const ALPHA: usize = 3;

/// A canonical BGRA pixel: four 8-bit channels in one 4-byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Pixel([u8; 4]);

impl Pixel {
    /// Fully opaque black.
    pub const BLACK: Pixel = Pixel([0, 0, 0, 255]);

    /// Fully opaque white.
    pub const WHITE: Pixel = Pixel([255, 255, 255, 255]);

    /// Compose a pixel from channel values in canonical order.
    #[inline]
    pub const fn from_bgra(blue: u8, green: u8, red: u8, alpha: u8) -> Self {
        Pixel([blue, green, red, alpha])
    }

    /// Compose a pixel from RGBA channel order (the `image` crate convention).
    #[inline]
    pub const fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Pixel([blue, green, red, alpha])
    }

    /// Compose an opaque greyscale pixel with B = G = R = `level`.
    #[inline]
    pub const fn grey(level: u8) -> Self {
        Pixel([level, level, level, 255])
    }

    /// Reconstruct a pixel from its packed little-endian word.
    #[inline]
    pub const fn from_word(word: u32) -> Self {
        Pixel(word.to_le_bytes())
    }

    /// The packed 32-bit view: blue in the least significant byte.
    #[inline]
    pub const fn word(self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    /// The raw channel bytes in canonical B, G, R, A order.
    #[inline]
    pub const fn bytes(self) -> [u8; 4] {
        self.0
    }

    /// Blue channel value.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0[BLUE]
    }

    /// Green channel value.
    #[inline]
    pub const fn green(self) -> u8 {
        self.0[GREEN]
    }

    /// Red channel value.
    #[inline]
    pub const fn red(self) -> u8 {
        self.0[RED]
    }

    /// Alpha channel value.
    #[inline]
    pub const fn alpha(self) -> u8 {
        self.0[ALPHA]
    }

    /// Return a copy with one channel replaced, leaving the others untouched.
    #[inline]
    pub const fn with_channel(self, channel: usize, value: u8) -> Self {
        let mut bytes = self.0;
        bytes[channel] = value;
        Pixel(bytes)
    }
}
