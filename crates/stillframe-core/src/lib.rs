//! Stillframe Core - Pixel buffer data structures for still-frame analysis
//!
//! This crate provides the fundamental data structures used throughout the
//! stillframe analysis engine:
//!
//! - [`Pixel`] - a canonical BGRA pixel, addressable per channel or as one
//!   packed 32-bit word
//! - [`PixelBuffer`] - an owned, immutable-once-built, contiguous frame of
//!   pixels with row-major indexed access
//!
//! # Canonical pixel format
//!
//! Every algorithm in the workspace operates on the fixed 4-byte-per-pixel
//! Blue/Green/Red/Alpha layout. Decoded images in other formats are
//! converted at the boundary (see `stillframe-io`) before analysis.

pub mod buffer;
pub mod error;
pub mod pixel;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use pixel::{ALPHA, BLUE, GREEN, Pixel, RED};
