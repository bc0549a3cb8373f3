//! Stillframe - Pixel buffer analysis for still-camera frames
//!
//! Stillframe classifies and compares still-camera frames at the pixel
//! level, answering two operator questions: is this frame too dark to be
//! useful, and does it show something different from its temporal
//! neighbors.
//!
//! # Overview
//!
//! - Canonical BGRA pixel buffers with indexed access
//! - Darkness and color/greyscale classification under tunable thresholds
//! - Pairwise and three-frame combined difference images
//! - Interop with the `image` crate at the decoded-raster boundary
//!
//! # Example
//!
//! ```
//! use stillframe::{Pixel, PixelBuffer};
//! use stillframe::analysis::{DarknessOptions, classify};
//!
//! let frame = PixelBuffer::filled(640, 480, Pixel::grey(15)).unwrap();
//! let result = classify(&frame, &DarknessOptions::default()).unwrap();
//! assert!(result.is_dark);
//! assert!(!result.is_color);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use stillframe_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use stillframe_analysis as analysis;
pub use stillframe_io as io;
