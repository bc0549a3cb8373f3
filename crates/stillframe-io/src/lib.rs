//! Stillframe I/O - Decoded-image interop
//!
//! The boundary between the host's image-decoding layer and the analysis
//! engine. No file or network I/O happens here; the crate only moves pixels
//! between the `image` crate's raster types and the canonical
//! [`stillframe_core::PixelBuffer`]:
//!
//! - [`from_decoded`] - canonicalize any decoded raster into a buffer
//! - [`to_rgba_image`] - render a buffer back for display

pub mod convert;
pub mod error;
pub mod render;

// Re-export core types
pub use stillframe_core;

pub use convert::from_decoded;
pub use error::{IoError, IoResult};
pub use render::to_rgba_image;
