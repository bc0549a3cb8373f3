//! I/O error types
//!
//! Provides a unified error type for the decoded-image boundary. Decoding
//! itself happens in the host's image layer; the errors here cover only the
//! handoff into and out of the canonical buffer format.

use thiserror::Error;

/// Error type for decoded-image interop.
#[derive(Error, Debug)]
pub enum IoError {
    /// The decoded source reports a zero width or height
    #[error("source image has a zero dimension: {width}x{height}")]
    EmptySource { width: u32, height: u32 },

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] stillframe_core::Error),
}

/// Convenience alias for interop results.
pub type IoResult<T> = Result<T, IoError>;
