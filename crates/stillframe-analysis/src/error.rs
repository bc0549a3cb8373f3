//! Error types for stillframe-analysis

use thiserror::Error;

/// Errors that can occur during frame analysis operations
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] stillframe_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// No pixels were sampled, so no ratio can be reported
    #[error("no pixels sampled: {len} pixels with stride {stride}")]
    NoSamples { len: usize, stride: usize },
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
