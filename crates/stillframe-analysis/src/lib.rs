//! Stillframe Analysis - Classification and differencing of still frames
//!
//! This crate holds the algorithmic core of the stillframe engine:
//!
//! - **Darkness classification** ([`classify`]): strided scan deciding
//!   dark/light and color/greyscale under tunable thresholds
//! - **Frame differencing** ([`difference`]): pairwise and three-frame
//!   combined difference images
//! - **Frame statistics** ([`statistics`]): whole-frame luminosity and
//!   coloration means, black-frame check
//!
//! Every operation is a stateless, synchronous, pure transformation over
//! immutable [`stillframe_core::PixelBuffer`]s: owned or borrowed input in,
//! freshly owned output out, no shared mutable state. Calls are safe from
//! any thread; batch orchestration and cancellation belong to the host.

pub mod classify;
pub mod difference;
pub mod error;
pub mod statistics;

// Re-export core types
pub use stillframe_core;

pub use classify::{Classification, DarknessOptions, classify, is_dark};
pub use difference::{combined_difference, difference};
pub use error::{AnalysisError, AnalysisResult};
pub use statistics::{is_black, luminosity_and_coloration};
