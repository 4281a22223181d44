//! Error type for colour analysis.
//!
//! Every failure is a pure input or consistency problem; nothing here is
//! transient, so callers should not retry.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ColourError>;

/// Errors returned by sampling, classification and aggregation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColourError {
    /// Sampling resolution outside `0.0..=1.0` (or NaN).
    #[error("invalid resolution {resolution}: must be within 0.0..=1.0")]
    InvalidArgument {
        /// The rejected resolution value
        resolution: f32,
    },

    /// The image produced no samples, so there is nothing to average.
    #[error("image produced no samples ({width}x{height})")]
    DegenerateInput {
        /// Source image width
        width: u32,
        /// Source image height
        height: u32,
    },

    /// A hue value fell outside every hue bucket.
    #[error("hue {hue} is not covered by any hue bucket")]
    ClassificationGap {
        /// The unmatched hue
        hue: f32,
    },
}
