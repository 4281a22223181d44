use colour_volumes::ColourError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning a PNG file into an in-memory RGB image.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("Unsupported PNG layout: {color_type:?} at {bit_depth:?}")]
    UnsupportedLayout {
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
    },

    #[error("Decoded buffer does not match dimensions {width}x{height}")]
    BufferMismatch { width: u32, height: u32 },
}

/// Failures while reading or validating the YAML configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid resolution in config: {0} (must be within 0.0..=1.0)")]
    InvalidResolution(f32),
}

/// Failures of a complete load-and-analyze run.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Analysis error: {0}")]
    Colour(#[from] ColourError),

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
