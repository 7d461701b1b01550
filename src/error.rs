use std::path::PathBuf;

use pixel_conv::{KernelError, ParseModeError, SampleError};
use thiserror::Error;

/// Largest accepted target resolution.
pub const MAX_RESOLUTION: u32 = pixel_conv::MAX_GRID_DIMENSION;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid resolution: {0} (expected 1..=1024)")]
    InvalidResolution(u32),

    #[error("Invalid setting: {0}")]
    Setting(#[from] ParseModeError),

    #[error("Preset without an id")]
    MissingPresetId,

    #[error("Invalid preset '{id}': {source}")]
    Preset {
        id: String,
        #[source]
        source: KernelError,
    },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid kernel weight: {0:?}")]
    InvalidWeight(String),

    #[error("Invalid kernel: {0}")]
    Kernel(#[from] KernelError),

    #[error("Invalid frame rate: {0} (expected a positive number)")]
    InvalidFrameRate(f32),
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("No images found in {0}")]
    NoImages(PathBuf),

    #[error("Kernel error: {0}")]
    Kernel(#[from] KernelError),

    #[error("Sample error: {0}")]
    Sample(#[from] SampleError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
