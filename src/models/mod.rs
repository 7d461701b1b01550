pub mod config;

pub use config::{parse_kernel, validate_resolution, AppConfig, PresetConfig};
