//! Convolution kernels and presets.
//!
//! The kernel size is fixed at 3x3. A [`Kernel`] pairs the weight matrix
//! with a caller-chosen divisor; an [`AlgorithmPreset`] names a kernel and
//! carries the description and formula shown to users. [`PresetTable`]
//! holds the presets available to a running program.

mod kernel;
mod preset;

pub use kernel::{Kernel, EDGE_DETECT, GAUSSIAN_BLUR, IDENTITY, SHARPEN};
pub use preset::{AlgorithmPreset, PresetTable};
