#![allow(clippy::module_inception, clippy::needless_range_loop)]

//! pixel-conv: 3x3 kernel convolution over pixel grids
//!
//! This library samples still images and video frames into small pixel
//! grids and filters them with fixed-size 3x3 kernels. It is the pure
//! computational core behind an interactive "CNN lab": no rendering, no
//! device access, no shared state.
//!
//! # Quick Start
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use pixel_conv::{convolve, grid_to_csv, sample_to_grid, BorderMode, DisplayMode, PresetTable};
//!
//! let presets = PresetTable::builtin();
//! let blur = presets.get("gaussian-blur").unwrap();
//!
//! let frame = RgbaImage::from_pixel(64, 48, Rgba([90, 90, 90, 255]));
//! let grid = sample_to_grid(&frame, 8).unwrap();
//! let filtered = convolve(&grid, &blur.kernel, BorderMode::Clamp);
//!
//! assert_eq!((filtered.width(), filtered.height()), (8, 6));
//! let csv = grid_to_csv(&filtered, DisplayMode::Gray);
//! assert!(csv.lines().all(|line| line == "90,90,90,90,90,90,90,90"));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! image / video frame          (anything implementing FrameSource)
//!     |
//!     v
//! sample_to_grid()             (resize to target width, keep aspect ratio)
//!     |
//!     v
//! PixelGrid                    (row-major PixelSamples: r, g, b, a, gray)
//!     |
//!     v
//! convolve(kernel, border)     (3x3 weighted sum / divisor, saturate 0..=255)
//!     |
//!     v
//! PixelGrid  --->  renderer (to_rgba_bytes)  or  grid_to_csv(mode)
//! ```
//!
//! The sampling layer and the engine are independent: either can be used
//! without the other.
//!
//! # Kernels
//!
//! A [`Kernel`] is a 3x3 weight matrix plus a divisor. The divisor is part
//! of the kernel definition, not derived from it:
//!
//! | Preset | Weights | Divisor |
//! |---|---|---|
//! | Identity | center 1 | 1 |
//! | Edge Detection | center 8, neighbors -1 | 1 |
//! | Gaussian Blur | 1 2 1 / 2 4 2 / 1 2 1 | 16 |
//! | Sharpen | center 5, 4-neighbors -1 | 1 |
//!
//! Custom kernels can use [`Kernel::with_weight_sum`], which divides by the
//! weight sum (or by 1 for zero-sum kernels).
//!
//! # Borders
//!
//! [`BorderMode::Clamp`] (default) reads out-of-range neighbors from the
//! nearest edge and filters every pixel. [`BorderMode::PassThrough`] leaves
//! the outermost ring untouched.
//!
//! # Saturation
//!
//! Weighted sums routinely leave `0..=255` (sharpen on a bright edge, edge
//! detection next to a dark pixel). Results are clamped, never wrapped, the
//! way a display or sensor saturates.

pub mod convolve;
pub mod error;
pub mod kernel;
pub mod pixel;
pub mod sample;

#[cfg(test)]
mod domain_tests;

pub use convolve::{convolve, convolve_rgba, BorderMode, Convolver};
pub use error::{ConvError, GridError, KernelError, ParseColorError, ParseModeError, SampleError};
pub use kernel::{AlgorithmPreset, Kernel, PresetTable, EDGE_DETECT, GAUSSIAN_BLUR, IDENTITY, SHARPEN};
pub use pixel::{grid_to_csv, make_sample, to_csv_cell, DisplayMode, PixelGrid, PixelSample};
pub use sample::{
    extract_grid_region, frame_from_rgba, sample_to_grid, scaled_height, FrameSource,
    MAX_GRID_DIMENSION,
};
