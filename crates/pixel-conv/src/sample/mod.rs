//! Sampling and extraction: frames in, grids out.
//!
//! The sampling layer turns a still image or a live video frame into a
//! [`PixelGrid`](crate::PixelGrid) at the resolution a caller asks for:
//!
//! 1. **Whole-frame sampling** ([`sample_to_grid`]): scale the frame to a
//!    target width, keeping the aspect ratio, then read every pixel.
//! 2. **Region extraction** ([`extract_grid_region`]): copy a square patch at
//!    native resolution for close-up pixel inspection.
//!
//! Neither step depends on the convolution engine. A source that reports a
//! zero dimension is not ready and produces `None`; a live caller skips the
//! frame and tries again on the next tick.

mod sampler;
mod source;

pub use sampler::{
    extract_grid_region, sample_to_grid, scaled_height, MAX_GRID_DIMENSION, RESAMPLE_FILTER,
};
pub use source::{frame_from_rgba, FrameSource};
