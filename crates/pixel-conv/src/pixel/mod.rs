//! Pixel data model.
//!
//! - [`PixelSample`]: one RGBA picture element with derived gray and hex views
//! - [`PixelGrid`]: a rectangular, row-major grid of samples
//! - [`DisplayMode`], [`to_csv_cell`], [`grid_to_csv`]: text export

mod csv;
mod grid;
mod sample;

pub use csv::{grid_to_csv, to_csv_cell, DisplayMode};
pub use grid::PixelGrid;
pub(crate) use sample::clamp_channel;
pub use sample::{make_sample, PixelSample};
