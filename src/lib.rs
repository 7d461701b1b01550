//! convlab - 3x3 convolution lab
//!
//! Host application around the `pixel-conv` engine: configuration, image
//! loading and the frame-driven live processor.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
