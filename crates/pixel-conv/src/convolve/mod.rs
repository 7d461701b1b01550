//! The convolution engine.
//!
//! A single implementation serves every caller. Boundary handling is an
//! explicit [`BorderMode`] argument rather than a property of the call site:
//!
//! - [`BorderMode::Clamp`] (default): neighbors outside the grid are read from
//!   the nearest edge pixel, so the whole grid is filtered.
//! - [`BorderMode::PassThrough`]: the outermost ring of pixels is copied from
//!   the source and only the interior is filtered.
//!
//! The two policies agree everywhere except on that outer ring.

mod convolver;
mod engine;

pub use convolver::Convolver;
pub use engine::{convolve, convolve_rgba, BorderMode};
