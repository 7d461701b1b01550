//! Reusable kernel + border pairing.

use crate::kernel::{AlgorithmPreset, Kernel};
use crate::pixel::PixelGrid;

use super::engine::{convolve, BorderMode};

/// A kernel bound to a border policy, applied to one frame after another.
///
/// `Convolver` is `Copy` and holds no buffers: every call to
/// [`apply`](Self::apply) allocates its own output grid.
///
/// ```
/// use pixel_conv::{BorderMode, Convolver, PixelGrid, PixelSample, SHARPEN};
///
/// let convolver = Convolver::new(SHARPEN).border(BorderMode::PassThrough);
/// let grid = PixelGrid::filled(4, 4, PixelSample::opaque(9, 9, 9)).unwrap();
/// assert_eq!(convolver.apply(&grid), grid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convolver {
    kernel: Kernel,
    border: BorderMode,
}

impl Convolver {
    /// Bind `kernel` with the default [`BorderMode::Clamp`] policy.
    pub fn new(kernel: Kernel) -> Self {
        Self {
            kernel,
            border: BorderMode::default(),
        }
    }

    /// Bind a preset's kernel.
    pub fn from_preset(preset: &AlgorithmPreset) -> Self {
        Self::new(preset.kernel)
    }

    /// Set the border policy.
    #[inline]
    pub fn border(mut self, border: BorderMode) -> Self {
        self.border = border;
        self
    }

    /// The bound kernel.
    #[inline]
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// The border policy.
    #[inline]
    pub fn border_mode(&self) -> BorderMode {
        self.border
    }

    /// Convolve one grid.
    #[inline]
    pub fn apply(&self, grid: &PixelGrid) -> PixelGrid {
        convolve(grid, &self.kernel, self.border)
    }
}
