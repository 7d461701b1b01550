//! 3x3 convolution over a [`PixelGrid`].

use std::fmt;
use std::str::FromStr;

use crate::error::ParseModeError;
use crate::kernel::Kernel;
use crate::pixel::{clamp_channel, PixelGrid, PixelSample};

/// How neighbors outside the grid are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    /// Out-of-range neighbor coordinates snap to the nearest edge, so every
    /// output pixel is filtered.
    #[default]
    Clamp,
    /// Only pixels with a full 3x3 neighborhood are filtered; the one-pixel
    /// border is copied from the source unchanged.
    PassThrough,
}

impl BorderMode {
    /// Keyword used in configuration and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            BorderMode::Clamp => "clamp",
            BorderMode::PassThrough => "pass-through",
        }
    }
}

impl fmt::Display for BorderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorderMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(BorderMode::Clamp),
            "pass-through" | "passthrough" | "pass_through" => Ok(BorderMode::PassThrough),
            _ => Err(ParseModeError {
                kind: "border mode",
                input: s.to_string(),
            }),
        }
    }
}

/// Apply `kernel` to every pixel of `grid`.
///
/// For each output position the 3x3 neighborhood is visited; the weight at
/// `[ky + 1][kx + 1]` multiplies the R, G and B of the neighbor at
/// `(x + kx, y + ky)` and each channel accumulates separately. Totals are
/// divided by the kernel's divisor, rounded, and saturated to `0..=255`.
/// Alpha is not convolved: filtered pixels are fully opaque.
///
/// The identity kernel returns a copy of the input.
///
/// # Example
///
/// ```
/// use pixel_conv::{convolve, BorderMode, PixelGrid, GAUSSIAN_BLUR};
///
/// let grid = PixelGrid::from_gray_rows(&[
///     vec![80, 80, 80, 80, 80],
///     vec![80, 180, 180, 180, 80],
///     vec![80, 180, 220, 180, 80],
///     vec![80, 180, 180, 180, 80],
///     vec![80, 80, 80, 80, 80],
/// ])
/// .unwrap();
///
/// let blurred = convolve(&grid, &GAUSSIAN_BLUR, BorderMode::Clamp);
/// assert_eq!(blurred.sample(2, 2).r(), 190);
/// ```
pub fn convolve(grid: &PixelGrid, kernel: &Kernel, border: BorderMode) -> PixelGrid {
    if kernel.is_identity() {
        return grid.clone();
    }

    let width = grid.width();
    let height = grid.height();
    let mut samples = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let sample = match border {
                BorderMode::Clamp => convolve_at_clamped(grid, kernel, x, y),
                BorderMode::PassThrough if is_interior(x, y, width, height) => {
                    convolve_at_interior(grid, kernel, x, y)
                }
                BorderMode::PassThrough => grid.sample(x, y),
            };
            samples.push(sample);
        }
    }

    PixelGrid::from_parts(width, height, samples)
}

/// Convolve a flat RGBA buffer in place of a grid.
///
/// Convenience for callers holding canvas-style `[R, G, B, A, ...]` bytes.
/// Returns `None` when the buffer length doesn't match `width * height * 4`
/// or a dimension is zero.
pub fn convolve_rgba(
    bytes: &[u8],
    width: usize,
    height: usize,
    kernel: &Kernel,
    border: BorderMode,
) -> Option<Vec<u8>> {
    let grid = PixelGrid::from_rgba_bytes(width, height, bytes).ok()?;
    Some(convolve(&grid, kernel, border).to_rgba_bytes())
}

#[inline]
fn is_interior(x: usize, y: usize, width: usize, height: usize) -> bool {
    x >= 1 && y >= 1 && x + 1 < width && y + 1 < height
}

#[inline]
fn convolve_at_clamped(grid: &PixelGrid, kernel: &Kernel, x: usize, y: usize) -> PixelSample {
    let max_x = grid.width() as isize - 1;
    let max_y = grid.height() as isize - 1;
    let mut acc = [0.0f32; 3];

    for ky in -1isize..=1 {
        let sy = (y as isize + ky).clamp(0, max_y) as usize;
        for kx in -1isize..=1 {
            let sx = (x as isize + kx).clamp(0, max_x) as usize;
            accumulate(&mut acc, kernel.weight(kx, ky), grid.sample(sx, sy));
        }
    }

    finish(acc, kernel.divisor())
}

#[inline]
fn convolve_at_interior(grid: &PixelGrid, kernel: &Kernel, x: usize, y: usize) -> PixelSample {
    let mut acc = [0.0f32; 3];

    for ky in -1isize..=1 {
        let sy = (y as isize + ky) as usize;
        for kx in -1isize..=1 {
            let sx = (x as isize + kx) as usize;
            accumulate(&mut acc, kernel.weight(kx, ky), grid.sample(sx, sy));
        }
    }

    finish(acc, kernel.divisor())
}

#[inline]
fn accumulate(acc: &mut [f32; 3], weight: f32, sample: PixelSample) {
    if weight == 0.0 {
        return;
    }
    acc[0] += weight * sample.r() as f32;
    acc[1] += weight * sample.g() as f32;
    acc[2] += weight * sample.b() as f32;
}

#[inline]
fn finish(acc: [f32; 3], divisor: f32) -> PixelSample {
    PixelSample::new(
        clamp_channel(acc[0] / divisor),
        clamp_channel(acc[1] / divisor),
        clamp_channel(acc[2] / divisor),
        255,
    )
}
