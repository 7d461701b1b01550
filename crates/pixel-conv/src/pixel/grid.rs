//! Rectangular, row-major grid of [`PixelSample`]s.

use crate::error::GridError;

use super::sample::PixelSample;

/// A `width x height` grid of samples in row-major order.
///
/// Both dimensions are at least 1 and the sample count always equals
/// `width * height`; every constructor checks this.
///
/// # Example
///
/// ```
/// use pixel_conv::{PixelGrid, PixelSample};
///
/// let grid = PixelGrid::from_fn(3, 2, |x, y| {
///     let v = (x * 10 + y) as u8;
///     PixelSample::opaque(v, v, v)
/// })
/// .unwrap();
///
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.sample(2, 1).r(), 21);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    samples: Vec<PixelSample>,
}

impl PixelGrid {
    /// Wrap row-major samples.
    pub fn new(width: usize, height: usize, samples: Vec<PixelSample>) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        let expected = width * height;
        if samples.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Assemble a grid whose dimensions are already known to be valid.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `samples.len() == width * height` and both are nonzero.
    pub(crate) fn from_parts(width: usize, height: usize, samples: Vec<PixelSample>) -> Self {
        debug_assert!(width > 0 && height > 0, "grid must be at least 1x1");
        debug_assert_eq!(
            samples.len(),
            width * height,
            "samples length ({}) must match width * height ({}x{}={})",
            samples.len(),
            width,
            height,
            width * height,
        );
        Self {
            width,
            height,
            samples,
        }
    }

    /// Build a grid by evaluating `f(x, y)` for every position.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, GridError>
    where
        F: FnMut(usize, usize) -> PixelSample,
    {
        check_dimensions(width, height)?;
        let mut samples = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// A grid where every position holds `sample`.
    pub fn filled(width: usize, height: usize, sample: PixelSample) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            samples: vec![sample; width * height],
        })
    }

    /// Build a grid from a flat `[R, G, B, A, ...]` buffer (canvas ImageData layout).
    pub fn from_rgba_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        let expected = width * height * 4;
        if bytes.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let samples = bytes
            .chunks_exact(4)
            .map(|px| PixelSample::new(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Build a grid from rows of 8-bit intensities, replicated across R, G and B.
    pub fn from_gray_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dimensions(width, height)?;
        let mut samples = Vec::with_capacity(width * height);
        for row in rows {
            if row.len() != width {
                return Err(GridError::LengthMismatch {
                    expected: width * height,
                    actual: rows.iter().map(Vec::len).sum(),
                });
            }
            samples.extend(row.iter().map(|&v| PixelSample::opaque(v, v, v)));
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Grid width in samples.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in samples.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at `(x, y)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&PixelSample> {
        if x < self.width && y < self.height {
            self.samples.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    #[inline]
    pub fn sample(&self, x: usize, y: usize) -> PixelSample {
        assert!(
            x < self.width && y < self.height,
            "sample ({}, {}) out of bounds for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        self.samples[y * self.width + x]
    }

    /// All samples in row-major order.
    #[inline]
    pub fn samples(&self) -> &[PixelSample] {
        &self.samples
    }

    /// Iterate over rows, each a slice of `width` samples.
    pub fn rows(&self) -> impl Iterator<Item = &[PixelSample]> + '_ {
        self.samples.chunks_exact(self.width)
    }

    /// Flatten to `[R, G, B, A, ...]` bytes for a renderer.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.samples.len() * 4);
        for sample in &self.samples {
            bytes.extend_from_slice(&sample.to_rgba());
        }
        bytes
    }

    /// Flatten to one luminance byte per sample.
    pub fn to_gray_bytes(&self) -> Vec<u8> {
        self.samples.iter().map(PixelSample::gray).collect()
    }

    /// Mean luminance over the whole grid.
    pub fn mean_gray(&self) -> f64 {
        let total: u64 = self.samples.iter().map(|s| s.gray() as u64).sum();
        total as f64 / self.samples.len() as f64
    }
}

#[inline]
fn check_dimensions(width: usize, height: usize) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::EmptyDimensions { width, height });
    }
    Ok(())
}
