//! 3x3 convolution kernel definitions.

use crate::error::KernelError;

/// A 3x3 convolution kernel with a normalization divisor.
///
/// Each output channel is `sum(weight * neighbor) / divisor`. The divisor is
/// chosen by the caller and is not derived from the weights: the blur kernel
/// divides by its weight sum (16), while edge detection divides by 1 even
/// though its weights sum to 0.
///
/// Weights are indexed `weights[ky + 1][kx + 1]` for offsets
/// `ky, kx` in `-1..=1`, so `weights[1][1]` is the center tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    weights: [[f32; 3]; 3],
    divisor: f32,
}

impl Kernel {
    /// Create a kernel from weights and a divisor.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero or not finite. Kernels normally come from
    /// static preset tables; use [`Kernel::try_from_rows`] for values that
    /// arrive from configuration.
    pub fn new(weights: [[f32; 3]; 3], divisor: f32) -> Self {
        assert!(
            divisor != 0.0 && divisor.is_finite(),
            "kernel divisor must be a nonzero finite number, got {}",
            divisor
        );
        Self { weights, divisor }
    }

    /// Create a kernel whose divisor is the sum of its weights, or 1 when the
    /// weights sum to zero.
    ///
    /// This is the convention for user-edited kernels: a kernel that only
    /// redistributes brightness keeps the overall level, and zero-sum kernels
    /// (edge detectors) pass their raw response through.
    ///
    /// ```
    /// use pixel_conv::Kernel;
    ///
    /// let k = Kernel::with_weight_sum([[1.0, 2.0, 1.0], [2.0, 4.0, 2.0], [1.0, 2.0, 1.0]]);
    /// assert_eq!(k.divisor(), 16.0);
    ///
    /// let edge = Kernel::with_weight_sum([[0.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 0.0]]);
    /// assert_eq!(edge.divisor(), 1.0);
    /// ```
    pub fn with_weight_sum(weights: [[f32; 3]; 3]) -> Self {
        let sum: f32 = weights.iter().flatten().sum();
        let divisor = if sum == 0.0 || !sum.is_finite() { 1.0 } else { sum };
        Self::new(weights, divisor)
    }

    /// Build a kernel from untyped rows.
    ///
    /// `divisor: None` applies the [`with_weight_sum`](Self::with_weight_sum)
    /// rule.
    pub fn try_from_rows(rows: &[Vec<f32>], divisor: Option<f32>) -> Result<Self, KernelError> {
        if rows.len() != 3 || rows.iter().any(|row| row.len() != 3) {
            return Err(KernelError::BadShape { rows: rows.len() });
        }
        let mut weights = [[0.0f32; 3]; 3];
        for (dst, src) in weights.iter_mut().zip(rows) {
            dst.copy_from_slice(src);
        }
        match divisor {
            Some(d) if d == 0.0 || !d.is_finite() => Err(KernelError::InvalidDivisor(d)),
            Some(d) => Ok(Self::new(weights, d)),
            None => Ok(Self::with_weight_sum(weights)),
        }
    }

    /// Build a kernel from nine weights in row-major order.
    pub fn from_flat(values: [f32; 9], divisor: f32) -> Self {
        Self::new(
            [
                [values[0], values[1], values[2]],
                [values[3], values[4], values[5]],
                [values[6], values[7], values[8]],
            ],
            divisor,
        )
    }

    /// The weight matrix.
    #[inline]
    pub fn weights(&self) -> &[[f32; 3]; 3] {
        &self.weights
    }

    /// Weight for neighbor offset `(kx, ky)`, each in `-1..=1`.
    #[inline]
    pub fn weight(&self, kx: isize, ky: isize) -> f32 {
        self.weights[(ky + 1) as usize][(kx + 1) as usize]
    }

    /// The normalization divisor.
    #[inline]
    pub fn divisor(&self) -> f32 {
        self.divisor
    }

    /// Sum of all weights.
    pub fn weight_sum(&self) -> f32 {
        self.weights.iter().flatten().sum()
    }

    /// True for the center-only kernel with equal center weight and divisor,
    /// which maps every sample to itself.
    pub fn is_identity(&self) -> bool {
        self.weights.iter().enumerate().all(|(ky, row)| {
            row.iter().enumerate().all(|(kx, &w)| {
                if kx == 1 && ky == 1 {
                    w == self.divisor
                } else {
                    w == 0.0
                }
            })
        })
    }
}

/// Identity kernel: output equals input.
///
/// ```text
///    0   0   0
///    0   1   0
///    0   0   0     / 1
/// ```
pub const IDENTITY: Kernel = Kernel {
    weights: [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]],
    divisor: 1.0,
};

/// Laplacian-style edge detector. Flat regions map to black.
///
/// ```text
///   -1  -1  -1
///   -1   8  -1
///   -1  -1  -1     / 1
/// ```
pub const EDGE_DETECT: Kernel = Kernel {
    weights: [[-1.0, -1.0, -1.0], [-1.0, 8.0, -1.0], [-1.0, -1.0, -1.0]],
    divisor: 1.0,
};

/// 3x3 Gaussian blur approximation.
///
/// ```text
///    1   2   1
///    2   4   2
///    1   2   1     / 16
/// ```
pub const GAUSSIAN_BLUR: Kernel = Kernel {
    weights: [[1.0, 2.0, 1.0], [2.0, 4.0, 2.0], [1.0, 2.0, 1.0]],
    divisor: 16.0,
};

/// Sharpen: boosts the center against its 4-neighbors.
///
/// ```text
///    0  -1   0
///   -1   5  -1
///    0  -1   0     / 1
/// ```
pub const SHARPEN: Kernel = Kernel {
    weights: [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]],
    divisor: 1.0,
};
