//! Error types for the pixel-conv crate.
//!
//! Every fallible operation in the crate reports one of the small error
//! enums below. [`ConvError`] wraps all of them into a single type for
//! convenient `?` propagation in application code.

use std::fmt;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// A character that is not a hexadecimal digit
    InvalidDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidDigit(c) => {
                write!(f, "invalid hex character: {:?}", c)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero
    EmptyDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// Sample (or byte) count doesn't match the requested dimensions
    LengthMismatch {
        /// Number of elements the dimensions require
        expected: usize,
        /// Number of elements supplied
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyDimensions { width, height } => {
                write!(f, "grid dimensions must be at least 1x1, got {}x{}", width, height)
            }
            GridError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "grid data length mismatch: expected {} elements, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Error type for kernels built from untyped rows (configuration input).
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Weights are not exactly 3 rows of 3 columns
    BadShape {
        /// Number of rows supplied
        rows: usize,
    },
    /// Divisor is zero or not a finite number
    InvalidDivisor(f32),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::BadShape { rows } => {
                write!(f, "kernel must be 3x3 (got {} rows or a ragged row)", rows)
            }
            KernelError::InvalidDivisor(d) => {
                write!(f, "kernel divisor must be a nonzero finite number, got {}", d)
            }
        }
    }
}

impl std::error::Error for KernelError {}

/// Error type for parsing the small string-keyed enums
/// ([`DisplayMode`](crate::DisplayMode), [`BorderMode`](crate::BorderMode)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError {
    /// What was being parsed ("display mode", "border mode")
    pub kind: &'static str,
    /// The rejected input
    pub input: String,
}

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.kind, self.input)
    }
}

impl std::error::Error for ParseModeError {}

/// Error type for wrapping raw frame buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// RGBA buffer length doesn't equal `width * height * 4`
    BufferSize {
        /// Frame width
        width: u32,
        /// Frame height
        height: u32,
        /// Supplied buffer length in bytes
        actual: usize,
    },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::BufferSize {
                width,
                height,
                actual,
            } => write!(
                f,
                "RGBA frame {}x{} needs {} bytes, got {}",
                width,
                height,
                *width as usize * *height as usize * 4,
                actual
            ),
        }
    }
}

impl std::error::Error for SampleError {}

/// Unified error type for the pixel-conv public API.
///
/// # Example
///
/// ```
/// use pixel_conv::{ConvError, PixelSample};
///
/// fn parse(s: &str) -> Result<PixelSample, ConvError> {
///     Ok(s.parse::<PixelSample>()?)
/// }
///
/// assert!(parse("#ff0000").is_ok());
/// assert!(parse("#ff00").is_err());
/// ```
#[derive(Debug)]
pub enum ConvError {
    /// Grid construction error
    Grid(GridError),
    /// Kernel validation error
    Kernel(KernelError),
    /// Hex color parsing error
    ParseColor(ParseColorError),
    /// Mode keyword parsing error
    ParseMode(ParseModeError),
    /// Frame buffer error
    Sample(SampleError),
}

impl fmt::Display for ConvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvError::Grid(err) => write!(f, "grid error: {}", err),
            ConvError::Kernel(err) => write!(f, "kernel error: {}", err),
            ConvError::ParseColor(err) => write!(f, "color parse error: {}", err),
            ConvError::ParseMode(err) => write!(f, "mode parse error: {}", err),
            ConvError::Sample(err) => write!(f, "sample error: {}", err),
        }
    }
}

impl std::error::Error for ConvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvError::Grid(err) => Some(err),
            ConvError::Kernel(err) => Some(err),
            ConvError::ParseColor(err) => Some(err),
            ConvError::ParseMode(err) => Some(err),
            ConvError::Sample(err) => Some(err),
        }
    }
}

impl From<GridError> for ConvError {
    fn from(err: GridError) -> Self {
        ConvError::Grid(err)
    }
}

impl From<KernelError> for ConvError {
    fn from(err: KernelError) -> Self {
        ConvError::Kernel(err)
    }
}

impl From<ParseColorError> for ConvError {
    fn from(err: ParseColorError) -> Self {
        ConvError::ParseColor(err)
    }
}

impl From<ParseModeError> for ConvError {
    fn from(err: ParseModeError) -> Self {
        ConvError::ParseMode(err)
    }
}

impl From<SampleError> for ConvError {
    fn from(err: SampleError) -> Self {
        ConvError::Sample(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_error_display() {
        let err = GridError::EmptyDimensions {
            width: 0,
            height: 4,
        };
        assert_eq!(err.to_string(), "grid dimensions must be at least 1x1, got 0x4");

        let err = GridError::LengthMismatch {
            expected: 9,
            actual: 8,
        };
        assert_eq!(
            err.to_string(),
            "grid data length mismatch: expected 9 elements, got 8"
        );
    }

    #[test]
    fn test_parse_color_error_display() {
        let err = ParseColorError::InvalidDigit('+');
        assert_eq!(err.to_string(), "invalid hex character: '+'");
    }

    #[test]
    fn test_sample_error_display() {
        let err = SampleError::BufferSize {
            width: 2,
            height: 2,
            actual: 15,
        };
        assert_eq!(err.to_string(), "RGBA frame 2x2 needs 16 bytes, got 15");
    }

    #[test]
    fn test_conv_error_wraps_source() {
        use std::error::Error;

        let err: ConvError = KernelError::InvalidDivisor(0.0).into();
        assert!(err.to_string().starts_with("kernel error:"));
        assert!(err.source().is_some());
    }
}
