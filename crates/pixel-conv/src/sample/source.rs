//! Frame sources the sampling layer can read from.

use std::borrow::Cow;

use image::{DynamicImage, GenericImageView, ImageBuffer, RgbaImage};

use crate::error::SampleError;

/// Anything that can hand out its pixels as an RGBA image.
///
/// A source whose width or height is zero is "not ready" (a video element
/// before its first decoded frame): sampling it yields no grid.
pub trait FrameSource {
    /// Natural `(width, height)` of the source.
    fn dimensions(&self) -> (u32, u32);

    /// The full frame as 8-bit RGBA, borrowed when no conversion is needed.
    fn rgba(&self) -> Cow<'_, RgbaImage>;

    /// False while either dimension is zero.
    fn is_ready(&self) -> bool {
        let (width, height) = self.dimensions();
        width > 0 && height > 0
    }
}

impl FrameSource for RgbaImage {
    #[inline]
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    #[inline]
    fn rgba(&self) -> Cow<'_, RgbaImage> {
        Cow::Borrowed(self)
    }
}

impl FrameSource for DynamicImage {
    #[inline]
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn rgba(&self) -> Cow<'_, RgbaImage> {
        match self {
            DynamicImage::ImageRgba8(image) => Cow::Borrowed(image),
            other => Cow::Owned(other.to_rgba8()),
        }
    }
}

/// Wrap a raw `[R, G, B, A, ...]` frame buffer (camera or canvas readback).
///
/// The buffer must hold exactly `width * height * 4` bytes. A zero-sized
/// frame with an empty buffer is accepted; it is simply not ready.
///
/// ```
/// use pixel_conv::{frame_from_rgba, FrameSource};
///
/// let frame = frame_from_rgba(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
/// assert_eq!(frame.dimensions(), (2, 1));
///
/// assert!(frame_from_rgba(2, 2, vec![0; 15]).is_err());
/// ```
pub fn frame_from_rgba(width: u32, height: u32, bytes: Vec<u8>) -> Result<RgbaImage, SampleError> {
    let expected = width as usize * height as usize * 4;
    let actual = bytes.len();
    if actual != expected {
        return Err(SampleError::BufferSize {
            width,
            height,
            actual,
        });
    }
    RgbaImage::from_raw(width, height, bytes).ok_or(SampleError::BufferSize {
        width,
        height,
        actual,
    })
}
