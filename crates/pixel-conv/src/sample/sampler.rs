//! Downsampling and region extraction into [`PixelGrid`]s.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::pixel::{PixelGrid, PixelSample};

use super::source::FrameSource;

/// Filter used when scaling a frame to the target resolution.
///
/// Triangle is bilinear interpolation, matching what browsers use when a
/// canvas draws a scaled image.
pub const RESAMPLE_FILTER: FilterType = FilterType::Triangle;

/// Largest grid edge the sampler produces.
pub const MAX_GRID_DIMENSION: u32 = 1024;

/// Height that keeps the source aspect ratio at `target_width`.
///
/// `round(target_width / (source_width / source_height))`, never less than 1.
/// Returns `None` when any input is zero, or when `target_width` or the
/// resulting height exceeds [`MAX_GRID_DIMENSION`].
///
/// ```
/// use pixel_conv::scaled_height;
///
/// assert_eq!(scaled_height(640, 480, 32), Some(24));
/// assert_eq!(scaled_height(1920, 1080, 64), Some(36));
/// assert_eq!(scaled_height(0, 480, 32), None);
/// assert_eq!(scaled_height(1, 100_000, 1024), None);
/// ```
pub fn scaled_height(source_width: u32, source_height: u32, target_width: u32) -> Option<u32> {
    if source_width == 0 || source_height == 0 || target_width == 0 {
        return None;
    }
    if target_width > MAX_GRID_DIMENSION {
        return None;
    }
    let aspect = source_width as f64 / source_height as f64;
    let height = (target_width as f64 / aspect).round().max(1.0);
    if height > MAX_GRID_DIMENSION as f64 {
        return None;
    }
    Some(height as u32)
}

/// Sample a whole frame into a `target_width`-wide grid.
///
/// The height follows the source aspect ratio (see [`scaled_height`]). The
/// frame is resampled with [`RESAMPLE_FILTER`] unless it already has the
/// target size. Returns `None` for a not-ready source (zero width or
/// height), a zero `target_width`, or a grid that would exceed
/// [`MAX_GRID_DIMENSION`] on either edge; the caller skips that frame.
///
/// Every call builds a fresh grid and keeps nothing between calls.
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use pixel_conv::sample_to_grid;
///
/// let frame = RgbaImage::from_pixel(640, 480, Rgba([200, 100, 50, 255]));
/// let grid = sample_to_grid(&frame, 32).unwrap();
/// assert_eq!((grid.width(), grid.height()), (32, 24));
/// assert_eq!(grid.sample(0, 0).hex(), "#c86432");
/// ```
pub fn sample_to_grid<S>(source: &S, target_width: u32) -> Option<PixelGrid>
where
    S: FrameSource + ?Sized,
{
    let (source_width, source_height) = source.dimensions();
    let target_height = scaled_height(source_width, source_height, target_width)?;

    let frame = source.rgba();
    if frame.dimensions() == (target_width, target_height) {
        return grid_from_image(&frame);
    }
    let scaled = imageops::resize(&*frame, target_width, target_height, RESAMPLE_FILTER);
    grid_from_image(&scaled)
}

/// Extract a `size x size` region at native resolution.
///
/// `size` is reduced to fit the source, and `(start_x, start_y)` is pulled
/// back so the whole region lies inside it. Returns `None` for a not-ready
/// source or `size == 0`.
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use pixel_conv::extract_grid_region;
///
/// let frame = RgbaImage::from_fn(10, 10, |x, y| Rgba([x as u8, y as u8, 0, 255]));
///
/// // Asking for a region past the right edge shifts it left.
/// let region = extract_grid_region(&frame, 9, 2, 4).unwrap();
/// assert_eq!(region.width(), 4);
/// assert_eq!(region.sample(0, 0).r(), 6);
/// assert_eq!(region.sample(0, 0).g(), 2);
/// ```
pub fn extract_grid_region<S>(source: &S, start_x: u32, start_y: u32, size: u32) -> Option<PixelGrid>
where
    S: FrameSource + ?Sized,
{
    let (source_width, source_height) = source.dimensions();
    if source_width == 0 || source_height == 0 || size == 0 {
        return None;
    }

    let frame = source.rgba();
    let (frame_width, frame_height) = frame.dimensions();
    let size = size.min(frame_width).min(frame_height);
    if size == 0 {
        return None;
    }
    let x0 = start_x.min(frame_width - size);
    let y0 = start_y.min(frame_height - size);

    let region = imageops::crop_imm(&*frame, x0, y0, size, size).to_image();
    grid_from_image(&region)
}

/// Read every pixel of `image` into a grid.
fn grid_from_image(image: &RgbaImage) -> Option<PixelGrid> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return None;
    }
    let samples = image
        .pixels()
        .map(|pixel| PixelSample::from_rgba(pixel.0))
        .collect();
    Some(PixelGrid::from_parts(width as usize, height as usize, samples))
}
