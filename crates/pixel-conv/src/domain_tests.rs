//! Domain-critical regression tests for pixel-conv.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::convolve::{convolve, BorderMode, Convolver};
    use crate::kernel::{Kernel, PresetTable, EDGE_DETECT, GAUSSIAN_BLUR, IDENTITY, SHARPEN};
    use crate::pixel::{grid_to_csv, DisplayMode, PixelGrid, PixelSample};
    use crate::sample::{extract_grid_region, sample_to_grid};
    use image::{Rgba, RgbaImage};

    /// Deterministic pseudo-random grid (LCG) so failures reproduce.
    fn noise_grid(width: usize, height: usize, seed: u32) -> PixelGrid {
        let mut state = seed;
        let mut next = move || {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        };
        PixelGrid::from_fn(width, height, |_, _| {
            let (r, g, b) = (next(), next(), next());
            PixelSample::opaque(r, g, b)
        })
        .unwrap()
    }

    fn all_kernels() -> Vec<Kernel> {
        PresetTable::builtin().iter().map(|p| p.kernel).collect()
    }

    // ========================================================================
    // GAP 1: Identity must be a true no-op
    // ========================================================================

    /// If this breaks, it means: the identity preset shifts, rounds or
    /// re-clamps values, so "no filter" no longer shows the raw camera grid.
    #[test]
    fn test_identity_is_noop_for_any_grid() {
        for (w, h, seed) in [(1, 1, 1), (2, 7, 2), (16, 9, 3), (33, 5, 4)] {
            let grid = noise_grid(w, h, seed);
            for border in [BorderMode::Clamp, BorderMode::PassThrough] {
                assert_eq!(
                    convolve(&grid, &IDENTITY, border),
                    grid,
                    "REGRESSION: identity changed a {}x{} grid ({})",
                    w,
                    h,
                    border
                );
            }
        }
    }

    // ========================================================================
    // GAP 2: Shape and range invariants hold for every kernel
    // ========================================================================

    /// If this breaks, it means: the engine dropped or added rows/columns
    /// at the border, which would misalign the rendered grid with its input.
    #[test]
    fn test_dimensions_preserved() {
        for kernel in all_kernels() {
            for (w, h) in [(1, 1), (1, 5), (5, 1), (2, 2), (3, 3), (13, 8)] {
                let grid = noise_grid(w, h, (w * 31 + h) as u32);
                for border in [BorderMode::Clamp, BorderMode::PassThrough] {
                    let out = convolve(&grid, &kernel, border);
                    assert_eq!((out.width(), out.height()), (w, h));
                    assert_eq!(out.samples().len(), w * h);
                }
            }
        }
    }

    /// If this breaks, it means: a channel total wrapped around instead of
    /// saturating (e.g. sharpen turning a bright edge black). Gray must stay
    /// consistent with the clamped channels too.
    #[test]
    fn test_saturation_not_wraparound() {
        let extreme = Kernel::new([[-9.0, 9.0, -9.0], [9.0, 9.0, 9.0], [-9.0, 9.0, -9.0]], 1.0);
        let grid = noise_grid(12, 12, 42);
        for kernel in [extreme, SHARPEN, EDGE_DETECT] {
            let out = convolve(&grid, &kernel, BorderMode::Clamp);
            for s in out.samples() {
                let expected = PixelSample::opaque(s.r(), s.g(), s.b());
                assert_eq!(s.gray(), expected.gray());
            }
        }

        // Sharpen at a white/black boundary: the white side overshoots to
        // 255 and the black side undershoots to 0.
        let edge = PixelGrid::from_fn(4, 3, |x, _| {
            if x < 2 {
                PixelSample::opaque(255, 255, 255)
            } else {
                PixelSample::opaque(0, 0, 0)
            }
        })
        .unwrap();
        let out = convolve(&edge, &SHARPEN, BorderMode::Clamp);
        assert_eq!(out.sample(1, 1).r(), 255, "bright side must saturate high");
        assert_eq!(out.sample(2, 1).r(), 0, "dark side must saturate low, not wrap");
    }

    // ========================================================================
    // GAP 3: Reference values
    // ========================================================================

    /// If this breaks, it means: weights are indexed transposed or the
    /// divisor is applied before accumulation. 220 surrounded by 180 under
    /// the 1-2-1 blur is exactly 3040 / 16 = 190.
    #[test]
    fn test_blur_reference_value() {
        let grid = PixelGrid::from_gray_rows(&[
            vec![80, 80, 80, 80, 80],
            vec![80, 180, 180, 180, 80],
            vec![80, 180, 220, 180, 80],
            vec![80, 180, 180, 180, 80],
            vec![80, 80, 80, 80, 80],
        ])
        .unwrap();

        let out = convolve(&grid, &GAUSSIAN_BLUR, BorderMode::Clamp);
        assert_eq!(out.sample(2, 2).to_rgba(), [190, 190, 190, 255]);
        assert_eq!(out.sample(2, 2).gray(), 190);
    }

    /// If this breaks, it means: weights were read with x and y swapped.
    /// An asymmetric kernel that only looks at the right-hand neighbor must
    /// shift the image left by one.
    #[test]
    fn test_kernel_orientation() {
        let look_right = Kernel::new([[0.0; 3], [0.0, 0.0, 1.0], [0.0; 3]], 1.0);
        let grid = PixelGrid::from_fn(4, 4, |x, y| {
            PixelSample::opaque((x * 10) as u8, (y * 10) as u8, 0)
        })
        .unwrap();

        let out = convolve(&grid, &look_right, BorderMode::Clamp);
        assert_eq!(out.sample(0, 2).r(), 10);
        assert_eq!(out.sample(0, 2).g(), 20);
        // Right edge clamps onto itself.
        assert_eq!(out.sample(3, 2).r(), 30);
    }

    /// If this breaks, it means: edge detection responds to flat regions,
    /// i.e. the center weight and neighbor weights no longer cancel.
    #[test]
    fn test_edge_detect_flat_is_black() {
        let flat = PixelGrid::filled(9, 9, PixelSample::opaque(77, 150, 3)).unwrap();
        let out = convolve(&flat, &EDGE_DETECT, BorderMode::Clamp);
        assert!(out.samples().iter().all(|s| s.to_rgba() == [0, 0, 0, 255]));
    }

    // ========================================================================
    // GAP 4: Determinism and independence between frames
    // ========================================================================

    /// If this breaks, it means: state is leaking between calls (a reused
    /// scratch buffer, a cached frame), so the same input no longer produces
    /// the same output.
    #[test]
    fn test_repeated_processing_is_deterministic() {
        let convolver = Convolver::new(SHARPEN);
        let a = noise_grid(20, 15, 7);
        let b = noise_grid(20, 15, 8);

        let a1 = convolver.apply(&a);
        let _ = convolver.apply(&b);
        let a2 = convolver.apply(&a);

        assert_eq!(a1, a2);
        assert_eq!(
            grid_to_csv(&a1, DisplayMode::Rgb),
            grid_to_csv(&a2, DisplayMode::Rgb)
        );
    }

    // ========================================================================
    // GAP 5: Sampling feeds the engine correctly
    // ========================================================================

    /// If this breaks, it means: the sampled grid height no longer follows
    /// the source aspect ratio, so a 4:3 camera frame renders squashed.
    #[test]
    fn test_sampled_grid_keeps_aspect_through_convolution() {
        let frame = RgbaImage::from_pixel(640, 480, Rgba([30, 60, 90, 255]));
        let grid = sample_to_grid(&frame, 32).unwrap();
        let out = convolve(&grid, &GAUSSIAN_BLUR, BorderMode::Clamp);
        assert_eq!((out.width(), out.height()), (32, 24));
        assert!(out.samples().iter().all(|s| s.hex() == "#1e3c5a"));
    }

    /// If this breaks, it means: region extraction lets the window escape
    /// the frame, which would panic on the far edge during pixel inspection.
    #[test]
    fn test_region_extraction_at_every_anchor() {
        let frame = RgbaImage::from_fn(7, 5, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        for y in 0..8 {
            for x in 0..10 {
                let region = extract_grid_region(&frame, x, y, 3).unwrap();
                assert_eq!((region.width(), region.height()), (3, 3));
                let origin = region.sample(0, 0);
                assert!(origin.r() as u32 + 3 <= 7);
                assert!(origin.g() as u32 + 3 <= 5);
            }
        }
    }
}
