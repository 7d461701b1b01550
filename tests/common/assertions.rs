//! Assertion helpers for tests.

use pixel_conv::PixelGrid;
use pretty_assertions::assert_eq;

/// Assert a grid has the given dimensions
pub fn assert_dimensions(grid: &PixelGrid, width: usize, height: usize) {
    assert_eq!(
        (grid.width(), grid.height()),
        (width, height),
        "Unexpected grid dimensions"
    );
}

/// Assert every sample in the grid has the given RGBA value
pub fn assert_uniform(grid: &PixelGrid, rgba: [u8; 4]) {
    for (i, sample) in grid.samples().iter().enumerate() {
        assert_eq!(
            sample.to_rgba(),
            rgba,
            "Sample {} at ({}, {}) differs",
            i,
            i % grid.width(),
            i / grid.width()
        );
    }
}

/// Assert CSV text has `rows` lines of `cols` cells each.
///
/// RGB cells contain commas inside quotes, so cells are counted outside
/// quoted sections.
pub fn assert_csv_shape(csv: &str, cols: usize, rows: usize) {
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), rows, "Unexpected CSV row count:\n{csv}");
    for line in lines {
        let mut cells = 1;
        let mut quoted = false;
        for c in line.chars() {
            match c {
                '"' => quoted = !quoted,
                ',' if !quoted => cells += 1,
                _ => {}
            }
        }
        assert_eq!(cells, cols, "Unexpected cell count in line {line:?}");
    }
}
