//! CSV export of samples and grids.
//!
//! One line per grid row, cells separated by commas. The cell format is
//! chosen by [`DisplayMode`]:
//!
//! | Mode   | Cell for (255, 0, 0) |
//! |--------|----------------------|
//! | `rgb`  | `"255,0,0"`          |
//! | `hex`  | `#ff0000`            |
//! | `gray` | `76`                 |
//!
//! RGB cells are quoted because they contain commas themselves.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseModeError;

use super::grid::PixelGrid;
use super::sample::PixelSample;

/// How a sample is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Quoted `"r,g,b"` triple
    #[default]
    Rgb,
    /// `#rrggbb`
    Hex,
    /// Decimal luminance
    Gray,
}

impl DisplayMode {
    /// All modes, in display order.
    pub const ALL: [DisplayMode; 3] = [DisplayMode::Rgb, DisplayMode::Hex, DisplayMode::Gray];

    /// Keyword used in configuration and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Rgb => "rgb",
            DisplayMode::Hex => "hex",
            DisplayMode::Gray => "gray",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(DisplayMode::Rgb),
            "hex" => Ok(DisplayMode::Hex),
            "gray" | "grey" => Ok(DisplayMode::Gray),
            _ => Err(ParseModeError {
                kind: "display mode",
                input: s.to_string(),
            }),
        }
    }
}

/// Render one sample as a CSV cell.
pub fn to_csv_cell(sample: &PixelSample, mode: DisplayMode) -> String {
    match mode {
        DisplayMode::Rgb => format!("\"{},{},{}\"", sample.r(), sample.g(), sample.b()),
        DisplayMode::Hex => sample.hex(),
        DisplayMode::Gray => sample.gray().to_string(),
    }
}

/// Render a whole grid as CSV text.
///
/// Rows are joined with `\n`; there is no trailing newline.
///
/// ```
/// use pixel_conv::{grid_to_csv, DisplayMode, PixelGrid};
///
/// let grid = PixelGrid::from_gray_rows(&[vec![0, 255], vec![10, 20]]).unwrap();
/// assert_eq!(grid_to_csv(&grid, DisplayMode::Gray), "0,255\n10,20");
/// ```
pub fn grid_to_csv(grid: &PixelGrid, mode: DisplayMode) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|sample| to_csv_cell(sample, mode))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_formats() {
        let red = PixelSample::opaque(255, 0, 0);
        assert_eq!(to_csv_cell(&red, DisplayMode::Rgb), "\"255,0,0\"");
        assert_eq!(to_csv_cell(&red, DisplayMode::Hex), "#ff0000");
        assert_eq!(to_csv_cell(&red, DisplayMode::Gray), "76");
    }

    #[test]
    fn test_grid_rgb_csv() {
        let grid = PixelGrid::from_fn(2, 2, |x, y| {
            PixelSample::opaque(x as u8, y as u8, 9)
        })
        .unwrap();
        assert_eq!(
            grid_to_csv(&grid, DisplayMode::Rgb),
            "\"0,0,9\",\"1,0,9\"\n\"0,1,9\",\"1,1,9\""
        );
    }

    #[test]
    fn test_single_cell_has_no_separators() {
        let grid = PixelGrid::filled(1, 1, PixelSample::opaque(1, 2, 3)).unwrap();
        assert_eq!(grid_to_csv(&grid, DisplayMode::Hex), "#010203");
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("RGB".parse::<DisplayMode>().unwrap(), DisplayMode::Rgb);
        assert_eq!(" hex ".parse::<DisplayMode>().unwrap(), DisplayMode::Hex);
        assert_eq!("grey".parse::<DisplayMode>().unwrap(), DisplayMode::Gray);

        let err = "cmyk".parse::<DisplayMode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown display mode: \"cmyk\"");
    }

    #[test]
    fn test_mode_display_matches_keyword() {
        for mode in DisplayMode::ALL {
            assert_eq!(mode.to_string().parse::<DisplayMode>().unwrap(), mode);
        }
    }
}
