//! Single pixel sample type.
//!
//! A [`PixelSample`] holds 8-bit RGBA channels plus the Rec. 601 luma
//! derived from them. All channels are private: the only way to obtain a
//! sample is through a constructor, which keeps `gray` and `hex()` in sync
//! with `r`, `g`, `b`.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// Rec. 601 luma weights.
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// One picture element with derived grayscale and hex views.
///
/// # Example
///
/// ```
/// use pixel_conv::PixelSample;
///
/// let red = PixelSample::new(255, 0, 0, 255);
/// assert_eq!(red.gray(), 76);
/// assert_eq!(red.hex(), "#ff0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelSample {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
    gray: u8,
}

impl PixelSample {
    /// Create a sample from exact byte channels.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            a,
            gray: luma(r, g, b),
        }
    }

    /// Create a fully opaque sample.
    #[inline]
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a sample from unbounded numeric channels.
    ///
    /// Each channel is rounded to the nearest integer and clamped to
    /// `0..=255` independently. NaN becomes 0. Never fails.
    ///
    /// ```
    /// use pixel_conv::PixelSample;
    ///
    /// let s = PixelSample::from_f32(300.0, -12.0, 127.5, 255.0);
    /// assert_eq!((s.r(), s.g(), s.b()), (255, 0, 128));
    /// ```
    #[inline]
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(
            clamp_channel(r),
            clamp_channel(g),
            clamp_channel(b),
            clamp_channel(a),
        )
    }

    /// Create a sample from an `[R, G, B, A]` byte array.
    #[inline]
    pub fn from_rgba(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Red channel.
    #[inline]
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green channel.
    #[inline]
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue channel.
    #[inline]
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Alpha channel.
    #[inline]
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Luminance: `round(0.299 r + 0.587 g + 0.114 b)`.
    #[inline]
    pub fn gray(&self) -> u8 {
        self.gray
    }

    /// Lowercase, zero-padded `#rrggbb` string.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as `[R, G, B, A]`.
    #[inline]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for PixelSample {
    /// Opaque black.
    fn default() -> Self {
        Self::opaque(0, 0, 0)
    }
}

/// Round and saturate one channel value.
#[inline]
pub(crate) fn clamp_channel(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64;
    y.round().clamp(0.0, 255.0) as u8
}

/// Build a sample from unbounded channel values; see [`PixelSample::from_f32`].
#[inline]
pub fn make_sample(r: f32, g: f32, b: f32, a: f32) -> PixelSample {
    PixelSample::from_f32(r, g, b, a)
}

impl fmt::Display for PixelSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Value of one ASCII hex digit (caller has checked `is_ascii_hexdigit`).
#[inline]
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

impl FromStr for PixelSample {
    type Err = ParseColorError;

    /// Parse an opaque sample from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive,
    /// with surrounding whitespace trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(c));
        }
        let digits: Vec<u8> = s.bytes().map(hex_value).collect();

        match digits.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                Ok(Self::opaque(digits[0] * 17, digits[1] * 17, digits[2] * 17))
            }
            6 => Ok(Self::opaque(
                digits[0] << 4 | digits[1],
                digits[2] << 4 | digits[3],
                digits[4] << 4 | digits[5],
            )),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_extremes() {
        assert_eq!(PixelSample::opaque(255, 255, 255).gray(), 255);
        assert_eq!(PixelSample::opaque(0, 0, 0).gray(), 0);
        assert_eq!(PixelSample::opaque(255, 0, 0).gray(), 76);
        assert_eq!(PixelSample::opaque(0, 255, 0).gray(), 150);
        assert_eq!(PixelSample::opaque(0, 0, 255).gray(), 29);
    }

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        assert_eq!(PixelSample::opaque(255, 0, 0).hex(), "#ff0000");
        assert_eq!(PixelSample::opaque(1, 2, 10).hex(), "#01020a");
        assert_eq!(PixelSample::opaque(171, 205, 239).to_string(), "#abcdef");
    }

    #[test]
    fn test_from_f32_clamps_each_channel() {
        let s = make_sample(-40.0, 255.4, 1000.0, 128.6);
        assert_eq!(s.to_rgba(), [0, 255, 255, 129]);
        // gray follows the clamped channels, not the raw input
        assert_eq!(s.gray(), PixelSample::new(0, 255, 255, 129).gray());
    }

    #[test]
    fn test_from_f32_nan_is_zero() {
        let s = make_sample(f32::NAN, 10.0, 10.0, f32::NAN);
        assert_eq!(s.r(), 0);
        assert_eq!(s.a(), 0);
    }

    #[test]
    fn test_parse_hex_formats() {
        let full: PixelSample = "#FF8000".parse().unwrap();
        assert_eq!(full.to_rgba(), [255, 128, 0, 255]);

        let bare: PixelSample = "ff8000".parse().unwrap();
        assert_eq!(bare, full);

        let short: PixelSample = " #f80 ".parse().unwrap();
        assert_eq!(short.to_rgba(), [255, 136, 0, 255]);
    }

    #[test]
    fn test_parse_hex_errors() {
        assert_eq!(
            "#ff00".parse::<PixelSample>(),
            Err(ParseColorError::InvalidLength)
        );
        assert_eq!(
            "#gg0000".parse::<PixelSample>(),
            Err(ParseColorError::InvalidDigit('g'))
        );
    }

    #[test]
    fn test_parse_hex_rejects_sign_characters() {
        // Integer parsing would accept "+f" as 15 in each channel.
        assert_eq!(
            "#+f+f+f".parse::<PixelSample>(),
            Err(ParseColorError::InvalidDigit('+'))
        );
        assert_eq!(
            "+ff".parse::<PixelSample>(),
            Err(ParseColorError::InvalidDigit('+'))
        );
    }

    #[test]
    fn test_hex_round_trip_through_parse() {
        let s = PixelSample::opaque(18, 52, 86);
        assert_eq!(s.hex().parse::<PixelSample>().unwrap(), s);
    }
}
