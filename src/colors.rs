//! Language color parsing and contrast selection.
//!
//! Badge text is black or white depending on the perceptual lightness of the
//! language color, measured as the `L` channel of CIE LCh (D65) scaled to
//! `[0, 1]`.

use crate::errors::ColorError;
use palette::{white_point::D65, FromColor, Lch, Srgb};
use std::fmt;

/// Lightness above which badge text switches from white to black.
pub const DEFAULT_CONTRAST_THRESHOLD: f64 = 0.7;

/// An sRGB color parsed from a manifest hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Text color drawn on top of a language color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    White,
    Black,
}

impl TextColor {
    /// The CSS short hex form used in badges.
    pub fn hex(&self) -> &'static str {
        match self {
            TextColor::White => "#FFF",
            TextColor::Black => "#000",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl Rgb {
    /// Parses `#RRGGBB` or `#RGB`. Hex digits are case-insensitive.
    pub fn from_hex(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Self {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            3 => {
                // #abc expands to #aabbcc
                let short = |s: &str| channel(s).map(|v| v * 17);
                Some(Self {
                    r: short(&digits[0..1])?,
                    g: short(&digits[1..2])?,
                    b: short(&digits[2..3])?,
                })
            }
            _ => None,
        }
    }

    /// Perceptual lightness in `[0, 1]`, computed in f64 so colors sitting
    /// right at the threshold land on the same side every time.
    pub fn lightness(&self) -> f64 {
        let srgb: Srgb<f64> = Srgb::new(self.r, self.g, self.b).into_format();
        let lch = Lch::<D65, f64>::from_color(srgb);
        (lch.l / 100.0).clamp(0.0, 1.0)
    }

    /// Picks the readable text color for this background.
    pub fn text_color(&self, threshold: f64) -> TextColor {
        text_color_for_lightness(self.lightness(), threshold)
    }
}

/// Black text strictly above `threshold`, white otherwise.
pub fn text_color_for_lightness(lightness: f64, threshold: f64) -> TextColor {
    if lightness > threshold {
        TextColor::Black
    } else {
        TextColor::White
    }
}

/// Parses a manifest color, attributing failures to `language`.
pub fn parse_color(language: &str, value: &str) -> Result<Rgb, ColorError> {
    Rgb::from_hex(value).ok_or_else(|| ColorError::InvalidHex {
        language: language.to_string(),
        value: value.to_string(),
    })
}
