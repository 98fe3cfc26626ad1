//! Hex-string color codec.

use std::str::FromStr;

use thiserror::Error;

/// The string is not a valid 6- or 8-digit hex color.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("string is not a 6 or 8 digit hex color")]
pub struct InvalidHexColor;

/// An RGBA color with channels normalized to `0.0..=1.0`.
///
/// Round-trip precision through the hex form is limited to 8 bits per
/// channel: encoding quantizes each channel to `round(value * 255)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel, `0.0..=1.0`.
    pub red: f64,
    /// Green channel, `0.0..=1.0`.
    pub green: f64,
    /// Blue channel, `0.0..=1.0`.
    pub blue: f64,
    /// Alpha channel, `0.0..=1.0`.
    pub alpha: f64,
}

fn channel(bits: u32) -> f64 {
    f64::from(bits & 0xff) / 255.0
}

fn quantize(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Rgba {
    /// Create a color from normalized channel values.
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parse a `[#]RRGGBB` or `[#]RRGGBBAA` hex string.
    ///
    /// The hash symbol is optional, hex digits are case-insensitive, and
    /// surrounding whitespace is tolerated. A 6-digit form gets alpha `1.0`.
    /// Any other length or non-hex content fails.
    ///
    /// ```rust
    /// use prefkit_ext::Rgba;
    ///
    /// let yellow = Rgba::from_hex("#ffff00").expect("valid");
    /// assert_eq!((yellow.red, yellow.green, yellow.blue, yellow.alpha), (1.0, 1.0, 0.0, 1.0));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, InvalidHexColor> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        // from_str_radix would also accept a sign; only bare hex digits count.
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidHexColor);
        }

        match digits.len() {
            6 => {
                let rgb = u32::from_str_radix(digits, 16).map_err(|_| InvalidHexColor)?;
                Ok(Self::new(
                    channel(rgb >> 16),
                    channel(rgb >> 8),
                    channel(rgb),
                    1.0,
                ))
            }
            8 => {
                let rgba = u32::from_str_radix(digits, 16).map_err(|_| InvalidHexColor)?;
                Ok(Self::new(
                    channel(rgba >> 24),
                    channel(rgba >> 16),
                    channel(rgba >> 8),
                    channel(rgba),
                ))
            }
            _ => Err(InvalidHexColor),
        }
    }

    /// Serialize to a lowercase hex string.
    ///
    /// ```rust
    /// use prefkit_ext::Rgba;
    ///
    /// let yellow = Rgba::new(1.0, 1.0, 0.0, 1.0);
    /// assert_eq!(yellow.to_hex(true, true), "#ffff00ff");
    /// assert_eq!(yellow.to_hex(false, false), "ffff00");
    /// ```
    pub fn to_hex(&self, alpha: bool, hash_symbol: bool) -> String {
        let prefix = if hash_symbol { "#" } else { "" };
        let r = quantize(self.red);
        let g = quantize(self.green);
        let b = quantize(self.blue);
        if alpha {
            let a = quantize(self.alpha);
            format!("{prefix}{r:02x}{g:02x}{b:02x}{a:02x}")
        } else {
            format!("{prefix}{r:02x}{g:02x}{b:02x}")
        }
    }
}

impl FromStr for Rgba {
    type Err = InvalidHexColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
