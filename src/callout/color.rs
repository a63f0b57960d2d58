//! Callout accent colors
//!
//! The stylesheet stores colors as a decimal triple (`52, 171, 52`) while the
//! editor works with `#RRGGBB`. Both forms convert through [`Rgb`].

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color '{0}' (expected #RRGGBB)")]
    InvalidHex(String),
    #[error("invalid color triple '{0}' (expected r, g, b)")]
    InvalidTriple(String),
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse `#RRGGBB`; the leading `#` is optional and digits are case-insensitive
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(input.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::InvalidHex(input.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Upper-case `#RRGGBB`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Parse a decimal triple such as `52, 171, 52`.
    ///
    /// Components above 255 are clamped, the same way a stylesheet engine
    /// treats out-of-range `rgb()` arguments.
    pub fn parse_triple(input: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidTriple(input.to_string());

        let parts: Vec<&str> = input.split(',').map(str::trim).collect();
        let &[r, g, b] = parts.as_slice() else {
            return Err(invalid());
        };

        let component = |s: &str| -> Result<u8, ColorError> {
            if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            // All-digit input can only fail to parse by overflowing
            Ok(s.parse::<u8>().unwrap_or(u8::MAX))
        };

        Ok(Self::new(component(r)?, component(g)?, component(b)?))
    }

    /// Decimal triple as written to the stylesheet
    pub fn to_triple(&self) -> String {
        format!("{}, {}, {}", self.red, self.green, self.blue)
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    pub fn from_array([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl Default for Rgb {
    /// Green preselected by the add dialog (`#34AB34`)
    fn default() -> Self {
        Self::new(0x34, 0xAB, 0x34)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_triple())
    }
}
