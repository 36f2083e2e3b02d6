//! ARGB color value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A 32-bit ARGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(u32);

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgb(0xff_ff_ff);
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0x00_00_00);
    /// Fully transparent
    pub const TRANSPARENT: Self = Self::argb(0x00_00_00_00);

    /// Opaque color from a 0xRRGGBB literal
    #[must_use]
    pub const fn rgb(rgb: u32) -> Self {
        Self(0xff00_0000 | (rgb & 0x00ff_ffff))
    }

    /// Color from a full 0xAARRGGBB literal
    #[must_use]
    pub const fn argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Raw ARGB value
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Alpha channel
    #[must_use]
    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidColor` if the literal is malformed
    pub fn parse_hex(s: &str) -> Result<Self, DomainError> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| DomainError::InvalidColor(s.to_string()))?;
        let value =
            u32::from_str_radix(hex, 16).map_err(|_| DomainError::InvalidColor(s.to_string()))?;
        match hex.len() {
            6 => Ok(Self::rgb(value)),
            8 => Ok(Self::argb(value)),
            _ => Err(DomainError::InvalidColor(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha() == 0xff {
            write!(f, "#{:06x}", self.0 & 0x00ff_ffff)
        } else {
            write!(f, "#{:08x}", self.0)
        }
    }
}
