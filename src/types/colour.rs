//! Colour type, packing, and parsing.
//!
//! Pixels travel through the pipeline as packed `u32` values in the byte
//! order the decoder produces: `r | g << 8 | b << 16 | a << 24`. Only the
//! low 24 bits (`0xBBGGRR`) take part in colour equality.

use std::fmt;
use std::str::FromStr;

use crate::error::{IdxError, Result};

/// Mask selecting the colour bits of a packed pixel, discarding alpha.
pub const RGB_MASK: u32 = 0x00FF_FFFF;

/// Strip the alpha channel from a packed pixel.
#[inline]
pub const fn rgb24(packed: u32) -> u32 {
    packed & RGB_MASK
}

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Unpack a pixel value.
    pub const fn from_packed(v: u32) -> Self {
        let [r, g, b, a] = v.to_le_bytes();
        Self { r, g, b, a }
    }

    /// Pack into the pipeline's `u32` pixel layout.
    pub const fn packed(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(invalid_colour(s));
        }

        match hex.len() {
            3 => {
                let r = parse_hex_byte(&hex[0..1])?;
                let g = parse_hex_byte(&hex[1..2])?;
                let b = parse_hex_byte(&hex[2..3])?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = parse_hex_byte(&hex[6..8])?;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(invalid_colour(s)),
        }
    }
}

impl FromStr for Colour {
    type Err = IdxError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse a transparency key.
///
/// `0x`-prefixed values are taken as already-packed pixels (`0xAABBGGRR`);
/// anything else is read as a `#RRGGBB[AA]` colour and packed.
pub fn parse_colour_key(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u32::from_str_radix(digits, 16).map_err(|_| IdxError::Parse {
            message: format!("Invalid packed colour key: {}", s),
            help: Some("Use 0xAABBGGRR, e.g. 0xFFFF00FF".to_string()),
        });
    }
    Colour::from_hex(s).map(Colour::packed)
}

fn invalid_colour(s: &str) -> IdxError {
    IdxError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RRGGBB, #RRGGBBAA, or a packed 0xAABBGGRR value".to_string()),
    }
}

fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| IdxError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
