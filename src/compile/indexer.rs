//! Pixel-to-palette-index mapping.

use std::collections::HashMap;

use crate::error::{IdxError, Result};
use crate::types::{rgb24, Palette};

/// Reverse lookup from 24-bit colour to palette index, built once per palette.
pub struct Indexer {
    lookup: HashMap<u32, u8>,
}

impl Indexer {
    pub fn new(palette: &Palette) -> Self {
        // Palettes never exceed 255 entries, so every index fits a u8.
        let lookup = palette
            .entries()
            .iter()
            .enumerate()
            .map(|(i, &colour)| (colour, i as u8))
            .collect();
        Self { lookup }
    }

    /// Resolve a single pixel.
    pub fn index_of(&self, pixel: u32) -> Option<u8> {
        self.lookup.get(&rgb24(pixel)).copied()
    }

    /// Map every pixel to its palette index, in order.
    pub fn encode(&self, pixels: &[u32]) -> Result<Vec<u8>> {
        pixels
            .iter()
            .enumerate()
            .map(|(offset, &pixel)| {
                self.index_of(pixel).ok_or(IdxError::UnknownColor {
                    colour: rgb24(pixel),
                    offset,
                })
            })
            .collect()
    }
}

/// Convenience wrapper building a one-off [`Indexer`].
pub fn encode(pixels: &[u32], palette: &Palette) -> Result<Vec<u8>> {
    Indexer::new(palette).encode(pixels)
}
