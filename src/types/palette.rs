//! Ordered, size-bounded colour palettes.

use std::collections::HashSet;

use crate::error::{IdxError, Result};

use super::colour::rgb24;

/// Largest palette that leaves every index representable in one byte.
pub const MAX_PALETTE_LEN: usize = 255;

/// Deduplicated colours in first-occurrence order, alpha stripped.
///
/// When built with a transparency key, that colour sits at index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<u32>,
}

impl Palette {
    /// Get the 24-bit colour at an index.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.entries.get(index).copied()
    }

    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds a [`Palette`] from a pixel stream.
#[derive(Debug, Clone, Default)]
pub struct PaletteBuilder {
    transparency: Option<u32>,
}

impl PaletteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin this colour to index 0. It must occur in the pixels.
    pub fn with_transparency(mut self, key: Option<u32>) -> Self {
        self.transparency = key;
        self
    }

    /// Scan `pixels` once and collect distinct 24-bit colours.
    pub fn build(&self, pixels: &[u32]) -> Result<Palette> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for &pixel in pixels {
            let colour = rgb24(pixel);
            if seen.insert(colour) {
                entries.push(colour);
            }
        }

        if let Some(key) = self.transparency {
            let key = rgb24(key);
            let pos = entries
                .iter()
                .position(|&c| c == key)
                .ok_or(IdxError::MissingTransparencyColor { key })?;
            let key = entries.remove(pos);
            entries.insert(0, key);
        }

        if entries.len() > MAX_PALETTE_LEN {
            return Err(IdxError::PaletteOverflow {
                count: entries.len(),
                max: MAX_PALETTE_LEN,
            });
        }

        Ok(Palette { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_order() {
        let palette = PaletteBuilder::new()
            .build(&[0xFF00_0003, 0xFF00_0001, 0xFF00_0003, 0xFF00_0002, 0xFF00_0001])
            .unwrap();
        assert_eq!(palette.entries(), &[3, 1, 2]);
    }

    #[test]
    fn test_alpha_is_ignored_when_deduplicating() {
        let palette = PaletteBuilder::new()
            .build(&[0xFF12_3456, 0x0012_3456, 0x8012_3456])
            .unwrap();
        assert_eq!(palette.entries(), &[0x12_3456]);
    }

    #[test]
    fn test_transparency_moves_to_front() {
        let palette = PaletteBuilder::new()
            .with_transparency(Some(0xFF00_00CC))
            .build(&[0xFF00_00AA, 0xFF00_00BB, 0xFF00_00CC, 0xFF00_00DD])
            .unwrap();
        assert_eq!(palette.entries(), &[0xCC, 0xAA, 0xBB, 0xDD]);
    }

    #[test]
    fn test_transparency_already_first() {
        let palette = PaletteBuilder::new()
            .with_transparency(Some(0xFF00_00AA))
            .build(&[0xFF00_00AA, 0xFF00_00BB])
            .unwrap();
        assert_eq!(palette.entries(), &[0xAA, 0xBB]);
    }

    #[test]
    fn test_transparency_matches_on_rgb_only() {
        // Key declared opaque, pixels stored fully transparent
        let palette = PaletteBuilder::new()
            .with_transparency(Some(0xFFFF_FF00))
            .build(&[0xFF00_0000, 0x00FF_FF00])
            .unwrap();
        assert_eq!(palette.get(0), Some(0xFF_FF00));
    }

    #[test]
    fn test_missing_transparency() {
        let err = PaletteBuilder::new()
            .with_transparency(Some(0xFFFF_00FF))
            .build(&[0xFF00_0000])
            .unwrap_err();
        assert!(matches!(err, IdxError::MissingTransparencyColor { key: 0xFF_00FF }));
    }

    #[test]
    fn test_255_colours_fit() {
        let pixels: Vec<u32> = (0..255).collect();
        let palette = PaletteBuilder::new().build(&pixels).unwrap();
        assert_eq!(palette.len(), 255);
    }

    #[test]
    fn test_256_colours_overflow() {
        let pixels: Vec<u32> = (0..256).collect();
        let err = PaletteBuilder::new().build(&pixels).unwrap_err();
        assert!(matches!(err, IdxError::PaletteOverflow { count: 256, max: 255 }));
    }

    #[test]
    fn test_deterministic() {
        let pixels: Vec<u32> = (0..5000u32).map(|i| (i * 7919) % 200).collect();
        let a = PaletteBuilder::new().build(&pixels).unwrap();
        let b = PaletteBuilder::new().build(&pixels).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_pixels() {
        let palette = PaletteBuilder::new().build(&[]).unwrap();
        assert!(palette.is_empty());
    }
}
