//! The compiled form of one asset.

use super::asset::symbol_for;
use super::geometry::TileGrid;
use super::palette::Palette;

/// A palette plus indices in tile-major, then raster, order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Name of the asset this was compiled from.
    pub name: String,
    /// Whether the asset was declared as a standalone texture.
    pub texture: bool,
    pub palette: Palette,
    pub grid: TileGrid,
    pub indices: Vec<u8>,
}

impl Artifact {
    pub fn symbol(&self) -> String {
        symbol_for(&self.name)
    }

    pub fn ntiles(&self) -> u32 {
        self.grid.ntiles()
    }

    pub fn palette_len(&self) -> usize {
        self.palette.len()
    }

    /// Indices belonging to tile `n` (row-major over the grid).
    pub fn tile(&self, n: u32) -> Option<&[u8]> {
        if n >= self.grid.ntiles() {
            return None;
        }
        let len = self.grid.tile_w as usize * self.grid.tile_h as usize;
        let start = n as usize * len;
        self.indices.get(start..start + len)
    }
}
