//! Spritesheet slicing.
//!
//! Reorders a raster-order index buffer so each tile's pixels are
//! contiguous. Tiles are visited row-major across the grid; pixels within
//! a tile are visited in raster order. The element at
//! `((ty * cols + tx) * tile_h + yy) * tile_w + xx` is the source pixel at
//! `(tx * tile_w + xx, ty * tile_h + yy)`.

use crate::error::Result;
use crate::types::{IndexedBuffer, TileGrid};

/// Partition `indexed` into `tile_w` x `tile_h` tiles and flatten in tile order.
pub fn slice(indexed: &IndexedBuffer, tile_w: u32, tile_h: u32) -> Result<(TileGrid, Vec<u8>)> {
    let grid = TileGrid::new(indexed.width(), indexed.height(), tile_w, tile_h)?;
    let indices = indexed.indices();

    if grid.is_single() {
        return Ok((grid, indices.to_vec()));
    }

    let width = indexed.width() as usize;
    let (tw, th) = (tile_w as usize, tile_h as usize);
    let mut out = Vec::with_capacity(grid.index_len());

    for ty in 0..grid.rows as usize {
        for tx in 0..grid.cols as usize {
            for yy in 0..th {
                let start = (ty * th + yy) * width + tx * tw;
                out.extend_from_slice(&indices[start..start + tw]);
            }
        }
    }

    Ok((grid, out))
}
