//! Declared asset geometry and the tile grid derived from it.

use std::fmt;

use crate::error::{IdxError, Result};

/// A regular grid of same-size tiles covering a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    pub tile_w: u32,
    pub tile_h: u32,
    pub cols: u32,
    pub rows: u32,
}

impl TileGrid {
    /// Derive the grid for a `width` x `height` sheet.
    ///
    /// Both sheet dimensions must be exact multiples of the tile size.
    pub fn new(width: u32, height: u32, tile_w: u32, tile_h: u32) -> Result<Self> {
        if tile_w == 0 || tile_h == 0 {
            return Err(IdxError::Parse {
                message: format!("Tile size must be non-zero, got {}x{}", tile_w, tile_h),
                help: None,
            });
        }
        if width % tile_w != 0 {
            return Err(IdxError::IrregularSheetDimensions {
                dimension: "width",
                size: width,
                tile: tile_w,
            });
        }
        if height % tile_h != 0 {
            return Err(IdxError::IrregularSheetDimensions {
                dimension: "height",
                size: height,
                tile: tile_h,
            });
        }
        Ok(Self {
            tile_w,
            tile_h,
            cols: width / tile_w,
            rows: height / tile_h,
        })
    }

    /// The single-tile grid of a standalone texture.
    pub fn single(width: u32, height: u32) -> Self {
        Self {
            tile_w: width,
            tile_h: height,
            cols: 1,
            rows: 1,
        }
    }

    pub fn ntiles(&self) -> u32 {
        self.cols * self.rows
    }

    pub fn sheet_width(&self) -> u32 {
        self.cols * self.tile_w
    }

    pub fn sheet_height(&self) -> u32 {
        self.rows * self.tile_h
    }

    /// Number of indices a buffer in tile order must hold.
    pub fn index_len(&self) -> usize {
        self.ntiles() as usize * self.tile_w as usize * self.tile_h as usize
    }

    pub fn is_single(&self) -> bool {
        self.cols == 1 && self.rows == 1
    }
}

/// How an asset's image is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// A spritesheet of `tile_w` x `tile_h` tiles, optionally of a fixed size.
    Sheet {
        tile_w: u32,
        tile_h: u32,
        size: Option<(u32, u32)>,
    },
    /// A single texture that must be exactly `width` x `height`.
    Texture { width: u32, height: u32 },
}

impl Geometry {
    /// The image size this geometry requires, if it pins one.
    pub fn expected_size(&self) -> Option<(u32, u32)> {
        match *self {
            Geometry::Sheet { size, .. } => size,
            Geometry::Texture { width, height } => Some((width, height)),
        }
    }

    pub fn is_texture(&self) -> bool {
        matches!(self, Geometry::Texture { .. })
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Sheet { tile_w, tile_h, .. } => write!(f, "{}x{} tiles", tile_w, tile_h),
            Geometry::Texture { width, height } => write!(f, "{}x{} texture", width, height),
        }
    }
}

/// Parse a "WxH" dimension string into (width, height).
pub fn parse_dimensions(s: &str) -> Result<(u32, u32)> {
    let parts: Vec<&str> = s.trim().splitn(2, |c| c == 'x' || c == 'X').collect();
    if parts.len() != 2 {
        return Err(IdxError::Parse {
            message: format!("Invalid dimensions '{}': expected WxH (e.g. 16x16)", s),
            help: Some("Use the format WxH, for example: 57x59, 12x12".to_string()),
        });
    }

    let w: u32 = parts[0].trim().parse().map_err(|_| IdxError::Parse {
        message: format!("Invalid width '{}' in dimensions '{}'", parts[0], s),
        help: Some("Width must be a positive integer".to_string()),
    })?;

    let h: u32 = parts[1].trim().parse().map_err(|_| IdxError::Parse {
        message: format!("Invalid height '{}' in dimensions '{}'", parts[1], s),
        help: Some("Height must be a positive integer".to_string()),
    })?;

    if w == 0 || h == 0 {
        return Err(IdxError::Parse {
            message: format!("Dimensions must be non-zero, got {}x{}", w, h),
            help: Some("Both width and height must be at least 1".to_string()),
        });
    }

    Ok((w, h))
}
