//! Core domain types for idxtex.
//!
//! - `Colour` - RGBA colour values and the packed pixel layout
//! - `Image` / `IndexedBuffer` - decoded and palette-indexed rasters
//! - `Palette` - first-occurrence ordered colour tables
//! - `TileGrid` / `Geometry` - declared and derived sheet layout
//! - `AssetSpec` / `Artifact` - compiler input and output

mod artifact;
mod asset;
mod colour;
mod geometry;
mod palette;
mod raster;

pub use artifact::Artifact;
pub use asset::{AssetSpec, BuiltinAssets};
pub use colour::{parse_colour_key, rgb24, Colour, RGB_MASK};
pub use geometry::{parse_dimensions, Geometry, TileGrid};
pub use palette::{Palette, PaletteBuilder, MAX_PALETTE_LEN};
pub use raster::{Image, IndexedBuffer};
