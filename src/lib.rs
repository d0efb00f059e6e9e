//! idxtex - indexed texture compiler
//!
//! Turns RGBA sprites and spritesheets into a fixed palette plus one byte
//! per pixel, laid out tile by tile, and emits them as static C arrays for
//! renderers with no image decoder of their own.

pub mod cli;
pub mod compile;
pub mod discovery;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use compile::{compile, compile_asset, load_image, slice, Indexer};
pub use discovery::{discover, load_project, Manifest, Project};
pub use error::{IdxError, Result};
pub use render::{ArtifactEncoder, CSourceEncoder, DirSink, JsonEncoder, MemorySink, OutputSink};
pub use types::{
    Artifact, AssetSpec, BuiltinAssets, Colour, Geometry, Image, IndexedBuffer, Palette,
    PaletteBuilder, TileGrid,
};
