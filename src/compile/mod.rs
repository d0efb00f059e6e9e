//! The image-to-indexed-texture pipeline.
//!
//! Each asset flows through the stages in a straight line:
//! load -> palette -> index -> slice. Nothing is shared between assets, so
//! independent assets can be compiled in any order or in parallel.

mod indexer;
mod source;
mod tiles;

use std::path::Path;

pub use indexer::{encode, Indexer};
pub use source::{from_dynamic, load_image};
pub use tiles::slice;

use crate::error::{IdxError, Result};
use crate::types::{
    Artifact, AssetSpec, Geometry, Image, IndexedBuffer, PaletteBuilder, TileGrid,
};

/// Compile a decoded image according to its declaration.
///
/// Pure: the same image and spec always yield an identical artifact.
pub fn compile(image: &Image, spec: &AssetSpec) -> Result<Artifact> {
    if let Some((expected_w, expected_h)) = spec.geometry.expected_size() {
        if (image.width(), image.height()) != (expected_w, expected_h) {
            return Err(IdxError::SizeMismatch {
                expected_w,
                expected_h,
                actual_w: image.width(),
                actual_h: image.height(),
            });
        }
    }

    let palette = PaletteBuilder::new()
        .with_transparency(spec.transparency)
        .build(image.pixels())?;
    let indexed = IndexedBuffer::new(
        image.width(),
        image.height(),
        encode(image.pixels(), &palette)?,
    )?;

    // A texture's size was pinned above, so it is already one tile
    let (grid, indices) = match spec.geometry {
        Geometry::Sheet { tile_w, tile_h, .. } => slice(&indexed, tile_w, tile_h)?,
        Geometry::Texture { width, height } => {
            (TileGrid::single(width, height), indexed.into_indices())
        }
    };

    Ok(Artifact {
        name: spec.name.clone(),
        texture: spec.geometry.is_texture(),
        palette,
        grid,
        indices,
    })
}

/// Load an asset's image (relative to `root`) and compile it.
///
/// Errors are tagged with the asset name.
pub fn compile_asset(spec: &AssetSpec, root: &Path) -> Result<Artifact> {
    let path = root.join(&spec.source);
    load_image(&path)
        .and_then(|image| compile(&image, spec))
        .map_err(|e| e.in_asset(&spec.name))
}
