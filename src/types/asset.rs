//! Asset declarations: what to compile and how it is laid out.

use std::path::PathBuf;

use super::geometry::Geometry;

/// One image asset to compile into an indexed artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSpec {
    /// Asset name; also the symbol prefix in generated code.
    pub name: String,
    /// Path to the source image.
    pub source: PathBuf,
    /// Declared layout, validated against the decoded image.
    pub geometry: Geometry,
    /// Packed colour pinned to palette index 0.
    pub transparency: Option<u32>,
}

impl AssetSpec {
    /// Create a spritesheet asset.
    pub fn sheet(
        name: impl Into<String>,
        source: impl Into<PathBuf>,
        tile_w: u32,
        tile_h: u32,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            geometry: Geometry::Sheet {
                tile_w,
                tile_h,
                size: None,
            },
            transparency: None,
        }
    }

    /// Create a standalone texture asset.
    pub fn texture(
        name: impl Into<String>,
        source: impl Into<PathBuf>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            geometry: Geometry::Texture { width, height },
            transparency: None,
        }
    }

    pub fn with_transparency(mut self, key: u32) -> Self {
        self.transparency = Some(key);
        self
    }

    /// Upper-case C identifier prefix, e.g. `player-ship` -> `PLAYER_SHIP`.
    pub fn symbol(&self) -> String {
        symbol_for(&self.name)
    }
}

pub(crate) fn symbol_for(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Collection of builtin assets, compiled when no manifest is present.
pub struct BuiltinAssets;

impl BuiltinAssets {
    /// The player spritesheet: 57x59 tiles keyed on opaque cyan.
    fn player() -> AssetSpec {
        AssetSpec::sheet("player", "res/player-sheet.png", 57, 59).with_transparency(0xFFFF_FF00)
    }

    /// The bullet texture: exactly 12x12, keyed on opaque magenta.
    fn bullet() -> AssetSpec {
        AssetSpec::texture("bullet", "res/bullet.png", 12, 12).with_transparency(0xFFFF_00FF)
    }

    /// Get a builtin asset by name.
    pub fn get(name: &str) -> Option<AssetSpec> {
        match name {
            "player" => Some(Self::player()),
            "bullet" => Some(Self::bullet()),
            _ => None,
        }
    }

    /// All builtin assets, in build order.
    pub fn all() -> Vec<AssetSpec> {
        vec![Self::player(), Self::bullet()]
    }
}
