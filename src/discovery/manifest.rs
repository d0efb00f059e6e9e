//! Project manifest (idxtex.yaml) parsing.
//!
//! The manifest lists the assets to compile, their declared geometry and
//! transparency keys, and output settings.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IdxError, Result};
use crate::types::{parse_colour_key, parse_dimensions, AssetSpec, Geometry};

/// Project manifest loaded from idxtex.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory for generated sources.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Header to `#include` at the top of generated C files.
    #[serde(default)]
    pub include: Option<String>,

    /// Assets to compile, in order.
    #[serde(default)]
    pub assets: Vec<AssetEntry>,
}

/// A single asset as written in the manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetEntry {
    pub name: String,
    pub source: PathBuf,

    /// Tile size `WxH` for spritesheets.
    #[serde(default)]
    pub tile: Option<String>,

    /// Full image size `WxH` for standalone textures.
    #[serde(default)]
    pub texture: Option<String>,

    /// Expected sheet size `WxH` (spritesheets only).
    #[serde(default)]
    pub size: Option<String>,

    /// Transparency key, `0xAABBGGRR` or `#RRGGBB[AA]`.
    #[serde(default)]
    pub transparency: Option<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("gen")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            include: None,
            assets: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from an idxtex.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IdxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str::<Option<Self>>(content)
            .map(Option::unwrap_or_default)
            .map_err(|e| IdxError::Parse {
                message: format!("Invalid manifest: {}", e),
                help: Some("Check idxtex.yaml syntax".to_string()),
            })
    }

    /// Resolve every entry into an [`AssetSpec`].
    ///
    /// Names must map to distinct C symbols, so `a-b` and `a_b` collide.
    pub fn asset_specs(&self) -> Result<Vec<AssetSpec>> {
        let mut symbols = HashMap::new();
        let mut specs = Vec::with_capacity(self.assets.len());

        for entry in &self.assets {
            let spec = entry.to_spec()?;
            if let Some(previous) = symbols.insert(spec.symbol(), entry.name.as_str()) {
                let message = if previous == entry.name {
                    format!("Duplicate asset name '{}'", entry.name)
                } else {
                    format!(
                        "Asset names '{}' and '{}' both map to symbol {}",
                        previous,
                        entry.name,
                        spec.symbol()
                    )
                };
                return Err(IdxError::Parse {
                    message,
                    help: Some("Asset names become C symbols and must be unique".to_string()),
                });
            }
            specs.push(spec);
        }

        Ok(specs)
    }
}

impl AssetEntry {
    /// Validate the entry and convert it to an [`AssetSpec`].
    pub fn to_spec(&self) -> Result<AssetSpec> {
        let err = |message: String, help: &str| IdxError::Parse {
            message,
            help: Some(help.to_string()),
        };

        if self.name.trim().is_empty() {
            return Err(err(
                format!("Asset with source {} has no name", self.source.display()),
                "Give every asset a name",
            ));
        }
        if !is_symbol_safe(&self.name) {
            return Err(err(
                format!("Invalid asset name '{}'", self.name),
                "Names start with a letter or '_' and contain only letters, digits, '_' or '-'",
            ));
        }

        let geometry = match (&self.tile, &self.texture) {
            (Some(tile), None) => {
                let (tile_w, tile_h) = parse_dimensions(tile)?;
                let size = self.size.as_deref().map(parse_dimensions).transpose()?;
                Geometry::Sheet {
                    tile_w,
                    tile_h,
                    size,
                }
            }
            (None, Some(texture)) => {
                if self.size.is_some() {
                    return Err(err(
                        format!("Asset '{}': 'size' only applies to spritesheets", self.name),
                        "A texture's size is given by 'texture'",
                    ));
                }
                let (width, height) = parse_dimensions(texture)?;
                Geometry::Texture { width, height }
            }
            (Some(_), Some(_)) => {
                return Err(err(
                    format!("Asset '{}' declares both 'tile' and 'texture'", self.name),
                    "Use 'tile' for spritesheets or 'texture' for single images",
                ))
            }
            (None, None) => {
                return Err(err(
                    format!("Asset '{}' declares neither 'tile' nor 'texture'", self.name),
                    "Add 'tile: WxH' or 'texture: WxH'",
                ))
            }
        };

        let transparency = self
            .transparency
            .as_deref()
            .map(parse_colour_key)
            .transpose()?;

        Ok(AssetSpec {
            name: self.name.clone(),
            source: self.source.clone(),
            geometry,
            transparency,
        })
    }
}

/// Whether `name` yields a valid C identifier and a plain file name.
fn is_symbol_safe(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
