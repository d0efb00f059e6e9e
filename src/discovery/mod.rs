//! Project discovery.
//!
//! Finds the `idxtex.yaml` manifest for a project and resolves the set of
//! assets to compile. Projects without a manifest fall back to the builtin
//! asset set.
//!
//! # Example
//!
//! ```ignore
//! use idxtex::discovery::discover;
//!
//! let project = discover("./game")?;
//! for spec in &project.assets {
//!     println!("{} <- {}", spec.name, spec.source.display());
//! }
//! ```

mod manifest;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::{AssetSpec, BuiltinAssets};

pub use manifest::{AssetEntry, Manifest};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "idxtex.yaml";

/// A resolved project.
#[derive(Debug)]
pub struct Project {
    /// Directory asset sources are resolved against.
    pub root: PathBuf,

    /// The loaded manifest (default if none was found).
    pub manifest: Manifest,

    /// Whether a manifest was found.
    pub has_manifest: bool,

    /// Assets to compile, in declaration order.
    pub assets: Vec<AssetSpec>,
}

impl Project {
    /// Output directory, resolved against the project root.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.output)
    }
}

/// Discover the project rooted at a directory.
///
/// Uses `idxtex.yaml` if present, otherwise the builtin assets.
pub fn discover(root: impl AsRef<Path>) -> Result<Project> {
    let root = root.as_ref().to_path_buf();
    let manifest_path = root.join(MANIFEST_FILENAME);

    if manifest_path.exists() {
        load_project(&manifest_path)
    } else {
        Ok(Project {
            root,
            manifest: Manifest::default(),
            has_manifest: false,
            assets: BuiltinAssets::all(),
        })
    }
}

/// Load a project from an explicit manifest path.
///
/// Asset sources resolve relative to the manifest's directory.
pub fn load_project(manifest_path: &Path) -> Result<Project> {
    let manifest = Manifest::load(manifest_path)?;
    let assets = manifest.asset_specs()?;
    let root = manifest_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(Project {
        root,
        manifest,
        has_manifest: true,
        assets,
    })
}
