//! JSON output for tooling that wants the artifact without parsing C.

use serde::Serialize;

use crate::error::{IdxError, Result};
use crate::types::Artifact;

use super::{check_shape, ArtifactEncoder};

/// Encoder for pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl ArtifactEncoder for JsonEncoder {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn encode(&self, artifact: &Artifact) -> Result<Vec<u8>> {
        check_shape(artifact)?;
        let output = ArtifactJson::from_artifact(artifact);
        serde_json::to_vec_pretty(&output).map_err(|e| IdxError::Parse {
            message: format!("Failed to serialize artifact '{}': {}", artifact.name, e),
            help: None,
        })
    }
}

// --- JSON serialization types ---

#[derive(Serialize)]
struct ArtifactJson<'a> {
    name: &'a str,
    kind: &'static str,
    tile: Size,
    sheet: Size,
    grid: Grid,
    palette: &'a [u32],
    indices: &'a [u8],
    meta: Meta,
}

#[derive(Serialize)]
struct Size {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct Grid {
    cols: u32,
    rows: u32,
    ntiles: u32,
}

#[derive(Serialize)]
struct Meta {
    app: String,
    version: String,
}

impl<'a> ArtifactJson<'a> {
    fn from_artifact(artifact: &'a Artifact) -> Self {
        let grid = artifact.grid;
        ArtifactJson {
            name: &artifact.name,
            kind: if artifact.texture { "texture" } else { "spritesheet" },
            tile: Size {
                w: grid.tile_w,
                h: grid.tile_h,
            },
            sheet: Size {
                w: grid.sheet_width(),
                h: grid.sheet_height(),
            },
            grid: Grid {
                cols: grid.cols,
                rows: grid.rows,
                ntiles: grid.ntiles(),
            },
            palette: artifact.palette.entries(),
            indices: &artifact.indices,
            meta: Meta {
                app: "idxtex".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}
