//! C source output.
//!
//! Emits an artifact as `#define` geometry constants, a `u32` colour table
//! with alpha discarded, and a `u8` index array in tile order. Output is a
//! pure function of the artifact.

use crate::error::Result;
use crate::types::Artifact;

use super::{check_shape, ArtifactEncoder};

/// Encoder for C array literals.
#[derive(Debug, Clone, Default)]
pub struct CSourceEncoder {
    /// Header to `#include` at the top (e.g. `gloom/types.h`).
    pub include: Option<String>,
}

impl CSourceEncoder {
    pub fn new(include: Option<String>) -> Self {
        Self { include }
    }

    /// Render the artifact as C source text.
    pub fn render(&self, artifact: &Artifact) -> Result<String> {
        check_shape(artifact)?;

        let p = artifact.symbol();
        let v = p.to_lowercase();
        let grid = artifact.grid;
        let mut output = String::new();

        if let Some(include) = &self.include {
            output.push_str(&format!("#include <{}>\n\n", include));
        }

        let (data_name, data_len) = if artifact.texture {
            output.push_str(&format!("#define {}_TEXTURE_W {}\n", p, grid.tile_w));
            output.push_str(&format!("#define {}_TEXTURE_H {}\n", p, grid.tile_h));
            (
                format!("g_{}_texture", v),
                format!("{p}_TEXTURE_W * {p}_TEXTURE_H"),
            )
        } else {
            output.push_str(&format!("#define {}_TILE_W {}\n", p, grid.tile_w));
            output.push_str(&format!("#define {}_TILE_H {}\n\n", p, grid.tile_h));
            output.push_str(&format!("#define {}_SPRITESHEET_W {}\n", p, grid.sheet_width()));
            output.push_str(&format!("#define {}_SPRITESHEET_H {}\n", p, grid.sheet_height()));
            (
                format!("g_{}_spritesheet", v),
                format!("{p}_NTILES * {p}_TILE_W * {p}_TILE_H"),
            )
        };

        output.push('\n');
        output.push_str(&format!("#define {}_NTILES_W {}\n", p, grid.cols));
        output.push_str(&format!("#define {}_NTILES_H {}\n", p, grid.rows));
        output.push_str(&format!("#define {}_NTILES   {}\n\n", p, grid.ntiles()));

        output.push_str(&format!("#define {}_COLTAB_LEN {}\n\n", p, artifact.palette_len()));
        output.push_str(&format!(
            "static const u32 g_{}_coltab[{}_COLTAB_LEN] = {{\n",
            v, p
        ));
        for colour in artifact.palette.entries() {
            output.push_str(&format!("  {:#x},\n", colour));
        }
        output.push_str("};\n\n");

        output.push_str(&format!("static const u8 {}[{}] = {{\n", data_name, data_len));
        // One tile scanline per line
        for row in artifact.indices.chunks(grid.tile_w.max(1) as usize) {
            let bytes: Vec<String> = row.iter().map(|i| format!("0x{:02X}", i)).collect();
            output.push_str(&format!("  {},\n", bytes.join(", ")));
        }
        output.push_str("};\n");

        Ok(output)
    }
}

impl ArtifactEncoder for CSourceEncoder {
    fn extension(&self) -> &'static str {
        "c"
    }

    fn encode(&self, artifact: &Artifact) -> Result<Vec<u8>> {
        self.render(artifact).map(String::into_bytes)
    }
}
