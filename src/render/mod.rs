//! Artifact encoding and output.
//!
//! Encoders turn a compiled [`Artifact`] into bytes; sinks decide where
//! those bytes go.

mod c_source;
mod json;
mod sink;

pub use c_source::CSourceEncoder;
pub use json::JsonEncoder;
pub use sink::{DirSink, MemorySink, OutputSink};

use crate::error::{IdxError, Result};
use crate::types::Artifact;

/// Serializes an artifact deterministically.
pub trait ArtifactEncoder {
    /// File extension for the encoded form, without the dot.
    fn extension(&self) -> &'static str;

    fn encode(&self, artifact: &Artifact) -> Result<Vec<u8>>;
}

/// Output file name for an artifact, e.g. `player.c`.
pub fn file_name(artifact: &Artifact, encoder: &dyn ArtifactEncoder) -> String {
    format!("{}.{}", artifact.name, encoder.extension())
}

/// Encode and hand one artifact to the sink.
pub fn emit(
    artifact: &Artifact,
    encoder: &dyn ArtifactEncoder,
    sink: &mut dyn OutputSink,
) -> Result<std::path::PathBuf> {
    let bytes = encoder.encode(artifact)?;
    sink.emit(&file_name(artifact, encoder), &bytes)
}

/// Check the index buffer covers exactly the declared grid.
fn check_shape(artifact: &Artifact) -> Result<()> {
    let expected = artifact.grid.index_len();
    if artifact.indices.len() != expected {
        return Err(IdxError::ShapeMismatch {
            expected,
            actual: artifact.indices.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile;
    use crate::types::{AssetSpec, Image};

    #[test]
    fn test_emit_names_file_after_asset() {
        let image = Image::new(2, 2, vec![0, 1, 2, 3]).unwrap();
        let artifact = compile(&image, &AssetSpec::texture("bullet", "b.png", 2, 2)).unwrap();
        let mut sink = MemorySink::new();

        emit(&artifact, &CSourceEncoder::default(), &mut sink).unwrap();
        emit(&artifact, &JsonEncoder, &mut sink).unwrap();

        let names: Vec<&String> = sink.files.keys().collect();
        assert_eq!(names, vec!["bullet.c", "bullet.json"]);
    }

    #[test]
    fn test_emit_skips_sink_on_encode_failure() {
        let image = Image::new(2, 2, vec![0, 1, 2, 3]).unwrap();
        let mut artifact = compile(&image, &AssetSpec::texture("bad", "b.png", 2, 2)).unwrap();
        artifact.indices.truncate(1);
        let mut sink = MemorySink::new();

        assert!(emit(&artifact, &CSourceEncoder::default(), &mut sink).is_err());
        assert!(sink.files.is_empty());
    }
}
