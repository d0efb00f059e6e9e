//! Output sinks.
//!
//! The compiler never touches the filesystem itself; finished artifacts are
//! handed to a sink exactly once each.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IdxError, Result};

/// Destination for encoded artifacts.
pub trait OutputSink {
    /// Store `contents` under `file_name`, returning where it went.
    fn emit(&mut self, file_name: &str, contents: &[u8]) -> Result<PathBuf>;
}

/// Writes files into a directory, creating it on first use.
#[derive(Debug)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl OutputSink for DirSink {
    fn emit(&mut self, file_name: &str, contents: &[u8]) -> Result<PathBuf> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| IdxError::Io {
                path: self.dir.clone(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }

        let path = self.dir.join(file_name);
        fs::write(&path, contents).map_err(|e| IdxError::Io {
            path: path.clone(),
            message: format!("Failed to write artifact: {}", e),
        })?;
        Ok(path)
    }
}

/// Keeps emitted files in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub files: BTreeMap<String, Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, file_name: &str) -> Option<&[u8]> {
        self.files.get(file_name).map(Vec::as_slice)
    }
}

impl OutputSink for MemorySink {
    fn emit(&mut self, file_name: &str, contents: &[u8]) -> Result<PathBuf> {
        self.files.insert(file_name.to_string(), contents.to_vec());
        Ok(PathBuf::from(file_name))
    }
}
