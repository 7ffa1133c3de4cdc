//! GeneratedArtifact entity - rendered source text and where it belongs

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// Output of one render; never mutated once created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    path: PathBuf,
    content: String,
    constant_count: usize,
}

impl GeneratedArtifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, constant_count: usize) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            constant_count,
        }
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Generated source text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of constants declared
    pub fn constant_count(&self) -> usize {
        self.constant_count
    }

    /// SHA-256 fingerprint of the content
    pub fn hash(&self) -> ContentHash {
        ContentHash::from_content(&self.content)
    }
}
