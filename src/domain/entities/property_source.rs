//! PropertySource entity - a discovered property file

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A readable key/value file and the time it was last modified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySource {
    path: PathBuf,
    modified: SystemTime,
}

impl PropertySource {
    pub fn new(path: impl Into<PathBuf>, modified: SystemTime) -> Self {
        Self {
            path: path.into(),
            modified,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    /// Newest modification time among `sources`, if any
    pub fn newest<'a, I>(sources: I) -> Option<SystemTime>
    where
        I: IntoIterator<Item = &'a PropertySource>,
    {
        sources.into_iter().map(PropertySource::modified).max()
    }
}
