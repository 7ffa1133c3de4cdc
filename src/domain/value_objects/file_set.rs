//! File-set value object
//!
//! A base directory plus include/exclude glob patterns. Expanding a file-set
//! into concrete paths is the job of a `FileSetScanner`.

use std::path::{Path, PathBuf};

/// Include pattern used when a file-set declares none
pub const DEFAULT_INCLUDE: &str = "**/*.properties";

/// A declared collection of property files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSet {
    dir: PathBuf,
    includes: Vec<String>,
    excludes: Vec<String>,
}

impl FileSet {
    /// Create a file-set rooted at `dir` that matches every `.properties` file
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }

    /// Replace the include patterns
    pub fn with_includes<I, S>(mut self, includes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes = includes.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the exclude patterns
    pub fn with_excludes<I, S>(mut self, excludes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes = excludes.into_iter().map(Into::into).collect();
        self
    }

    /// Base directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Effective include patterns (falls back to [`DEFAULT_INCLUDE`])
    pub fn includes(&self) -> Vec<&str> {
        if self.includes.is_empty() {
            vec![DEFAULT_INCLUDE]
        } else {
            self.includes.iter().map(String::as_str).collect()
        }
    }

    /// Exclude patterns
    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_includes_fall_back_to_default() {
        let set = FileSet::new("i18n");
        assert_eq!(set.includes(), vec![DEFAULT_INCLUDE]);
        assert!(set.excludes().is_empty());
    }

    #[test]
    fn explicit_patterns_are_kept_in_order() {
        let set = FileSet::new("i18n")
            .with_includes(["b/*.properties", "a/*.properties"])
            .with_excludes(["**/draft_*"]);
        assert_eq!(set.includes(), vec!["b/*.properties", "a/*.properties"]);
        assert_eq!(set.excludes(), ["**/draft_*".to_string()]);
        assert_eq!(set.dir(), Path::new("i18n"));
    }
}
