//! Generate Options
//!
//! Immutable description of one generation run, built once from the merged
//! configuration before the pipeline starts.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{FileSet, GenerationTarget};

/// Options for the generate use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Primary property file, merged first
    pub input_file: Option<PathBuf>,
    /// File-sets in declaration order, merged after the primary file
    pub file_sets: Vec<FileSet>,
    /// What to generate and where
    pub target: GenerationTarget,
    /// Regenerate even if the output is newer than every source
    pub force: bool,
    /// Render but do not write
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new(target: GenerationTarget) -> Self {
        Self {
            input_file: None,
            file_sets: Vec::new(),
            target,
            force: false,
            dry_run: false,
        }
    }

    /// Set the primary file; a blank path means "no primary file"
    pub fn with_input_file(mut self, input_file: impl Into<PathBuf>) -> Self {
        let input_file = input_file.into();
        self.input_file = if is_blank(&input_file) {
            None
        } else {
            Some(input_file)
        };
        self
    }

    pub fn with_file_set(mut self, file_set: FileSet) -> Self {
        self.file_sets.push(file_set);
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

fn is_blank(path: &Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> GenerationTarget {
        GenerationTarget::new(Some("Messages".to_string()), ".")
    }

    #[test]
    fn blank_input_file_is_treated_as_none() {
        assert_eq!(GenerateOptions::new(target()).with_input_file("").input_file, None);
        assert_eq!(GenerateOptions::new(target()).with_input_file("  ").input_file, None);
    }

    #[test]
    fn input_file_is_kept() {
        let options = GenerateOptions::new(target()).with_input_file("messages.properties");
        assert_eq!(options.input_file, Some(PathBuf::from("messages.properties")));
    }
}
