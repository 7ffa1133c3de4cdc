//! Glob file-set scanner
//!
//! Expands a [`FileSet`] with the `ignore` crate: include patterns are
//! whitelist overrides, exclude patterns are negated overrides. `.gitignore`
//! and friends are not consulted; a file-set says exactly what it matches.
//! Symlinks are followed, and a dangling link is a read error.

use std::io;
use std::path::PathBuf;

use ignore::overrides::{Override, OverrideBuilder};
use ignore::WalkBuilder;

use crate::domain::ports::FileSetScanner;
use crate::domain::value_objects::FileSet;
use crate::error::{PropConstError, PropConstResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlobFileSetScanner;

impl GlobFileSetScanner {
    pub fn new() -> Self {
        Self
    }
}

impl FileSetScanner for GlobFileSetScanner {
    fn scan(&self, file_set: &FileSet) -> PropConstResult<Vec<PathBuf>> {
        let dir = file_set.dir();
        if !dir.is_dir() {
            return Err(PropConstError::source_read(
                dir,
                io::Error::new(io::ErrorKind::NotFound, "file-set directory not found"),
            ));
        }

        let overrides = build_overrides(file_set)?;
        let walker = WalkBuilder::new(dir)
            .standard_filters(false)
            .follow_links(true)
            .overrides(overrides)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = dir.to_path_buf();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("directory walk failed"));
                PropConstError::source_read(path, source)
            })?;
            if entry.file_type().is_some_and(|t| t.is_file()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }
}

fn build_overrides(file_set: &FileSet) -> PropConstResult<Override> {
    let dir = file_set.dir();
    let mut builder = OverrideBuilder::new(dir);

    let invalid = |pattern: &str, e: ignore::Error| PropConstError::InvalidFileSet {
        dir: dir.to_path_buf(),
        pattern: pattern.to_string(),
        message: e.to_string(),
    };

    for pattern in file_set.includes() {
        builder.add(pattern).map_err(|e| invalid(pattern, e))?;
    }
    // Later globs take precedence, so excludes go last.
    for pattern in file_set.excludes() {
        builder
            .add(&format!("!{}", pattern))
            .map_err(|e| invalid(pattern, e))?;
    }

    builder.build().map_err(|e| invalid("", e))
}
