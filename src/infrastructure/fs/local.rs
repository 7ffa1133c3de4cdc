//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::{self, Write};
use std::path::Path;
use std::time::SystemTime;

use crate::domain::ports::FileSystem;

/// Local file system implementation
///
/// Writes go to a temp file in the destination directory and are renamed into
/// place, so a reader never observes a half-written file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<bool> {
        if path.is_dir() {
            return Ok(false);
        }
        std::fs::create_dir_all(path)?;
        Ok(true)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        write_atomic(path, content.as_bytes())
    }
}

/// Write content to a file atomically (tempfile + rename)
fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(content)?;
    temp.flush()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn local_fs_write_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Messages.java");

        LocalFs::new().write(&path, "class Messages {}\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "class Messages {}\n");
    }

    #[test]
    fn local_fs_write_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Messages.java");
        fs::write(&path, "Original").unwrap();

        LocalFs::new().write(&path, "Replaced").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Replaced");
    }

    #[test]
    fn local_fs_write_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        LocalFs::new()
            .write(&dir.path().join("A.java"), "a")
            .unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("A.java")]);
    }

    #[test]
    fn local_fs_write_into_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("A.java");
        assert!(LocalFs::new().write(&path, "a").is_err());
    }

    #[test]
    fn local_fs_create_dir_all_reports_creation() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("org").join("example");
        let fs = LocalFs::new();

        assert!(fs.create_dir_all(&nested).unwrap());
        assert!(nested.is_dir());
        assert!(!fs.create_dir_all(&nested).unwrap());
    }

    #[test]
    fn local_fs_modified_and_exists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.properties");
        let fs = LocalFs::new();

        assert!(!fs.exists(&path));
        assert!(fs.modified(&path).is_err());

        std::fs::write(&path, "a=1").unwrap();
        assert!(fs.exists(&path));
        assert!(fs.modified(&path).is_ok());
    }
}
