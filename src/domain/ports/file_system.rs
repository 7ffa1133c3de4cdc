//! FileSystem port - the file operations the generator needs
//!
//! Lets the use case check timestamps and write output without depending on
//! a concrete implementation (local disk, in-memory for tests).

use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Abstract file system interface
pub trait FileSystem {
    /// Modification time of `path`
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;

    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and its parents. Returns `true` if anything was
    /// created.
    fn create_dir_all(&self, path: &Path) -> io::Result<bool>;

    /// Replace the content of `path` atomically
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}
