//! FileSetScanner port - expands a file-set into concrete paths

use std::path::PathBuf;

use crate::domain::value_objects::FileSet;
use crate::error::PropConstResult;

/// Directory scanning capability
///
/// Given a base directory and include/exclude patterns, produce the matching
/// files in a stable order. The generator never needs to know how.
pub trait FileSetScanner {
    fn scan(&self, file_set: &FileSet) -> PropConstResult<Vec<PathBuf>>;
}
