//! Property file loader
//!
//! Implements the PropertyLoader port for files on local disk.

use std::io;
use std::path::Path;

use crate::domain::ports::PropertyLoader;
use crate::error::{PropConstError, PropConstResult};

use super::parser::{decode, parse_properties};

#[derive(Debug, Clone, Copy, Default)]
pub struct PropertiesFileLoader;

impl PropertiesFileLoader {
    pub fn new() -> Self {
        Self
    }
}

impl PropertyLoader for PropertiesFileLoader {
    fn load(&self, path: &Path) -> PropConstResult<Vec<(String, String)>> {
        let bytes = std::fs::read(path).map_err(|e| PropConstError::source_read(path, e))?;
        parse_properties(&decode(bytes)).map_err(|e| {
            PropConstError::source_read(path, io::Error::new(io::ErrorKind::InvalidData, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::tempdir;

    #[test]
    fn loads_pairs_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("messages.properties");
        std::fs::write(&path, "greeting=hello\nfarewell=bye\n").unwrap();

        let pairs = PropertiesFileLoader::new().load(&path).unwrap();

        assert_eq!(
            pairs,
            vec![
                ("greeting".to_string(), "hello".to_string()),
                ("farewell".to_string(), "bye".to_string()),
            ]
        );
    }

    #[test]
    fn missing_file_is_a_read_error_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.properties");

        let err = PropertiesFileLoader::new().load(&path).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::SourceRead);
        assert!(err.to_string().contains("missing.properties"));
    }

    #[test]
    fn malformed_escape_is_a_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.properties");
        std::fs::write(&path, "k=\\uZZZZ\n").unwrap();

        let err = PropertiesFileLoader::new().load(&path).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::SourceRead);
        assert!(err.to_string().contains("line 1"));
    }
}
