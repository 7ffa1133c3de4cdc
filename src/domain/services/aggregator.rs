//! Source aggregator
//!
//! Loads every property source in a fixed order and merges the pairs into one
//! [`PropertyMap`]:
//! - primary file first
//! - then each file-set in declaration order, files in scan order
//! - on a repeated key the later source wins

use crate::domain::entities::{PropertyMap, PropertySource};
use crate::domain::ports::PropertyLoader;
use crate::error::{PropConstError, PropConstResult};

/// Sources to merge, already discovered and timestamped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSet {
    pub primary: Option<PropertySource>,
    pub file_sets: Vec<Vec<PropertySource>>,
}

impl SourceSet {
    /// All sources in merge order
    pub fn iter(&self) -> impl Iterator<Item = &PropertySource> {
        self.primary
            .iter()
            .chain(self.file_sets.iter().flat_map(|set| set.iter()))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Merge all sources into one mapping.
///
/// Fails with `NoSources` when nothing was supplied, and with the first
/// `SourceRead` error if any source cannot be loaded. Nothing is returned on
/// failure.
pub fn aggregate<L>(loader: &L, sources: &SourceSet) -> PropConstResult<PropertyMap>
where
    L: PropertyLoader + ?Sized,
{
    if sources.is_empty() {
        return Err(PropConstError::NoSources);
    }

    let mut merged = PropertyMap::new();
    for source in sources.iter() {
        merged.extend(loader.load(source.path())?);
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::time::SystemTime;

    /// In-memory loader keyed by path
    #[derive(Default)]
    struct MockLoader {
        files: HashMap<PathBuf, Vec<(String, String)>>,
    }

    impl MockLoader {
        fn with(mut self, path: &str, pairs: &[(&str, &str)]) -> Self {
            self.files.insert(
                PathBuf::from(path),
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            );
            self
        }
    }

    impl PropertyLoader for MockLoader {
        fn load(&self, path: &Path) -> PropConstResult<Vec<(String, String)>> {
            self.files.get(path).cloned().ok_or_else(|| {
                PropConstError::source_read(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "File not found"),
                )
            })
        }
    }

    fn source(path: &str) -> PropertySource {
        PropertySource::new(path, SystemTime::UNIX_EPOCH)
    }

    #[test]
    fn no_sources_is_a_configuration_error() {
        let err = aggregate(&MockLoader::default(), &SourceSet::default()).unwrap_err();
        assert!(matches!(err, PropConstError::NoSources));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn empty_file_sets_without_primary_is_no_sources() {
        let sources = SourceSet {
            primary: None,
            file_sets: vec![Vec::new(), Vec::new()],
        };
        assert!(matches!(
            aggregate(&MockLoader::default(), &sources),
            Err(PropConstError::NoSources)
        ));
    }

    #[test]
    fn file_set_overrides_primary() {
        let loader = MockLoader::default()
            .with("p.properties", &[("a", "1"), ("b", "x")])
            .with("f.properties", &[("a", "2")]);
        let sources = SourceSet {
            primary: Some(source("p.properties")),
            file_sets: vec![vec![source("f.properties")]],
        };

        let merged = aggregate(&loader, &sources).unwrap();

        assert_eq!(merged.get("a"), Some("2"));
        assert_eq!(merged.get("b"), Some("x"));
        assert_eq!(merged.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn later_file_sets_and_files_win() {
        let loader = MockLoader::default()
            .with("one/a.properties", &[("k", "one-a")])
            .with("one/b.properties", &[("k", "one-b"), ("only_b", "b")])
            .with("two/a.properties", &[("k", "two-a")]);
        let sources = SourceSet {
            primary: None,
            file_sets: vec![
                vec![source("one/a.properties"), source("one/b.properties")],
                vec![source("two/a.properties")],
            ],
        };

        let merged = aggregate(&loader, &sources).unwrap();

        assert_eq!(merged.get("k"), Some("two-a"));
        assert_eq!(merged.get("only_b"), Some("b"));
        assert_eq!(sources.len(), 3);
    }

    #[test]
    fn duplicate_keys_within_one_file_keep_the_last() {
        let loader = MockLoader::default().with("p.properties", &[("a", "1"), ("a", "3")]);
        let sources = SourceSet {
            primary: Some(source("p.properties")),
            file_sets: Vec::new(),
        };
        assert_eq!(aggregate(&loader, &sources).unwrap().get("a"), Some("3"));
    }

    #[test]
    fn unreadable_source_fails_everything() {
        let loader = MockLoader::default().with("p.properties", &[("a", "1")]);
        let sources = SourceSet {
            primary: Some(source("p.properties")),
            file_sets: vec![vec![source("missing.properties")]],
        };

        let err = aggregate(&loader, &sources).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceRead);
        assert!(err.to_string().contains("missing.properties"));
    }
}
