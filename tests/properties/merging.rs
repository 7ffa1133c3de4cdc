//! Property tests for source aggregation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use proptest::prelude::*;

use propconst::domain::entities::PropertySource;
use propconst::domain::ports::PropertyLoader;
use propconst::domain::services::{aggregate, SourceSet};
use propconst::PropConstResult;

struct MapLoader(HashMap<PathBuf, Vec<(String, String)>>);

impl PropertyLoader for MapLoader {
    fn load(&self, path: &Path) -> PropConstResult<Vec<(String, String)>> {
        Ok(self.0.get(path).cloned().unwrap_or_default())
    }
}

fn file_contents() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec(("[a-e]", "[0-9]{1,3}"), 0..6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the last occurrence of a key wins, and keys keep the position
    /// where they were first seen.
    #[test]
    fn property_later_sources_override_earlier(
        primary in proptest::option::of(file_contents()),
        file_sets in proptest::collection::vec(proptest::collection::vec(file_contents(), 0..3), 0..3),
    ) {
        let mut files = HashMap::new();
        let mut in_order: Vec<(String, String)> = Vec::new();

        let primary_source = primary.map(|pairs| {
            let path = PathBuf::from("primary.properties");
            in_order.extend(pairs.iter().cloned());
            files.insert(path.clone(), pairs);
            PropertySource::new(path, SystemTime::UNIX_EPOCH)
        });

        let mut set_sources = Vec::new();
        for (i, set) in file_sets.into_iter().enumerate() {
            let mut sources = Vec::new();
            for (j, pairs) in set.into_iter().enumerate() {
                let path = PathBuf::from(format!("set{i}/file{j}.properties"));
                in_order.extend(pairs.iter().cloned());
                files.insert(path.clone(), pairs);
                sources.push(PropertySource::new(path, SystemTime::UNIX_EPOCH));
            }
            set_sources.push(sources);
        }

        let sources = SourceSet { primary: primary_source, file_sets: set_sources };
        let result = aggregate(&MapLoader(files), &sources);

        if sources.is_empty() {
            prop_assert!(result.is_err());
        } else {
            let merged = result.unwrap();

            let mut expected_order: Vec<&str> = Vec::new();
            for (key, _) in &in_order {
                if !expected_order.contains(&key.as_str()) {
                    expected_order.push(key);
                }
            }
            prop_assert_eq!(merged.keys().collect::<Vec<_>>(), expected_order);

            for (key, _) in &in_order {
                let last = in_order.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str());
                prop_assert_eq!(merged.get(key), last);
            }
        }
    }
}
