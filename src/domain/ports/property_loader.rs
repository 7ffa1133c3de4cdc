//! PropertyLoader port - reads key/value pairs from one source

use std::path::Path;

use crate::error::PropConstResult;

/// Loads the pairs of a property file in file order. Duplicate keys are
/// returned as-is; merging is the aggregator's job.
pub trait PropertyLoader {
    fn load(&self, path: &Path) -> PropConstResult<Vec<(String, String)>>;
}
