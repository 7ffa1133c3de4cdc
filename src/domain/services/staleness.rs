//! Staleness check
//!
//! Timestamp comparison only: touching a source forces regeneration even if
//! its content did not change.

use std::time::SystemTime;

/// Decide whether the output has to be regenerated.
///
/// `output_modified` is `None` when the output file does not exist. The output
/// is fresh when it exists and is at least as new as the newest source.
pub fn should_regenerate(newest_source: Option<SystemTime>, output_modified: Option<SystemTime>) -> bool {
    match (newest_source, output_modified) {
        (Some(newest), Some(output)) => output < newest,
        _ => true,
    }
}
