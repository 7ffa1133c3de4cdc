//! Property tests for the staleness decision.

use std::time::{Duration, SystemTime};

use proptest::prelude::*;

use propconst::domain::services::should_regenerate;

fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

proptest! {
    /// PROPERTY: regenerate exactly when some source is newer than the output.
    #[test]
    fn property_regenerate_iff_source_newer(source in 0u64..10_000, output in 0u64..10_000) {
        prop_assert_eq!(
            should_regenerate(Some(at(source)), Some(at(output))),
            output < source
        );
    }

    /// PROPERTY: a missing output is always regenerated.
    #[test]
    fn property_missing_output_regenerates(source in proptest::option::of(0u64..10_000)) {
        prop_assert!(should_regenerate(source.map(at), None));
    }
}
