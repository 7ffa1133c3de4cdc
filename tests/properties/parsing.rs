//! Property tests for the property file parser.

use proptest::prelude::*;

use propconst::infrastructure::properties::{decode, parse_properties};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(input in any::<String>()) {
        let _ = parse_properties(&input);
    }

    /// PROPERTY: decoding arbitrary bytes never panics and keeps valid UTF-8 intact.
    #[test]
    fn property_decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let text = decode(bytes.clone());
        if let Ok(utf8) = String::from_utf8(bytes) {
            prop_assert_eq!(text, utf8);
        }
    }

    /// PROPERTY: plain `key=value` lines are read back as written.
    #[test]
    fn property_simple_lines_parse_back(
        pairs in proptest::collection::vec(("[a-zA-Z][a-zA-Z0-9_.]{0,10}", "([a-zA-Z0-9]{1,4}( [a-zA-Z0-9]{1,4}){0,2})?"), 0..8),
    ) {
        let text: String = pairs.iter().map(|(k, v)| format!("{k}={v}\n")).collect();
        let parsed = parse_properties(&text).unwrap();
        prop_assert_eq!(parsed, pairs);
    }
}
