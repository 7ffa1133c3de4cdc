//! Property tests for constant derivation and rendering.

use proptest::prelude::*;

use propconst::domain::entities::PropertyMap;
use propconst::domain::services::{constants_for, render};
use propconst::infrastructure::renderer_for;
use propconst::{GenerationTarget, Language};

fn key_set() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z][a-z0-9_]{0,12}", 0..16)
}

fn map_of(keys: &[String]) -> PropertyMap {
    keys.iter().map(|k| (k.clone(), format!("value of {k}"))).collect()
}

fn distinct(keys: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for key in keys {
        if !seen.contains(key) {
            seen.push(key.clone());
        }
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: identical inputs give byte-identical output.
    #[test]
    fn property_render_is_deterministic(
        keys in key_set(),
        upper in any::<bool>(),
        rust in any::<bool>(),
        package in proptest::option::of("[a-z]{1,6}(\\.[a-z]{1,6}){0,2}"),
    ) {
        let language = if rust { Language::Rust } else { Language::Java };
        let target = GenerationTarget::new(Some("Messages".to_string()), "out")
            .with_package(package)
            .with_convert_to_upper(upper)
            .with_language(language);
        let renderer = renderer_for(language);

        let first = render(&map_of(&keys), &target, renderer.as_ref()).unwrap();
        let second = render(&map_of(&keys), &target, renderer.as_ref()).unwrap();

        prop_assert_eq!(first.content(), second.content());
        prop_assert_eq!(first.path(), second.path());
        prop_assert_eq!(first.hash(), second.hash());
    }

    /// PROPERTY: names are the keys (upper-cased on request) and values are
    /// always the original keys, in first-seen order.
    #[test]
    fn property_constant_names_follow_case_flag(keys in key_set(), upper in any::<bool>()) {
        let target = GenerationTarget::new(Some("Messages".to_string()), "out")
            .with_convert_to_upper(upper);
        let constants = constants_for(&map_of(&keys), &target).unwrap();
        let expected = distinct(&keys);

        prop_assert_eq!(constants.len(), expected.len());
        for (constant, key) in constants.iter().zip(&expected) {
            let name = if upper { key.to_uppercase() } else { key.clone() };
            prop_assert_eq!(&constant.name, &name);
            prop_assert_eq!(&constant.value, key);
        }
    }

    /// PROPERTY: without a class name nothing is rendered.
    #[test]
    fn property_missing_class_name_never_renders(keys in key_set()) {
        let target = GenerationTarget::new(None, "out");
        let renderer = renderer_for(Language::Java);
        prop_assert!(render(&map_of(&keys), &target, renderer.as_ref()).is_err());
    }
}
