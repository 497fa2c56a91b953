use doknav_index::emit::{to_index_js, to_json};
use doknav_index::loader::{parse_index_js, parse_index_json};
use doknav_index::model::{ClassDescriptor, PackageIndex, PageKind};
use doknav_index::verify::expected_page;
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    // Stay inside the loader's dotted-identifier grammar.
    proptest::string::string_regex("[a-z][a-z0-9_]{0,6}").unwrap()
}

fn package_name() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=4).prop_map(|segs| segs.join("."))
}

fn type_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Za-z0-9]{0,8}").unwrap()
}

fn descriptor(package: String) -> impl Strategy<Value = ClassDescriptor> {
    (type_name(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        move |(ty, object, tr, class)| {
            let name = format!("{package}.{ty}");
            ClassDescriptor {
                object_page: object.then(|| expected_page(&name, PageKind::Object)),
                trait_page: tr.then(|| expected_page(&name, PageKind::Trait)),
                class_page: class.then(|| expected_page(&name, PageKind::Class)),
                name,
            }
        },
    )
}

fn package_entry() -> impl Strategy<Value = (String, Vec<ClassDescriptor>)> {
    package_name().prop_flat_map(|package| {
        let descriptors = proptest::collection::vec(descriptor(package.clone()), 0..5);
        (Just(package), descriptors)
    })
}

fn package_index() -> impl Strategy<Value = PackageIndex> {
    // Duplicate package names collapse last-wins, mirroring the loader.
    proptest::collection::vec(package_entry(), 0..8).prop_map(PackageIndex::from_entries)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn js_emit_then_reload_is_identity(index in package_index()) {
        let emitted = to_index_js(&index).expect("emit js");
        let reloaded = parse_index_js(&emitted).expect("reload js");
        prop_assert_eq!(reloaded, index);
    }

    #[test]
    fn json_emit_then_reload_is_identity(index in package_index()) {
        let emitted = to_json(&index).expect("emit json");
        let reloaded = parse_index_json(&emitted).expect("reload json");
        prop_assert_eq!(reloaded, index);
    }

    #[test]
    fn list_packages_matches_key_set(index in package_index()) {
        let listed: Vec<String> = index.list_packages().map(str::to_string).collect();
        let mut deduped = listed.clone();
        deduped.dedup();
        prop_assert_eq!(&listed, &deduped);
        for package in &listed {
            prop_assert!(index.contains_package(package));
        }
        prop_assert_eq!(listed.len(), index.package_count());
    }
}
