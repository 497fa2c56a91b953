//! Integration tests for the complete Doknav pipeline
//!
//! These tests verify end-to-end functionality across crates:
//! - Load → validate → query
//! - Tree construction → search over the same loaded value
//! - Emit → reload round trip
//!
//! Run with: cargo test --test integration_tests

use doknav_index::emit::to_index_js;
use doknav_index::loader::{parse_index, parse_index_js};
use doknav_index::search::{search, MatchRank};
use doknav_index::tree::PackageTree;
use doknav_index::verify::verify_paths;
use doknav_index::IndexLoadError;

const OMF_SLICE: &str = concat!(
    r#"Index.PACKAGES = {"gov.nasa.jpl.omf.scala.core" : ["#,
    r#"{"trait" : "gov\/nasa\/jpl\/omf\/scala\/core\/OMF.html", "name" : "gov.nasa.jpl.omf.scala.core.OMF"}, "#,
    r#"{"trait" : "gov\/nasa\/jpl\/omf\/scala\/core\/OMFOps.html", "object" : "gov\/nasa\/jpl\/omf\/scala\/core\/OMFOps$.html", "name" : "gov.nasa.jpl.omf.scala.core.OMFOps"}, "#,
    r#"{"object" : "gov\/nasa\/jpl\/omf\/scala\/core\/TerminologyKind$.html", "name" : "gov.nasa.jpl.omf.scala.core.TerminologyKind"}"#,
    r#"], "gov.nasa" : [], "gov" : []};"#
);

#[test]
fn load_query_tree_and_search_agree_on_one_value() {
    let index = parse_index_js(OMF_SLICE).expect("load");

    // Query layer.
    let core = index.lookup_package("gov.nasa.jpl.omf.scala.core");
    assert_eq!(core.len(), 3);
    assert!(index.lookup_package("gov").is_empty());
    assert!(index.lookup_package("com.example").is_empty());
    assert!(verify_paths(&index).is_empty());

    // Tree synthesizes the ancestors the generator omitted (`gov.nasa.jpl`,
    // `gov.nasa.jpl.omf`, `gov.nasa.jpl.omf.scala`).
    let tree = PackageTree::build(&index);
    let jpl = tree.find("gov.nasa.jpl").expect("synthesized jpl");
    assert!(!jpl.declared);
    assert_eq!(jpl.total_members(), 3);
    assert!(tree.find("gov.nasa").expect("declared parent").declared);

    // Search runs over the same immutable value.
    let hits = search(&index, "omf");
    assert_eq!(hits[0].descriptor.name, "gov.nasa.jpl.omf.scala.core.OMF");
    assert_eq!(hits[0].rank, MatchRank::ExactName);
    assert!(hits
        .iter()
        .any(|h| h.descriptor.name.ends_with("TerminologyKind")));
}

#[test]
fn emit_reload_preserves_the_table() {
    let index = parse_index_js(OMF_SLICE).expect("load");
    let emitted = to_index_js(&index).expect("emit");
    let reloaded = parse_index(&emitted).expect("reload");
    assert_eq!(reloaded, index);
    assert_eq!(reloaded.descriptor_count(), 3);
}

#[test]
fn one_malformed_entry_rejects_everything() {
    // The valid `gov` entry must not survive the failed load.
    let result = parse_index_js(
        r#"Index.PACKAGES = {"gov" : [], "bad" : [{"trait" : "bad/T.html"}]};"#,
    );
    assert!(matches!(
        result.unwrap_err(),
        IndexLoadError::MalformedEntry { .. }
    ));
}
