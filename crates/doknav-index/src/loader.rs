//! Whole-load validation of generator output into a [`PackageIndex`].
//!
//! The generator writes the index as a JS assignment to a well-known global:
//!
//! ```text
//! Index.PACKAGES = {"gov.nasa.jpl.omf.scala.core" : [{"object" : "...", "name" : "..."}], ...};
//! ```
//!
//! [`parse_index`] accepts either that form or the bare JSON payload.
//! Validation is all-or-nothing: a single malformed entry rejects the whole
//! load, because a partially-loaded index would silently misrepresent the
//! documented library to the browser user.

use crate::model::{ClassDescriptor, PackageIndex};
use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::char as pchar,
    combinator::all_consuming,
    multi::separated_list1,
    sequence::pair,
    IResult,
};
use serde_json::Value;
use thiserror::Error;

/// The well-known receiver the generator assigns the index to.
pub const INDEX_RECEIVER: &str = "Index.PACKAGES";

/// Load-time failures. There is no recovery path other than rejecting the
/// whole load; partial indexes are never exposed.
#[derive(Debug, Error)]
pub enum IndexLoadError {
    #[error("package index is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected `{INDEX_RECEIVER} = {{...}}` assignment")]
    MissingAssignment,

    #[error("top-level value must be an object mapping package names to arrays")]
    NotAnObject,

    #[error("package `{package}`: members must be an array")]
    NotAnArray { package: String },

    #[error("package key `{key}` is not a valid dotted identifier")]
    InvalidPackageName { key: String },

    #[error("package `{package}`, entry {position}: {reason}")]
    MalformedEntry {
        package: String,
        position: usize,
        reason: String,
    },
}

/// Parse either accepted input form, auto-detected: a bare JSON object, or
/// the `Index.PACKAGES = {...};` assignment.
pub fn parse_index(text: &str) -> Result<PackageIndex, IndexLoadError> {
    if text.trim_start().starts_with('{') {
        parse_index_json(text)
    } else {
        parse_index_js(text)
    }
}

/// Parse the JS-assignment form exactly as the generator writes it.
/// The trailing `;` is optional.
pub fn parse_index_js(text: &str) -> Result<PackageIndex, IndexLoadError> {
    let rest = text
        .trim_start()
        .strip_prefix(INDEX_RECEIVER)
        .ok_or(IndexLoadError::MissingAssignment)?;
    let payload = rest
        .trim_start()
        .strip_prefix('=')
        .ok_or(IndexLoadError::MissingAssignment)?;
    parse_index_json(payload.trim().trim_end_matches(';'))
}

/// Parse the bare JSON payload (the object the generator assigns).
pub fn parse_index_json(text: &str) -> Result<PackageIndex, IndexLoadError> {
    let value: Value = serde_json::from_str(text)?;
    validate(value)
}

fn validate(value: Value) -> Result<PackageIndex, IndexLoadError> {
    let Value::Object(packages) = value else {
        return Err(IndexLoadError::NotAnObject);
    };

    let mut entries = Vec::with_capacity(packages.len());
    for (key, members) in packages {
        if !is_valid_package_name(&key) {
            return Err(IndexLoadError::InvalidPackageName { key });
        }
        let Value::Array(members) = members else {
            return Err(IndexLoadError::NotAnArray { package: key });
        };

        let mut descriptors = Vec::with_capacity(members.len());
        for (position, member) in members.into_iter().enumerate() {
            let descriptor = validate_descriptor(member).map_err(|reason| {
                IndexLoadError::MalformedEntry {
                    package: key.clone(),
                    position,
                    reason,
                }
            })?;
            descriptors.push(descriptor);
        }
        entries.push((key, descriptors));
    }

    Ok(PackageIndex::from_entries(entries))
}

fn validate_descriptor(member: Value) -> Result<ClassDescriptor, String> {
    let Value::Object(fields) = member else {
        return Err("descriptor must be an object".to_string());
    };

    let mut descriptor = ClassDescriptor::named(String::new());
    let mut saw_name = false;
    for (key, value) in fields {
        // Every descriptor field must be a string. Fields from newer
        // generators (e.g. "case class" pages) are tolerated and dropped.
        match key.as_str() {
            "name" => {
                let name = expect_string("name", value)?;
                if !is_valid_package_name(&name) {
                    return Err(format!("`name` is not a valid dotted identifier: `{name}`"));
                }
                descriptor.name = name;
                saw_name = true;
            }
            "object" => descriptor.object_page = Some(expect_string("object", value)?),
            "trait" => descriptor.trait_page = Some(expect_string("trait", value)?),
            "class" => descriptor.class_page = Some(expect_string("class", value)?),
            other => {
                expect_string(other, value)?;
            }
        }
    }

    if !saw_name {
        return Err("missing mandatory `name` field".to_string());
    }
    Ok(descriptor)
}

fn expect_string(field: &str, value: Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(format!("`{field}` must be a string, got {other}")),
    }
}

fn is_segment_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_segment_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn segment(input: &str) -> IResult<&str, (&str, &str)> {
    pair(take_while1(is_segment_start), take_while(is_segment_continue))(input)
}

/// Whether `s` is a syntactically valid dotted identifier
/// (`seg(.seg)*`, segments `[A-Za-z_$][A-Za-z0-9_$]*`).
pub fn is_valid_package_name(s: &str) -> bool {
    all_consuming(separated_list1(pchar('.'), segment))(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_generator_identifiers() {
        assert!(is_valid_package_name("gov.nasa.jpl.omf.scala.core"));
        assert!(is_valid_package_name("gov"));
        assert!(is_valid_package_name("a.b.C"));
        assert!(is_valid_package_name("a._private.B$"));
    }

    #[test]
    fn rejects_non_identifiers() {
        assert!(!is_valid_package_name(""));
        assert!(!is_valid_package_name("a."));
        assert!(!is_valid_package_name(".a"));
        assert!(!is_valid_package_name("a..b"));
        assert!(!is_valid_package_name("a b"));
        assert!(!is_valid_package_name("a.1b"));
        assert!(!is_valid_package_name("a/b"));
    }

    #[test]
    fn js_form_requires_the_receiver() {
        let err = parse_index_js("window.PACKAGES = {}").unwrap_err();
        assert!(matches!(err, IndexLoadError::MissingAssignment));
        assert!(parse_index_js("Index.PACKAGES = {}").is_ok());
        assert!(parse_index_js("Index.PACKAGES = {};").is_ok());
    }

    #[test]
    fn escaped_slashes_in_paths_are_accepted() {
        // The generator escapes `/` as `\/` in its JSON output.
        let index = parse_index_js(
            r#"Index.PACKAGES = {"a.b" : [{"object" : "a\/b\/C$.html", "name" : "a.b.C"}]};"#,
        )
        .expect("parse");
        assert_eq!(
            index.lookup_package("a.b")[0].object_page.as_deref(),
            Some("a/b/C$.html")
        );
    }
}
