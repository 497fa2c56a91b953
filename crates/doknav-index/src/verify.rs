//! Name↔doc-page consistency diagnostics.
//!
//! The generator lays doc pages out so that a fully qualified name, dots
//! replaced by `/`, is the page path: traits and classes get
//! `<slashed>.html`, companion objects get `<slashed>$.html`. A mismatch
//! means the index points a navigation entry at the wrong page.
//!
//! Mismatches are diagnostics, not load errors: the index is still a valid
//! table, so `check`-style tooling reports them instead of the loader
//! rejecting the whole file.

use crate::model::{PackageIndex, PageKind};

/// One descriptor page that does not match its `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMismatch {
    pub package: String,
    pub name: String,
    pub kind: PageKind,
    pub path: String,
    /// The path the generator's layout would produce for this name.
    pub expected: String,
}

impl std::fmt::Display for PathMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} `{}` in `{}`: page `{}` does not match name (expected `{}`)",
            self.kind, self.name, self.package, self.path, self.expected
        )
    }
}

/// The page path implied by `name` for a given page kind.
pub fn expected_page(name: &str, kind: PageKind) -> String {
    let slashed = name.replace('.', "/");
    match kind {
        PageKind::Object => format!("{slashed}$.html"),
        PageKind::Trait | PageKind::Class => format!("{slashed}.html"),
    }
}

/// Check every descriptor page in the index against its name. Returns all
/// mismatches; an empty result means the layout invariant holds.
pub fn verify_paths(index: &PackageIndex) -> Vec<PathMismatch> {
    let mut mismatches = Vec::new();
    for (package, descriptors) in index.iter() {
        for descriptor in descriptors {
            for (kind, path) in descriptor.pages() {
                let expected = expected_page(&descriptor.name, kind);
                if path != expected {
                    mismatches.push(PathMismatch {
                        package: package.to_string(),
                        name: descriptor.name.clone(),
                        kind,
                        path: path.to_string(),
                        expected,
                    });
                }
            }
        }
    }
    mismatches
}
