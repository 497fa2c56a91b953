//! Core value types for the package index.
//!
//! The index is whole-valued and immutable after load: a mapping from
//! package name to the ordered descriptors of the types documented in it.
//! Key order is not semantically significant in the generator's output, so
//! we store packages in a `BTreeMap` and get deterministic iteration for
//! free; per-package descriptor order *is* preserved exactly as given.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One documented type (class, trait, and/or companion object) and the
/// doc-site pages that describe it.
///
/// Every page field is optional: a trait without a companion has only
/// `trait`, a paired interface + companion has both `trait` and `object`,
/// and so on. `name` is always present and fully qualified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// Doc page for the companion object (`.../Name$.html`), if one exists.
    #[serde(rename = "object", default, skip_serializing_if = "Option::is_none")]
    pub object_page: Option<String>,
    /// Doc page for the trait (`.../Name.html`), if one exists.
    #[serde(rename = "trait", default, skip_serializing_if = "Option::is_none")]
    pub trait_page: Option<String>,
    /// Doc page for the concrete class (`.../Name.html`), if one exists.
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub class_page: Option<String>,
    /// Fully qualified dotted name, e.g. `gov.nasa.jpl.omf.scala.core.OMFOps`.
    pub name: String,
}

/// Which doc page a descriptor field refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Object,
    Trait,
    Class,
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageKind::Object => write!(f, "object"),
            PageKind::Trait => write!(f, "trait"),
            PageKind::Class => write!(f, "class"),
        }
    }
}

impl ClassDescriptor {
    /// Descriptor with only a name and no doc pages.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            object_page: None,
            trait_page: None,
            class_page: None,
            name: name.into(),
        }
    }

    /// The simple (unqualified) name: everything after the last dot.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// The doc pages this descriptor carries, in object/trait/class order.
    pub fn pages(&self) -> impl Iterator<Item = (PageKind, &str)> {
        [
            (PageKind::Object, self.object_page.as_deref()),
            (PageKind::Trait, self.trait_page.as_deref()),
            (PageKind::Class, self.class_page.as_deref()),
        ]
        .into_iter()
        .filter_map(|(kind, page)| page.map(|p| (kind, p)))
    }

    /// Whether the descriptor carries no doc page at all (allowed by the
    /// format; such entries still contribute a name to search).
    pub fn is_pageless(&self) -> bool {
        self.pages().next().is_none()
    }
}

/// The loaded, immutable package → descriptors table.
///
/// Absent packages and declared-but-empty packages (parents listed only for
/// tree structure) are indistinguishable through [`PackageIndex::lookup_package`]:
/// both yield an empty slice, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageIndex {
    packages: BTreeMap<String, Vec<ClassDescriptor>>,
}

impl PackageIndex {
    /// Build from already-validated entries. Callers normally go through
    /// [`crate::loader`] instead, which validates raw generator output.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, Vec<ClassDescriptor>)>,
    ) -> Self {
        Self {
            packages: entries.into_iter().collect(),
        }
    }

    /// Exact-match member lookup. Unknown packages yield `&[]`.
    pub fn lookup_package(&self, name: &str) -> &[ClassDescriptor] {
        self.packages.get(name).map_or(&[], Vec::as_slice)
    }

    /// Whether `name` appears as a key (even with zero members).
    pub fn contains_package(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// All package names, deterministic (sorted) order, no duplicates.
    pub fn list_packages(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    /// Packages with their descriptor slices, sorted by package name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ClassDescriptor])> {
        self.packages
            .iter()
            .map(|(name, members)| (name.as_str(), members.as_slice()))
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Total descriptors across all packages.
    pub fn descriptor_count(&self) -> usize {
        self.packages.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
