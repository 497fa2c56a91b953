//! Doknav package index (`Index.PACKAGES`)
//!
//! This crate models the package index a Scaladoc-style documentation
//! generator writes next to its HTML output, and provides:
//!
//! - a whole-load validating parser for both the JS-assignment form
//!   (`Index.PACKAGES = {...};`) and the bare JSON payload ([`loader`]),
//! - read-only queries over the loaded table ([`model`]),
//! - name↔doc-page consistency diagnostics ([`verify`]),
//! - round-trip emission back to either input form ([`emit`]),
//! - a package tree for navigation UIs ([`tree`]), and
//! - a deterministic reference search over descriptors ([`search`]).
//!
//! The loaded [`PackageIndex`] is an immutable value: build it once, then
//! share it by reference. There is intentionally no process-wide singleton
//! standing in for the generator's `Index.PACKAGES` global.

pub mod emit;
pub mod loader;
pub mod model;
pub mod search;
pub mod tree;
pub mod verify;

pub use loader::{parse_index, parse_index_js, parse_index_json, IndexLoadError};
pub use model::{ClassDescriptor, PackageIndex, PageKind};
