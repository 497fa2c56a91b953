//! Round-trip emission of a loaded index.
//!
//! [`to_index_js`] writes the same shape the generator does (the
//! `Index.PACKAGES = {...};` assignment); [`to_json`] writes the bare
//! payload. Reloading either output yields a [`PackageIndex`] equal to the
//! original by key set and per-key descriptor sequence. We do not reproduce
//! the generator's cosmetic `\/` escaping; the loader accepts both spellings.

use crate::loader::INDEX_RECEIVER;
use crate::model::PackageIndex;

/// Emit the bare JSON payload.
pub fn to_json(index: &PackageIndex) -> Result<String, serde_json::Error> {
    serde_json::to_string(index)
}

/// Emit the bare JSON payload, pretty-printed for human review.
pub fn to_json_pretty(index: &PackageIndex) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(index)
}

/// Emit the JS-assignment form the doc site loads.
pub fn to_index_js(index: &PackageIndex) -> Result<String, serde_json::Error> {
    Ok(format!("{INDEX_RECEIVER} = {};\n", to_json(index)?))
}
