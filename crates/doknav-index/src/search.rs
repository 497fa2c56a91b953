//! Deterministic reference search over descriptor names.
//!
//! The browser ships its own fuzzy matcher; this is the reference
//! implementation over the same data, with a small fixed ranking so results
//! are stable and testable: exact simple name, then simple-name prefix,
//! then simple-name substring, then substring anywhere in the fully
//! qualified name. Matching is case-insensitive; ties break by FQN.

use crate::model::{ClassDescriptor, PackageIndex};

/// Match quality, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchRank {
    ExactName,
    NamePrefix,
    NameSubstring,
    FqnSubstring,
}

/// A scored hit, borrowing the matched descriptor from the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub package: &'a str,
    pub descriptor: &'a ClassDescriptor,
    pub rank: MatchRank,
}

fn rank(query: &str, descriptor: &ClassDescriptor) -> Option<MatchRank> {
    let simple = descriptor.simple_name().to_ascii_lowercase();
    if simple == query {
        return Some(MatchRank::ExactName);
    }
    if simple.starts_with(query) {
        return Some(MatchRank::NamePrefix);
    }
    if simple.contains(query) {
        return Some(MatchRank::NameSubstring);
    }
    if descriptor.name.to_ascii_lowercase().contains(query) {
        return Some(MatchRank::FqnSubstring);
    }
    None
}

/// Search all descriptors. An empty or whitespace query matches nothing.
pub fn search<'a>(index: &'a PackageIndex, query: &str) -> Vec<SearchHit<'a>> {
    let query = query.trim().to_ascii_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit<'a>> = Vec::new();
    for (package, descriptors) in index.iter() {
        for descriptor in descriptors {
            if let Some(rank) = rank(&query, descriptor) {
                hits.push(SearchHit {
                    package,
                    descriptor,
                    rank,
                });
            }
        }
    }
    hits.sort_by(|a, b| {
        a.rank
            .cmp(&b.rank)
            .then_with(|| a.descriptor.name.cmp(&b.descriptor.name))
    });
    hits
}
