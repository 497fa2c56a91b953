//! Read-only query commands: packages, lookup, search, tree.

use anyhow::Result;
use colored::Colorize;
use doknav_index::search::search;
use doknav_index::tree::PackageTree;
use std::path::Path;

pub fn cmd_packages(input: &Path) -> Result<()> {
    let index = crate::load_index(input)?;
    for (package, members) in index.iter() {
        println!("{package} ({})", members.len());
    }
    Ok(())
}

pub fn cmd_lookup(input: &Path, package: &str) -> Result<()> {
    let index = crate::load_index(input)?;
    let members = index.lookup_package(package);
    if members.is_empty() {
        // Absent and declared-but-empty packages both print as empty; the
        // distinction only matters for tree rendering.
        println!("{} {package}: no documented types", "·".dimmed());
        return Ok(());
    }
    for descriptor in members {
        let kinds: Vec<String> = descriptor
            .pages()
            .map(|(kind, path)| format!("{kind} → {path}"))
            .collect();
        if kinds.is_empty() {
            println!("{}", descriptor.name.bold());
        } else {
            println!("{}  [{}]", descriptor.name.bold(), kinds.join(", "));
        }
    }
    Ok(())
}

pub fn cmd_search(input: &Path, query: &str, limit: usize) -> Result<()> {
    let index = crate::load_index(input)?;
    let hits = search(&index, query);
    if hits.is_empty() {
        println!("{} no matches for `{query}`", "·".dimmed());
        return Ok(());
    }
    for hit in hits.iter().take(limit) {
        println!(
            "{}  {} ({:?})",
            hit.descriptor.name.bold(),
            hit.package.dimmed(),
            hit.rank
        );
    }
    if hits.len() > limit {
        println!("{} {} more hit(s) not shown", "…".dimmed(), hits.len() - limit);
    }
    Ok(())
}

pub fn cmd_tree(input: &Path) -> Result<()> {
    let index = crate::load_index(input)?;
    print!("{}", PackageTree::build(&index).render());
    Ok(())
}
