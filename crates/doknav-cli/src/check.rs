//! `doknav check`: whole-load validation plus name↔page diagnostics.

use anyhow::{bail, Result};
use colored::Colorize;
use doknav_index::verify::verify_paths;
use std::path::Path;

pub fn cmd_check(input: &Path, strict: bool) -> Result<()> {
    let index = crate::load_index(input)?;
    println!(
        "{} {}: {} packages, {} documented types",
        "✓".green(),
        input.display(),
        index.package_count(),
        index.descriptor_count()
    );

    let mismatches = verify_paths(&index);
    if mismatches.is_empty() {
        println!("{} all doc-page paths match their names", "✓".green());
        return Ok(());
    }

    for mismatch in &mismatches {
        println!("{} {mismatch}", "warning:".yellow().bold());
    }
    if strict {
        bail!(
            "{} doc-page path(s) do not match their names",
            mismatches.len()
        );
    }
    println!(
        "{} {} mismatch(es); rerun with --strict to fail on these",
        "!".yellow(),
        mismatches.len()
    );
    Ok(())
}
