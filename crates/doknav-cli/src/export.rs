//! `doknav export`: round-trip a validated index back out.

use anyhow::{Context, Result};
use colored::Colorize;
use doknav_index::emit;
use std::path::Path;

pub fn cmd_export(input: &Path, out: &Path, format: crate::ExportFormat) -> Result<()> {
    let index = crate::load_index(input)?;
    let rendered = match format {
        crate::ExportFormat::Js => emit::to_index_js(&index),
        crate::ExportFormat::Json => emit::to_json_pretty(&index),
    }
    .context("serializing package index")?;

    std::fs::write(out, rendered)
        .with_context(|| format!("writing `{}`", out.display()))?;
    println!(
        "{} exported {} packages to {}",
        "✓".green(),
        index.package_count(),
        out.display()
    );
    Ok(())
}
