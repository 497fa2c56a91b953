//! Doknav CLI
//!
//! Unified command-line interface for:
//! - Validating a doc site's package index (`Index.PACKAGES` / bare JSON)
//! - Listing packages and looking up a package's documented types
//! - Reference search over descriptor names
//! - Rendering the package tree the browser would navigate
//! - Round-tripping the index back out (JS-assignment or JSON form)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use doknav_index::{loader, PackageIndex};
use std::path::{Path, PathBuf};

mod check;
mod export;
mod query;

#[derive(Parser)]
#[command(name = "doknav")]
#[command(author, version, about = "Doknav: documentation package-index toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate an index, then report name↔page diagnostics.
    Check {
        /// Index file (`index.js` assignment form or bare JSON)
        input: PathBuf,
        /// Treat name↔page mismatches as failures, not just warnings
        #[arg(long)]
        strict: bool,
    },

    /// List all packages with their member counts.
    Packages {
        /// Index file
        input: PathBuf,
    },

    /// Print the documented types of one package.
    Lookup {
        /// Index file
        input: PathBuf,
        /// Fully qualified package name (e.g. `gov.nasa.jpl.omf.scala.core`)
        package: String,
    },

    /// Search descriptor names (deterministic reference ranking).
    Search {
        /// Index file
        input: PathBuf,
        /// Query, matched case-insensitively
        query: String,
        /// Maximum number of hits to print
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Render the package tree, synthesizing any omitted ancestors.
    Tree {
        /// Index file
        input: PathBuf,
    },

    /// Re-emit a validated index.
    Export {
        /// Index file
        input: PathBuf,
        /// Output file
        #[arg(short, long)]
        out: PathBuf,
        /// Output form
        #[arg(long, value_enum, default_value = "js")]
        format: ExportFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    /// `Index.PACKAGES = {...};` as the doc site loads it
    Js,
    /// Bare JSON payload, pretty-printed
    Json,
}

/// Read and validate an index file in either accepted form.
fn load_index(path: &Path) -> Result<PackageIndex> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading index file `{}`", path.display()))?;
    loader::parse_index(&text)
        .with_context(|| format!("loading package index from `{}`", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Check { input, strict } => check::cmd_check(&input, strict),
        Commands::Packages { input } => query::cmd_packages(&input),
        Commands::Lookup { input, package } => query::cmd_lookup(&input, &package),
        Commands::Search {
            input,
            query,
            limit,
        } => query::cmd_search(&input, &query, limit),
        Commands::Tree { input } => query::cmd_tree(&input),
        Commands::Export { input, out, format } => export::cmd_export(&input, &out, format),
    }
}
