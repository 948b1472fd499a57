//! Command-line interface for dx-triage.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **diagnose**: Match a symptom severity profile against the catalog
//! - **catalog**: List, show, or export diseases from the catalog
//! - **symptoms**: Print the tracked symptoms in canonical order
//!
//! ## Usage
//!
//! ```text
//! # Name symptoms directly
//! dx-triage diagnose --set fever=high --set cough=low
//!
//! # Pipe a profile, one severity per line in canonical order
//! cat profile.txt | dx-triage diagnose --input -
//!
//! # JSON output for scripting
//! dx-triage diagnose --set fever=high --format json
//!
//! # Use a legacy flat data directory instead of the embedded catalog
//! dx-triage diagnose --data-dir ./data --set headache=high
//!
//! # Inspect the catalog
//! dx-triage catalog list
//! dx-triage catalog show Flu
//! dx-triage catalog export diseases.json
//! ```

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::catalog::loader;
use crate::catalog::store::DiseaseCatalog;

pub mod catalog;
pub mod diagnose;
pub mod symptoms;

#[derive(Parser)]
#[command(name = "dx-triage")]
#[command(version)]
#[command(about = "Match symptom severity profiles against a catalog of known diseases")]
#[command(
    long_about = "dx-triage matches a submitted symptom severity profile against a catalog of known disease signatures.\n\nEach profile records one severity (high, low, or no) per tracked symptom. Matching is deterministic:\n- An exact profile match wins outright\n- Otherwise the disease sharing the most informative symptoms is suggested\n- Nothing overlapping at all is reported as no match\n\nThis is a triage aid, not a diagnostic device."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a symptom profile against the disease catalog
    Diagnose(diagnose::DiagnoseArgs),

    /// Manage the disease catalog
    Catalog(catalog::CatalogArgs),

    /// Print the tracked symptoms in canonical order
    Symptoms,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Load the catalog a command was pointed at, defaulting to the embedded one
pub(crate) fn load_catalog(
    data_dir: Option<&Path>,
    catalog_path: Option<&Path>,
    verbose: bool,
) -> anyhow::Result<DiseaseCatalog> {
    let catalog = if let Some(dir) = data_dir {
        loader::load_from_dir(dir)
            .with_context(|| format!("Failed to load data directory {}", dir.display()))?
    } else if let Some(path) = catalog_path {
        DiseaseCatalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?
    } else {
        DiseaseCatalog::load_embedded()?
    };

    if verbose {
        eprintln!("Loaded catalog with {} diseases", catalog.len());
    }

    Ok(catalog)
}
