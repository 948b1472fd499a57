use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Subcommand};

use crate::cli::{load_catalog, OutputFormat};
use crate::core::record::DiseaseName;
use crate::core::symptoms::TRACKED_SYMPTOMS;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all diseases in the catalog
    List {
        /// Path to a flat data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Path to custom catalog file
        #[arg(long, conflicts_with = "data_dir")]
        catalog: Option<PathBuf>,
    },

    /// Show details of a specific disease
    Show {
        /// Disease name
        #[arg(required = true)]
        name: String,

        /// Path to a flat data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Path to custom catalog file
        #[arg(long, conflicts_with = "data_dir")]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a JSON file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to a flat data directory to export
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long, conflicts_with = "data_dir")]
        catalog: Option<PathBuf>,
    },
}

pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { data_dir, catalog } => {
            run_list(data_dir.as_deref(), catalog.as_deref(), format, verbose)
        }
        CatalogCommands::Show {
            name,
            data_dir,
            catalog,
        } => run_show(&name, data_dir.as_deref(), catalog.as_deref(), format, verbose),
        CatalogCommands::Export {
            output,
            data_dir,
            catalog,
        } => run_export(&output, data_dir.as_deref(), catalog.as_deref(), verbose),
    }
}

fn run_list(
    data_dir: Option<&Path>,
    catalog_path: Option<&Path>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(data_dir, catalog_path, verbose)?;

    match format {
        OutputFormat::Text => {
            let name_width = catalog
                .records
                .iter()
                .map(|r| r.name.as_str().len())
                .max()
                .unwrap_or(4)
                .max(4);

            println!("Disease Catalog ({} diseases)\n", catalog.len());
            println!(
                "{:<name_w$} {:>9} {:>12} {:>10}",
                "Name",
                "Signature",
                "Description",
                "Treatment",
                name_w = name_width
            );
            println!("{}", "-".repeat(name_width + 35));

            for r in &catalog.records {
                println!(
                    "{:<name_w$} {:>9} {:>12} {:>10}",
                    r.name.as_str(),
                    mark(r.profile.is_some()),
                    mark(r.description.is_some()),
                    mark(r.treatment.is_some()),
                    name_w = name_width
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = catalog
                .records
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "name": r.name.as_str(),
                        "has_signature": r.profile.is_some(),
                        "has_description": r.description.is_some(),
                        "has_treatment": r.treatment.is_some(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn mark(present: bool) -> &'static str {
    if present {
        "yes"
    } else {
        "-"
    }
}

fn run_show(
    name: &str,
    data_dir: Option<&Path>,
    catalog_path: Option<&Path>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(data_dir, catalog_path, verbose)?;

    let disease = DiseaseName::new(name);
    let record = catalog
        .get(&disease)
        .ok_or_else(|| anyhow::anyhow!("Disease '{}' not found in catalog", name))?;

    match format {
        OutputFormat::Text => {
            println!("Disease: {}\n", record.name);

            match &record.profile {
                Some(profile) => {
                    println!("Signature:");
                    for (symptom, severity) in TRACKED_SYMPTOMS.iter().zip(profile.severities()) {
                        println!("  {symptom:<22} {severity}");
                    }
                }
                None => println!("Signature: none (this disease can never be matched)"),
            }

            println!("\nDescription:\n{}", catalog.description_for(&disease));
            println!("\nTreatment:\n{}", catalog.treatment_for(&disease));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
    }

    Ok(())
}

fn run_export(
    output: &Path,
    data_dir: Option<&Path>,
    catalog_path: Option<&Path>,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(data_dir, catalog_path, verbose)?;

    let json = catalog.to_json()?;
    std::fs::write(output, json)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Exported {} diseases to {}", catalog.len(), output.display());

    Ok(())
}
