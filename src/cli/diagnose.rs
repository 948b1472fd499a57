use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{load_catalog, OutputFormat};
use crate::core::profile::SymptomProfile;
use crate::core::severity::Severity;
use crate::core::symptoms::{symptom_count, symptom_position};
use crate::matching::engine::{Diagnosis, MatchedDisease, MatchingEngine};

#[derive(Args)]
pub struct DiagnoseArgs {
    /// Set one symptom's severity, e.g. --set fever=high
    /// May be repeated; unset symptoms default to "no"
    #[arg(long = "set", value_name = "SYMPTOM=SEVERITY")]
    pub set: Vec<String>,

    /// Read the profile from a file, one severity per line in canonical order
    /// Use '-' for stdin
    #[arg(long, value_name = "FILE", conflicts_with = "set")]
    pub input: Option<PathBuf>,

    /// Path to a flat data directory (diseases.txt plus per-disease files)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to custom catalog file
    #[arg(long, conflicts_with = "data_dir")]
    pub catalog: Option<PathBuf>,
}

/// Execute diagnose subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the submitted profile
/// cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DiagnoseArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let profile = read_profile(&args)?;

    if verbose {
        let tokens: Vec<&str> = profile.severities().iter().map(Severity::as_token).collect();
        eprintln!(
            "Submitted profile, {} informative of {} positions: {}",
            profile.informative_len(),
            profile.len(),
            tokens.join(", ")
        );
    }

    let catalog = load_catalog(args.data_dir.as_deref(), args.catalog.as_deref(), verbose)?;

    if catalog.is_empty() {
        eprintln!("Warning: Catalog is empty, no diseases to match against.");
    }

    let engine = MatchingEngine::new(&catalog);
    let diagnosis = engine.diagnose(&profile);

    match format {
        OutputFormat::Text => print_text_result(&diagnosis),
        OutputFormat::Json => print_json_result(&diagnosis, &profile)?,
    }

    Ok(())
}

fn read_profile(args: &DiagnoseArgs) -> anyhow::Result<SymptomProfile> {
    use std::io::{self, Read};

    // File or stdin input takes the profile verbatim, line by line
    if let Some(path) = &args.input {
        let text = if path.to_string_lossy() == "-" {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read profile {}", path.display()))?
        };
        return Ok(SymptomProfile::from_lines(&text));
    }

    // Form-style input: every tracked symptom starts at "no"
    let mut profile = SymptomProfile::all_no(symptom_count());
    for pair in &args.set {
        let (symptom, severity) = pair
            .split_once('=')
            .with_context(|| format!("Invalid --set '{pair}', expected SYMPTOM=SEVERITY"))?;
        let position = symptom_position(symptom).with_context(|| {
            format!("Unknown symptom '{symptom}' (run `dx-triage symptoms` for the tracked list)")
        })?;
        profile.set(position, Severity::parse(severity));
    }

    Ok(profile)
}

fn print_text_result(diagnosis: &Diagnosis) {
    match diagnosis {
        Diagnosis::Exact(matched) => {
            println!("Exact match found");
            print_match(matched, false);
        }
        Diagnosis::Fuzzy(matched) => {
            println!("No exact match. Most probable disease based on the submitted symptoms:");
            print_match(matched, true);
        }
        Diagnosis::NoMatch => {
            println!("No matching disease found.");
        }
    }
}

fn print_match(matched: &MatchedDisease, show_overlap: bool) {
    println!("\nPredicted disease: {}", matched.disease);
    if show_overlap {
        println!("Overlapping symptoms: {}", matched.overlap);
    }
    println!("\nDescription:\n{}", matched.description);
    println!("\nTreatment:\n{}", matched.treatment);
}

fn print_json_result(diagnosis: &Diagnosis, profile: &SymptomProfile) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "profile": profile,
        "diagnosis": diagnosis,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_set(pairs: &[&str]) -> DiagnoseArgs {
        DiagnoseArgs {
            set: pairs.iter().map(ToString::to_string).collect(),
            input: None,
            data_dir: None,
            catalog: None,
        }
    }

    #[test]
    fn test_set_pairs_build_profile() {
        let args = args_with_set(&["Fever=high", "Cough=low"]);
        let profile = read_profile(&args).unwrap();

        assert_eq!(profile.len(), symptom_count());
        assert_eq!(profile.severities()[symptom_position("Fever").unwrap()], Severity::High);
        assert_eq!(profile.severities()[symptom_position("Cough").unwrap()], Severity::Low);
        assert_eq!(profile.informative_len(), 2);
    }

    #[test]
    fn test_no_set_pairs_gives_all_no() {
        let profile = read_profile(&args_with_set(&[])).unwrap();
        assert_eq!(profile.informative_len(), 0);
        assert_eq!(profile.len(), symptom_count());
    }

    #[test]
    fn test_symptom_names_are_folded() {
        let args = args_with_set(&["low_body_temperature=low", "CHEST PAIN=high"]);
        let profile = read_profile(&args).unwrap();
        assert_eq!(profile.informative_len(), 2);
    }

    #[test]
    fn test_unknown_symptom_is_rejected() {
        let err = read_profile(&args_with_set(&["tingling=high"])).unwrap_err();
        assert!(err.to_string().contains("Unknown symptom 'tingling'"));
    }

    #[test]
    fn test_malformed_pair_is_rejected() {
        let err = read_profile(&args_with_set(&["fever"])).unwrap_err();
        assert!(err.to_string().contains("expected SYMPTOM=SEVERITY"));
    }
}
