use crate::cli::OutputFormat;
use crate::core::symptoms::TRACKED_SYMPTOMS;

/// Execute symptoms subcommand.
///
/// Prints the tracked symptoms in the canonical order profile positions
/// refer to, so file-based profiles can be written against it.
pub fn run(format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for (position, symptom) in TRACKED_SYMPTOMS.iter().enumerate() {
                println!("{:>2}. {symptom}", position + 1);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&TRACKED_SYMPTOMS)?);
        }
    }

    Ok(())
}
