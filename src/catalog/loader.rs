//! Flat-file data directory loader.
//!
//! Reads the legacy on-disk layout: a `diseases.txt` naming one disease per
//! line, plus three optional per-disease text files named `<disease>.txt`
//! under `Disease symptoms/`, `Disease descriptions/`, and
//! `Disease treatments/`. The disease list is required; every per-disease
//! file is optional and its absence just leaves that attribute unset.

use std::path::Path;

use tracing::{debug, warn};

use crate::catalog::store::{CatalogError, DiseaseCatalog};
use crate::core::profile::SymptomProfile;
use crate::core::record::DiseaseRecord;
use crate::core::symptoms::symptom_count;

/// File naming the known diseases, one per line
pub const DISEASE_LIST_FILE: &str = "diseases.txt";

/// Directory of per-disease symptom profiles
pub const SYMPTOMS_DIR: &str = "Disease symptoms";

/// Directory of per-disease descriptions
pub const DESCRIPTIONS_DIR: &str = "Disease descriptions";

/// Directory of per-disease treatment notes
pub const TREATMENTS_DIR: &str = "Disease treatments";

/// Load a catalog from a flat data directory.
///
/// Blank lines in the disease list are skipped and names are trimmed. A
/// disease without a profile file stays in the catalog so its details can
/// still be looked up, but it can never be matched.
///
/// # Errors
///
/// Returns [`CatalogError::DiseaseList`] when `diseases.txt` is missing or
/// unreadable, and [`CatalogError::ReadError`] when a per-disease file
/// exists but cannot be read.
pub fn load_from_dir(dir: &Path) -> Result<DiseaseCatalog, CatalogError> {
    let list_path = dir.join(DISEASE_LIST_FILE);
    let list = std::fs::read_to_string(&list_path).map_err(|source| CatalogError::DiseaseList {
        path: list_path,
        source,
    })?;

    let mut catalog = DiseaseCatalog::new();

    for name in list.lines().map(str::trim).filter(|n| !n.is_empty()) {
        let file = format!("{name}.txt");
        let mut record = DiseaseRecord::new(name);

        if let Some(text) = read_optional(&dir.join(SYMPTOMS_DIR).join(&file))? {
            let profile = SymptomProfile::from_lines(&text);
            if profile.len() != symptom_count() {
                warn!(
                    disease = name,
                    lines = profile.len(),
                    expected = symptom_count(),
                    "Symptom profile length differs from the tracked symptom count"
                );
            }
            record = record.with_profile(profile);
        }

        if let Some(text) = read_optional(&dir.join(DESCRIPTIONS_DIR).join(&file))? {
            record = record.with_description(text.trim());
        }

        if let Some(text) = read_optional(&dir.join(TREATMENTS_DIR).join(&file))? {
            record = record.with_treatment(text.trim());
        }

        catalog.add_record(record);
    }

    Ok(catalog)
}

/// Read a file that is allowed to be absent
fn read_optional(path: &Path) -> Result<Option<String>, CatalogError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Optional data file not present");
            Ok(None)
        }
        Err(e) => Err(CatalogError::ReadError(e)),
    }
}
