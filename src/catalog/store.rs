use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::core::profile::SymptomProfile;
use crate::core::record::{DiseaseName, DiseaseRecord};
use crate::core::symptoms::TRACKED_SYMPTOMS;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to read disease list {path}: {source}")]
    DiseaseList {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Description shown when a disease has no stored description
pub const DESCRIPTION_FALLBACK: &str = "No details available.";

/// Treatment shown when a disease has no stored treatment notes
pub const TREATMENT_FALLBACK: &str = "No treatment available.";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    /// Tracked symptom names, in the order profile positions refer to them
    pub symptoms: Vec<String>,
    pub diseases: Vec<DiseaseRecord>,
}

/// The disease catalog with lookup indexes.
///
/// Records keep their load order. The profile index resolves exact matches;
/// when two diseases carry an identical profile the later one owns it, but
/// the fuzzy scan still visits that profile at its first-seen position.
#[derive(Debug)]
pub struct DiseaseCatalog {
    /// All known diseases, in load order
    pub records: Vec<DiseaseRecord>,

    /// Index: disease name -> index in records vec
    name_to_index: HashMap<DiseaseName, usize>,

    /// Index: symptom profile -> index in records vec (exact matches)
    profile_to_record: HashMap<SymptomProfile, usize>,

    /// Distinct profiles in first-insertion order (fuzzy scan order)
    profile_order: Vec<SymptomProfile>,
}

impl DiseaseCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            name_to_index: HashMap::new(),
            profile_to_record: HashMap::new(),
            profile_order: Vec::new(),
        }
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time via build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/diseases.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "Catalog version mismatch"
            );
        }

        // The symptom list is informational. Positions rule, so a renamed or
        // reordered list only earns a warning.
        let canonical = data.symptoms.iter().map(String::as_str);
        if !canonical.eq(TRACKED_SYMPTOMS.iter().copied()) {
            warn!("Catalog symptom list differs from the tracked symptom set");
        }

        let mut catalog = Self::new();
        for disease in data.diseases {
            catalog.add_record(disease);
        }

        Ok(catalog)
    }

    /// Add a disease to the catalog.
    ///
    /// A record whose profile collides with an earlier one takes over the
    /// exact-match slot for that profile; the earlier disease stays listed
    /// but can only be found by name.
    pub fn add_record(&mut self, record: DiseaseRecord) {
        let index = self.records.len();

        // Index by name
        if self.name_to_index.insert(record.name.clone(), index).is_some() {
            warn!(
                disease = %record.name,
                "Duplicate disease name in catalog, keeping the later entry"
            );
        }

        // Index by profile
        if let Some(profile) = &record.profile {
            match self.profile_to_record.entry(profile.clone()) {
                Entry::Occupied(mut entry) => {
                    warn!(
                        winner = %record.name,
                        shadowed = %self.records[*entry.get()].name,
                        "Identical symptom profile already in catalog, later entry takes it over"
                    );
                    entry.insert(index);
                }
                Entry::Vacant(entry) => {
                    entry.insert(index);
                    self.profile_order.push(profile.clone());
                }
            }
        }

        self.records.push(record);
    }

    /// Get a disease by name
    pub fn get(&self, name: &DiseaseName) -> Option<&DiseaseRecord> {
        self.name_to_index.get(name).map(|&idx| &self.records[idx])
    }

    /// Find exact match by symptom profile
    pub fn find_by_profile(&self, profile: &SymptomProfile) -> Option<&DiseaseRecord> {
        self.profile_to_record
            .get(profile)
            .map(|&idx| &self.records[idx])
    }

    /// Distinct stored profiles, in the order the fuzzy phase scans them
    pub fn profiles(&self) -> &[SymptomProfile] {
        &self.profile_order
    }

    /// Description for a disease, or the fixed fallback when there is none.
    ///
    /// Unknown names also get the fallback, so a caller can render any match
    /// result without a second lookup.
    pub fn description_for(&self, name: &DiseaseName) -> &str {
        self.get(name)
            .and_then(|r| r.description.as_deref())
            .unwrap_or(DESCRIPTION_FALLBACK)
    }

    /// Treatment notes for a disease, or the fixed fallback when there are none
    pub fn treatment_for(&self, name: &DiseaseName) -> &str {
        self.get(name)
            .and_then(|r| r.treatment.as_deref())
            .unwrap_or(TREATMENT_FALLBACK)
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            symptoms: TRACKED_SYMPTOMS.iter().map(ToString::to_string).collect(),
            diseases: self.records.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of diseases in catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for DiseaseCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::severity::Severity;
    use crate::core::symptoms::symptom_count;

    fn profile(tokens: &[&str]) -> SymptomProfile {
        tokens
            .iter()
            .map(|t| Severity::parse(t))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_embedded_profiles_cover_tracked_symptoms() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();
        for record in &catalog.records {
            let profile = record.profile.as_ref().unwrap();
            assert_eq!(profile.len(), symptom_count(), "{}", record.name);
        }
    }

    #[test]
    fn test_embedded_symptom_list_matches_tracked_order() {
        // Profile positions are meaningless if the shipped symptom order drifts
        let data: CatalogData =
            serde_json::from_str(include_str!("../../catalogs/diseases.json")).unwrap();
        assert_eq!(data.symptoms, TRACKED_SYMPTOMS);
    }

    #[test]
    fn test_catalog_get_by_name() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();

        let flu = catalog.get(&DiseaseName::new("Flu"));
        assert!(flu.is_some());
        let flu = flu.unwrap();
        assert!(flu.profile.is_some());
        assert!(flu.description.is_some());
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();
        let result = catalog.get(&DiseaseName::new("Nonexistent Disease"));
        assert!(result.is_none());
    }

    #[test]
    fn test_find_by_profile() {
        let mut catalog = DiseaseCatalog::new();
        let record = DiseaseRecord::new("Testitis").with_profile(profile(&["high", "no", "low"]));
        catalog.add_record(record);

        let hit = catalog.find_by_profile(&profile(&["high", "no", "low"]));
        assert_eq!(hit.unwrap().name.as_str(), "Testitis");

        let miss = catalog.find_by_profile(&profile(&["high", "no", "high"]));
        assert!(miss.is_none());
    }

    #[test]
    fn test_duplicate_profile_later_entry_wins() {
        let mut catalog = DiseaseCatalog::new();
        catalog.add_record(DiseaseRecord::new("First").with_profile(profile(&["high", "low"])));
        catalog.add_record(DiseaseRecord::new("Second").with_profile(profile(&["high", "low"])));

        // Both records stay listed
        assert_eq!(catalog.len(), 2);

        // Exact lookup resolves to the later disease
        let hit = catalog.find_by_profile(&profile(&["high", "low"])).unwrap();
        assert_eq!(hit.name.as_str(), "Second");

        // The fuzzy scan still sees one profile, at its first-seen slot
        assert_eq!(catalog.profiles().len(), 1);
    }

    #[test]
    fn test_profiles_keep_insertion_order() {
        let mut catalog = DiseaseCatalog::new();
        catalog.add_record(DiseaseRecord::new("A").with_profile(profile(&["high", "no"])));
        catalog.add_record(DiseaseRecord::new("B"));
        catalog.add_record(DiseaseRecord::new("C").with_profile(profile(&["no", "high"])));

        let order: Vec<_> = catalog.profiles().to_vec();
        assert_eq!(order, vec![profile(&["high", "no"]), profile(&["no", "high"])]);
    }

    #[test]
    fn test_detail_fallbacks() {
        let mut catalog = DiseaseCatalog::new();
        catalog.add_record(DiseaseRecord::new("Bare"));
        catalog.add_record(
            DiseaseRecord::new("Documented")
                .with_description("A described disease.")
                .with_treatment("Rest."),
        );

        let bare = DiseaseName::new("Bare");
        assert_eq!(catalog.description_for(&bare), DESCRIPTION_FALLBACK);
        assert_eq!(catalog.treatment_for(&bare), TREATMENT_FALLBACK);

        let documented = DiseaseName::new("Documented");
        assert_eq!(catalog.description_for(&documented), "A described disease.");
        assert_eq!(catalog.treatment_for(&documented), "Rest.");

        // Unknown names fall back too instead of panicking
        let unknown = DiseaseName::new("Unknown");
        assert_eq!(catalog.description_for(&unknown), DESCRIPTION_FALLBACK);
        assert_eq!(catalog.treatment_for(&unknown), TREATMENT_FALLBACK);
    }

    #[test]
    fn test_catalog_to_json() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"symptoms\""));
        assert!(json.contains("\"diseases\""));
        assert!(json.contains("Flu"));
    }

    #[test]
    fn test_json_round_trip() {
        let mut catalog = DiseaseCatalog::new();
        catalog.add_record(
            DiseaseRecord::new("Roundtrip")
                .with_profile(profile(&["high"; 13]))
                .with_description("desc")
                .with_treatment("treat"),
        );

        let json = catalog.to_json().unwrap();
        let reloaded = DiseaseCatalog::from_json(&json).unwrap();

        assert_eq!(reloaded.len(), 1);
        let record = reloaded.get(&DiseaseName::new("Roundtrip")).unwrap();
        assert_eq!(record.description.as_deref(), Some("desc"));
        assert!(reloaded.find_by_profile(&profile(&["high"; 13])).is_some());
    }

    #[test]
    fn test_version_mismatch_still_loads() {
        let data = CatalogData {
            version: "0.9.0".to_string(),
            created_at: "2020-01-01T00:00:00Z".to_string(),
            symptoms: TRACKED_SYMPTOMS.iter().map(ToString::to_string).collect(),
            diseases: vec![DiseaseRecord::new("Legacy").with_profile(profile(&["low"; 13]))],
        };

        let json = serde_json::to_string(&data).unwrap();
        let catalog = DiseaseCatalog::from_json(&json).unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.find_by_profile(&profile(&["low"; 13])).is_some());
    }
}
