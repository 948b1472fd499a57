use serde::Serialize;

use crate::catalog::store::DiseaseCatalog;
use crate::core::profile::SymptomProfile;
use crate::core::record::DiseaseName;

/// A matched disease with its details resolved for display.
///
/// `description` and `treatment` already carry the fixed fallback strings
/// when the record has no stored text, so presenters can render the fields
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedDisease {
    /// The matched disease
    pub disease: DiseaseName,

    /// Description text, fallback substituted
    pub description: String,

    /// Treatment notes, fallback substituted
    pub treatment: String,

    /// Informative positions agreeing with the stored profile. For an exact
    /// match this equals the submitted profile's informative length.
    pub overlap: usize,
}

/// Result of matching a submitted profile against the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Diagnosis {
    /// The submitted profile is identical to a stored one
    Exact(MatchedDisease),

    /// No identical profile; best informative overlap across the catalog
    Fuzzy(MatchedDisease),

    /// No identical profile and no overlap on any informative position
    NoMatch,
}

impl Diagnosis {
    /// The matched disease, if any
    pub fn matched(&self) -> Option<&MatchedDisease> {
        match self {
            Diagnosis::Exact(m) | Diagnosis::Fuzzy(m) => Some(m),
            Diagnosis::NoMatch => None,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Diagnosis::Exact(_))
    }
}

/// The main matching engine. Matching never mutates the catalog.
pub struct MatchingEngine<'a> {
    catalog: &'a DiseaseCatalog,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine over a catalog
    pub fn new(catalog: &'a DiseaseCatalog) -> Self {
        Self { catalog }
    }

    /// Match a submitted profile against the catalog.
    ///
    /// Step 1 looks the profile up verbatim; a hit ends the search even when
    /// some other disease would tie it on overlap. Step 2 scans the stored
    /// profiles in catalog order and keeps the first one with the strictly
    /// highest informative overlap. A best overlap of zero means nothing in
    /// the catalog resembles the input, which is reported as no match rather
    /// than an arbitrary disease.
    pub fn diagnose(&self, input: &SymptomProfile) -> Diagnosis {
        // Step 1: exact profile lookup
        if let Some(record) = self.catalog.find_by_profile(input) {
            return Diagnosis::Exact(self.resolve(&record.name, input.informative_len()));
        }

        // Step 2: best-overlap scan
        if let Some((best, overlap)) = self.best_overlap(input) {
            // Resolve through the exact-match index so a shadowed duplicate
            // profile names the same disease in both steps
            if let Some(record) = self.catalog.find_by_profile(best) {
                return Diagnosis::Fuzzy(self.resolve(&record.name, overlap));
            }
        }

        Diagnosis::NoMatch
    }

    /// First stored profile with the strictly highest nonzero overlap
    fn best_overlap(&self, input: &SymptomProfile) -> Option<(&'a SymptomProfile, usize)> {
        let mut best: Option<&SymptomProfile> = None;
        let mut max_overlap = 0;

        for known in self.catalog.profiles() {
            let overlap = input.overlap(known);
            if overlap > max_overlap {
                max_overlap = overlap;
                best = Some(known);
            }
        }

        best.map(|profile| (profile, max_overlap))
    }

    /// Build the display result for a disease, substituting detail fallbacks
    fn resolve(&self, name: &DiseaseName, overlap: usize) -> MatchedDisease {
        MatchedDisease {
            disease: name.clone(),
            description: self.catalog.description_for(name).to_string(),
            treatment: self.catalog.treatment_for(name).to_string(),
            overlap,
        }
    }
}
