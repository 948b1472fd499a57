use serde::{Deserialize, Serialize};

use crate::core::profile::SymptomProfile;

/// Unique name of a disease, as listed in the disease list file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiseaseName(pub String);

impl DiseaseName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DiseaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A known disease in the catalog.
///
/// Any of the three data attributes may be absent. Absence is not an error:
/// a disease without a profile can never be matched, and detail lookups
/// substitute fixed fallback strings for missing texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    /// Unique identifier.
    pub name: DiseaseName,

    /// Reference signature: one severity per tracked symptom, canonical order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<SymptomProfile>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-text treatment notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treatment: Option<String>,
}

impl DiseaseRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: DiseaseName::new(name),
            profile: None,
            description: None,
            treatment: None,
        }
    }

    #[must_use]
    pub fn with_profile(mut self, profile: SymptomProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    #[must_use]
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_treatment(mut self, text: impl Into<String>) -> Self {
        self.treatment = Some(text.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::severity::Severity;

    #[test]
    fn test_record_builder() {
        let record = DiseaseRecord::new("Flu")
            .with_profile(SymptomProfile::new(vec![Severity::High]))
            .with_description("Common viral infection.")
            .with_treatment("Rest and fluids.");

        assert_eq!(record.name.as_str(), "Flu");
        assert!(record.profile.is_some());
        assert_eq!(record.description.as_deref(), Some("Common viral infection."));
        assert_eq!(record.treatment.as_deref(), Some("Rest and fluids."));
    }

    #[test]
    fn test_record_attributes_default_to_absent() {
        let record = DiseaseRecord::new("Mystery");
        assert!(record.profile.is_none());
        assert!(record.description.is_none());
        assert!(record.treatment.is_none());
    }

    #[test]
    fn test_record_json_omits_absent_attributes() {
        let json = serde_json::to_string(&DiseaseRecord::new("Mystery")).unwrap();
        assert_eq!(json, r#"{"name":"Mystery"}"#);
    }
}
