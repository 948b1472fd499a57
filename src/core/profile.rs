use serde::{Deserialize, Serialize};

use crate::core::severity::Severity;

/// An ordered sequence of severity values, one per tracked symptom.
///
/// Position is meaning: index `i` always refers to the `i`-th entry of the
/// canonical symptom list, for reference profiles and user submissions alike.
/// Profiles derive structural equality and hashing, so a profile is itself the
/// key for exact lookup in the catalog: two profiles are the same match key
/// exactly when every position agrees.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SymptomProfile(Vec<Severity>);

impl SymptomProfile {
    #[must_use]
    pub fn new(severities: Vec<Severity>) -> Self {
        Self(severities)
    }

    /// Parse a profile from newline-separated severity tokens.
    ///
    /// Each line is trimmed and lower-cased; a trailing newline does not
    /// produce a phantom empty severity. No token is ever rejected.
    #[must_use]
    pub fn from_lines(text: &str) -> Self {
        Self(text.lines().map(Severity::parse).collect())
    }

    /// A profile of the given length with every symptom set to `no`,
    /// matching the presenter's default selection.
    #[must_use]
    pub fn all_no(len: usize) -> Self {
        Self(vec![Severity::No; len])
    }

    #[must_use]
    pub fn severities(&self) -> &[Severity] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Set the severity at a position, ignoring positions past the end.
    pub fn set(&mut self, position: usize, severity: Severity) {
        if let Some(slot) = self.0.get_mut(position) {
            *slot = severity;
        }
    }

    /// Count of positions where both profiles agree on an informative
    /// (non-`no`) severity.
    ///
    /// Zip semantics: profiles of unequal length are compared up to the
    /// shorter length. Agreement on `no` is not informative and never counts.
    #[must_use]
    pub fn overlap(&self, other: &Self) -> usize {
        self.0
            .iter()
            .zip(&other.0)
            .filter(|&(a, b)| a == b && !a.is_no())
            .count()
    }

    /// Count of informative (non-`no`) positions in this profile.
    #[must_use]
    pub fn informative_len(&self) -> usize {
        self.0.iter().filter(|s| !s.is_no()).count()
    }
}

impl From<Vec<Severity>> for SymptomProfile {
    fn from(severities: Vec<Severity>) -> Self {
        Self(severities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn profile(tokens: &[&str]) -> SymptomProfile {
        SymptomProfile::new(tokens.iter().map(|t| Severity::parse(t)).collect())
    }

    #[test]
    fn test_from_lines_trims_and_folds() {
        let p = SymptomProfile::from_lines("High\n low \nNO");
        assert_eq!(
            p.severities(),
            &[Severity::High, Severity::Low, Severity::No]
        );
    }

    #[test]
    fn test_from_lines_ignores_trailing_newline() {
        let with = SymptomProfile::from_lines("high\nlow\nno\n");
        let without = SymptomProfile::from_lines("high\nlow\nno");
        assert_eq!(with, without);
        assert_eq!(with.len(), 3);
    }

    #[test]
    fn test_from_lines_keeps_interior_blank_lines() {
        // A blank line mid-file is a real (empty) position, not noise
        let p = SymptomProfile::from_lines("high\n\nlow");
        assert_eq!(p.len(), 3);
        assert_eq!(p.severities()[1], Severity::Other(String::new()));
    }

    #[test]
    fn test_overlap_counts_informative_agreement() {
        let a = profile(&["high", "low", "no", "high"]);
        let b = profile(&["high", "high", "no", "high"]);
        // Positions 0 and 3 agree informatively; position 2 agrees on "no"
        assert_eq!(a.overlap(&b), 2);
    }

    #[test]
    fn test_overlap_ignores_agreement_on_no() {
        let a = profile(&["no", "no", "no"]);
        let b = profile(&["no", "no", "no"]);
        assert_eq!(a.overlap(&b), 0);
    }

    #[test]
    fn test_overlap_compares_up_to_shorter_length() {
        let short = profile(&["high", "low"]);
        let long = profile(&["high", "low", "high", "high"]);
        assert_eq!(short.overlap(&long), 2);
        assert_eq!(long.overlap(&short), 2);
    }

    #[test]
    fn test_overlap_counts_matching_unknown_tokens() {
        // Out-of-set tokens still count when both sides carry the same one
        let a = profile(&["severe", "no"]);
        let b = profile(&["severe", "no"]);
        assert_eq!(a.overlap(&b), 1);
    }

    #[test]
    fn test_profile_works_as_map_key() {
        let mut map: HashMap<SymptomProfile, &str> = HashMap::new();
        map.insert(profile(&["high", "no", "low"]), "Flu");

        assert_eq!(map.get(&profile(&["high", "no", "low"])), Some(&"Flu"));
        assert_eq!(map.get(&profile(&["high", "no", "high"])), None);
        // Length differences are different keys
        assert_eq!(map.get(&profile(&["high", "no"])), None);
    }

    #[test]
    fn test_all_no() {
        let p = SymptomProfile::all_no(4);
        assert_eq!(p.len(), 4);
        assert_eq!(p.informative_len(), 0);
    }

    #[test]
    fn test_set_ignores_out_of_range() {
        let mut p = SymptomProfile::all_no(2);
        p.set(1, Severity::High);
        p.set(9, Severity::Low);
        assert_eq!(p.severities(), &[Severity::No, Severity::High]);
    }
}
