//! The canonical ordered list of tracked symptoms.
//!
//! This order is the positional contract shared by every producer and consumer
//! of a profile: reference profile files list one severity per line in this
//! order, and presenters collect selections in this order. Index `i` of any
//! profile always refers to `TRACKED_SYMPTOMS[i]`. Nothing else in the
//! codebase is allowed to define its own symptom ordering.

/// Tracked symptom names, in canonical order.
pub const TRACKED_SYMPTOMS: [&str; 13] = [
    "Headache",
    "Cough",
    "Chest Pain",
    "Restlessness",
    "Fatigue",
    "Sunken Eyes",
    "Blurred Vision",
    "Sore Throat",
    "Fainting",
    "Back Pain",
    "Nausea",
    "Low Body Temperature",
    "Fever",
];

/// Number of tracked symptoms; every well-formed profile has this many entries.
#[must_use]
pub fn symptom_count() -> usize {
    TRACKED_SYMPTOMS.len()
}

/// Resolve a symptom name to its canonical position.
///
/// Matching is case-insensitive and treats `-` and `_` as spaces, so
/// `chest_pain`, `Chest-Pain`, and `chest pain` all resolve to the same slot.
#[must_use]
pub fn symptom_position(name: &str) -> Option<usize> {
    let wanted = normalize(name);
    TRACKED_SYMPTOMS.iter().position(|s| normalize(s) == wanted)
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symptom_count() {
        assert_eq!(symptom_count(), 13);
        assert_eq!(TRACKED_SYMPTOMS.len(), symptom_count());
    }

    #[test]
    fn test_symptom_position_exact() {
        assert_eq!(symptom_position("Headache"), Some(0));
        assert_eq!(symptom_position("Fever"), Some(12));
    }

    #[test]
    fn test_symptom_position_is_lenient_about_spelling() {
        assert_eq!(symptom_position("chest_pain"), Some(2));
        assert_eq!(symptom_position("Chest-Pain"), Some(2));
        assert_eq!(symptom_position("  low  body  temperature "), Some(11));
    }

    #[test]
    fn test_symptom_position_unknown() {
        assert_eq!(symptom_position("hiccups"), None);
        assert_eq!(symptom_position(""), None);
    }

    #[test]
    fn test_names_are_distinct_after_normalization() {
        for (i, a) in TRACKED_SYMPTOMS.iter().enumerate() {
            for b in TRACKED_SYMPTOMS.iter().skip(i + 1) {
                assert_ne!(normalize(a), normalize(b), "{a} vs {b}");
            }
        }
    }
}
