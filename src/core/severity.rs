use serde::{Deserialize, Serialize};

/// Severity of a single symptom, as stored in a reference profile or
/// submitted by a user.
///
/// The value set is open: any token other than `high`, `low`, or `no` is kept
/// verbatim (trimmed, lower-cased) in [`Severity::Other`]. Unrecognized tokens
/// are never rejected. They simply cannot match a stored value unless that
/// value is byte-identical, so they fall through to the fuzzy phase or to
/// no-match naturally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    High,
    Low,
    /// The symptom is not present. This is the default selection, and
    /// agreement on `no` carries no information during fuzzy matching.
    #[default]
    No,
    /// Unrecognized token, already trimmed and lower-cased.
    Other(String),
}

impl Severity {
    /// Parse a severity token. Trims and case-folds; never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let folded = raw.trim().to_lowercase();
        match folded.as_str() {
            "high" => Self::High,
            "low" => Self::Low,
            "no" => Self::No,
            _ => Self::Other(folded),
        }
    }

    /// The canonical lower-case token for this severity.
    #[must_use]
    pub fn as_token(&self) -> &str {
        match self {
            Self::High => "high",
            Self::Low => "low",
            Self::No => "no",
            Self::Other(token) => token,
        }
    }

    /// True for the `no` severity, which never counts toward fuzzy overlap.
    #[must_use]
    pub fn is_no(&self) -> bool {
        matches!(self, Self::No)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_token())
    }
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.as_token().to_string()
    }
}
