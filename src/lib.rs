//! # dx-triage
//!
//! A library for matching symptom severity profiles against a catalog of
//! known disease signatures.
//!
//! A profile records one severity per tracked symptom: `high`, `low`, or
//! `no`, always in the same canonical order. Each cataloged disease carries
//! such a profile as its signature, plus a description and treatment notes.
//! Matching is fully deterministic: an identical profile wins outright, and
//! otherwise the disease sharing the most informative symptoms is suggested.
//!
//! ## Features
//!
//! - **Exact matching**: A submitted profile identical to a stored signature
//!   identifies that disease immediately
//! - **Best-overlap fallback**: Otherwise the disease agreeing on the most
//!   non-absent symptoms is suggested, ties going to catalog order
//! - **Detail lookup**: Descriptions and treatments with fixed fallback
//!   strings for diseases missing either text
//! - **Flexible loading**: Embedded catalog, JSON files, or the legacy flat
//!   directory of per-disease text files
//!
//! ## Example
//!
//! ```rust,no_run
//! use dx_triage::{Diagnosis, DiseaseCatalog, MatchingEngine, SymptomProfile};
//!
//! // Load the embedded catalog of known diseases
//! let catalog = DiseaseCatalog::load_embedded().unwrap();
//!
//! // One severity per tracked symptom, in canonical order
//! let profile = SymptomProfile::from_lines(
//!     "high\nlow\nno\nlow\nhigh\nno\nno\nhigh\nno\nlow\nlow\nno\nhigh",
//! );
//!
//! let engine = MatchingEngine::new(&catalog);
//! match engine.diagnose(&profile) {
//!     Diagnosis::Exact(m) => println!("{}: {}", m.disease, m.description),
//!     Diagnosis::Fuzzy(m) => println!("closest: {} ({} overlapping)", m.disease, m.overlap),
//!     Diagnosis::NoMatch => println!("no matching disease"),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Disease catalog storage and loading
//! - [`core`]: Core data types for severities, profiles, and disease records
//! - [`matching`]: The two-step matching engine
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;

// Re-export commonly used types for convenience
pub use catalog::store::DiseaseCatalog;
pub use core::profile::SymptomProfile;
pub use core::record::{DiseaseName, DiseaseRecord};
pub use core::severity::Severity;
pub use core::symptoms::TRACKED_SYMPTOMS;
pub use matching::engine::{Diagnosis, MatchedDisease, MatchingEngine};
