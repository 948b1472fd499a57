//! Symptom profile matching engine.
//!
//! This module provides the core matching functionality:
//!
//! - [`MatchingEngine`]: Main entry point for matching a submitted profile
//! - [`Diagnosis`]: The outcome, exact, fuzzy, or no match
//! - [`MatchedDisease`]: A matched disease with its details resolved
//!
//! ## Matching Algorithm
//!
//! Matching runs two deterministic steps:
//!
//! 1. **Exact lookup**: The submitted profile is looked up verbatim in the
//!    catalog's profile index
//! 2. **Best-overlap scan**: Stored profiles are scanned in catalog order and
//!    the first one with the strictly highest informative overlap wins
//!
//! Overlap counts positions where both profiles carry the same severity and
//! that severity is not "no". A best overlap of zero is reported as
//! [`Diagnosis::NoMatch`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use dx_triage::{DiseaseCatalog, Diagnosis, MatchingEngine, SymptomProfile};
//!
//! let catalog = DiseaseCatalog::load_embedded().unwrap();
//! let engine = MatchingEngine::new(&catalog);
//!
//! let input = SymptomProfile::from_lines("high\nlow\nno");
//! match engine.diagnose(&input) {
//!     Diagnosis::Exact(m) => println!("{}", m.disease),
//!     Diagnosis::Fuzzy(m) => println!("{} ({} overlapping)", m.disease, m.overlap),
//!     Diagnosis::NoMatch => println!("no matching disease"),
//! }
//! ```

pub mod engine;

pub use engine::{Diagnosis, MatchedDisease, MatchingEngine};
