//! Core data types for symptom-profile matching.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Severity`]: one symptom's reported severity (`high`/`low`/`no`, open set)
//! - [`SymptomProfile`]: an ordered per-symptom severity sequence
//! - [`DiseaseName`], [`DiseaseRecord`]: a catalog entry and its identifier
//! - [`TRACKED_SYMPTOMS`]: the canonical symptom ordering
//!
//! ## Positional contract
//!
//! A profile is a plain sequence with no symptom names attached. Meaning comes
//! entirely from position: index `i` refers to `TRACKED_SYMPTOMS[i]`, both in
//! reference profile files (one severity per line) and in user submissions.
//! Every producer of a profile must emit severities in that order, which is
//! why the canonical list lives here and nowhere else.
//!
//! [`Severity`]: severity::Severity
//! [`SymptomProfile`]: profile::SymptomProfile
//! [`DiseaseName`]: record::DiseaseName
//! [`DiseaseRecord`]: record::DiseaseRecord
//! [`TRACKED_SYMPTOMS`]: symptoms::TRACKED_SYMPTOMS

pub mod profile;
pub mod record;
pub mod severity;
pub mod symptoms;
