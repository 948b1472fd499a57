//! Disease catalog storage and loading.
//!
//! The catalog holds every known disease with its symptom severity profile,
//! description, and treatment notes. An embedded catalog is compiled into the
//! binary, but catalogs can also be loaded from JSON files or from a flat
//! data directory in the legacy text layout.
//!
//! ## Embedded Catalog
//!
//! The default catalog ships ten common diseases, each with a complete
//! profile over the tracked symptoms, a short description, and first-line
//! treatment notes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dx_triage::DiseaseCatalog;
//! use dx_triage::core::record::DiseaseName;
//!
//! // Load embedded catalog
//! let catalog = DiseaseCatalog::load_embedded().unwrap();
//!
//! // List all diseases
//! for record in &catalog.records {
//!     println!("{}", record.name);
//! }
//!
//! // Get a specific disease
//! let flu = catalog.get(&DiseaseName::new("Flu"));
//! ```
//!
//! ## Flat Data Directories
//!
//! The legacy layout keeps a `diseases.txt` next to three directories of
//! per-disease text files:
//!
//! ```rust,no_run
//! use dx_triage::catalog::loader;
//! use std::path::Path;
//!
//! let catalog = loader::load_from_dir(Path::new("data")).unwrap();
//! ```

pub mod loader;
pub mod store;
