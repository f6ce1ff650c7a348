#![forbid(unsafe_code)]
//! Hardcoded-string language migration toolkit.
//!
//! Finds string literals written in Turkish across a web application's
//! source tree and rewrites them to English using a translation map. Two
//! sequential passes share one JSON artifact:
//!
//! 1. **Scan** — walk the configured source directories, extract quoted
//!    literals, classify them with a character-set + word-list heuristic,
//!    mine the known translation-table files for explicit tr/en pairs, and
//!    persist a [`ScanReport`].
//! 2. **Update** — read the report back and substitute every translated
//!    string (quoted form, longest key first) in place, then patch the
//!    default-language constants in the configuration files.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use langmig::{MigrationProfile, scan_project, update_project, traits::Artifact};
//!
//! let profile = MigrationProfile::default();
//! let outcome = scan_project(Path::new("."), &profile)?;
//! outcome.report.write_to("turkish_strings.json")?;
//!
//! // ...fill in empty translations by hand, then:
//! let report = langmig::ScanReport::read_from("turkish_strings.json")?;
//! update_project(Path::new("."), &profile, &report.translations)?;
//! # Ok::<(), langmig::Error>(())
//! ```
//!
//! # Caveats
//!
//! Both the classifier and the literal extractor are heuristics: regex
//! passes over raw text, not a parser or a language model. False positives
//! (literals inside comments, short shared words) and false negatives
//! (template literals, unlisted vocabulary) are accepted by design.

pub mod error;
pub mod literal;
pub mod profile;
pub mod scan;
pub mod source;
pub mod tables;
pub mod traits;
pub mod turkish;
pub mod types;
pub mod update;

// Re-export most used items for easy consumption
pub use crate::{
    error::Error,
    literal::extract_string_literals,
    profile::{MigrationProfile, PatchRule},
    scan::{ScanOutcome, scan_file, scan_project},
    traits::Artifact,
    turkish::is_likely_turkish,
    types::{Finding, Issue, ScanReport, TranslationMap, UpdateSummary},
    update::{SubstitutionSet, UpdateOutcome, update_file, update_project},
};
