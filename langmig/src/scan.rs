//! The scan pass: walk the configured source roots, collect likely-Turkish
//! string literals per file, mine the translation-table files, and build
//! the scan report.
//!
//! Scanning is best-effort and partial-failure-tolerant: a missing root
//! directory or an unreadable file is recorded and skipped, never fatal.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use ignore::WalkBuilder;

use crate::{
    error::Error,
    literal,
    profile::MigrationProfile,
    source, tables, turkish,
    types::{Finding, Issue, ScanReport, TranslationMap},
};

/// Result of a scan run: the report to persist plus everything that was
/// skipped along the way.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// The artifact handed to the updater.
    pub report: ScanReport,

    /// Configured root directories that did not exist.
    pub skipped_roots: Vec<String>,

    /// Per-file problems that were skipped over.
    pub issues: Vec<Issue>,

    /// Number of source-language table entries that had a target-language
    /// sibling.
    pub mined_pairs: usize,
}

/// Scans a single file, returning a finding when it contains at least one
/// likely-Turkish literal longer than one character.
pub fn scan_file(path: &Path) -> Result<Option<Finding>, Error> {
    let content = source::read_lossy(path)?;

    let strings: Vec<String> = literal::extract_string_literals(&content)
        .into_iter()
        .filter(|s| turkish::is_likely_turkish(s) && s.chars().count() > 1)
        .collect();

    if strings.is_empty() {
        return Ok(None);
    }

    Ok(Some(Finding {
        file: path.display().to_string(),
        strings,
    }))
}

/// Recursively enumerates the files under `dir` whose extension is in the
/// profile's allow-list, in sorted order. Walk errors on individual
/// entries are recorded and skipped.
pub fn collect_source_files(
    dir: &Path,
    profile: &MigrationProfile,
    issues: &mut Vec<Issue>,
) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(dir)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .hidden(false)
        .ignore(true)
        .parents(true)
        .build();

    let mut files = Vec::new();
    for dent in walker {
        let dent = match dent {
            Ok(d) => d,
            Err(e) => {
                issues.push(Issue::new(dir.display().to_string(), e));
                continue;
            }
        };
        if !dent.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if profile.matches_extension(dent.path()) {
            files.push(dent.path().to_path_buf());
        }
    }

    files.sort();
    files
}

/// Runs the full scan pass over the project at `root`.
///
/// The translation map is built in two phases: pairs mined from the table
/// files first (trusted, manually curated), then every scanned string not
/// already present is inserted with an empty placeholder value. A mined
/// translation is therefore never overwritten by a scanned occurrence of
/// the same text.
pub fn scan_project(root: &Path, profile: &MigrationProfile) -> Result<ScanOutcome, Error> {
    let mut outcome = ScanOutcome::default();

    // Phase 1: mine the translation tables.
    let mut source_table: BTreeMap<String, String> = BTreeMap::new();
    let mut target_table: BTreeMap<String, String> = BTreeMap::new();
    for rel in &profile.table_files {
        let path = root.join(rel);
        if !path.is_file() {
            continue;
        }
        match source::read_lossy(&path) {
            Ok(content) => {
                source_table.extend(tables::mine_language_block(&content, profile.source_code())?);
                target_table.extend(tables::mine_language_block(&content, profile.target_code())?);
            }
            Err(e) => outcome.issues.push(Issue::new(rel.clone(), e)),
        }
    }

    // Phase 2: walk the source roots.
    for dir in &profile.roots {
        let dir_path = root.join(dir);
        if !dir_path.is_dir() {
            outcome.skipped_roots.push(dir.clone());
            continue;
        }
        for file in collect_source_files(&dir_path, profile, &mut outcome.issues) {
            let rel = file
                .strip_prefix(root)
                .unwrap_or(&file)
                .display()
                .to_string();
            match scan_file(&file) {
                Ok(Some(mut finding)) => {
                    finding.file = rel;
                    outcome.report.findings.push(finding);
                }
                Ok(None) => {}
                Err(e) => outcome.issues.push(Issue::new(rel, e)),
            }
        }
    }

    // Phase 3: build the translation map, mined pairs first.
    let mut translations = TranslationMap::new();
    for (key, source_value) in &source_table {
        if let Some(target_value) = target_table.get(key) {
            translations.insert(source_value.clone(), target_value.clone());
            outcome.mined_pairs += 1;
        }
    }
    for finding in &outcome.report.findings {
        for s in &finding.strings {
            translations.insert_missing(s.clone());
        }
    }
    outcome.report.translations = translations;

    Ok(outcome)
}
