//! The update pass: substitute known Turkish literals with their English
//! translations across the project, and patch the default-language
//! constants in the configuration files.
//!
//! Substitution is exact literal matching on the quoted form, built via
//! `regex::escape`; the quote character is preserved (single and double
//! quoted occurrences are handled independently). Keys are processed
//! longest-first so that a key which is a substring of another can never
//! partially replace inside the longer literal.

use std::{fs, path::Path};

use regex::{NoExpand, Regex};

use crate::{
    error::Error,
    profile::{MigrationProfile, PatchRule},
    scan::collect_source_files,
    source,
    types::{Issue, TranslationMap, UpdateSummary},
};

/// Result of an update run: the persisted summary plus everything skipped.
#[derive(Debug, Clone, Default)]
pub struct UpdateOutcome {
    /// The write-only run summary.
    pub summary: UpdateSummary,

    /// Configured root directories that did not exist.
    pub skipped_roots: Vec<String>,

    /// Per-file problems that were skipped over.
    pub issues: Vec<Issue>,
}

/// The compiled, ordered substitutions for one translation map.
///
/// Compiling once up front keeps the per-file apply pure and avoids
/// rebuilding patterns for every file.
#[derive(Debug)]
pub struct SubstitutionSet {
    substitutions: Vec<Substitution>,
}

#[derive(Debug)]
struct Substitution {
    double_quoted: Regex,
    single_quoted: Regex,
    double_replacement: String,
    single_replacement: String,
}

impl SubstitutionSet {
    /// Compiles the map's substitution candidates, longest key first.
    pub fn compile(map: &TranslationMap) -> Result<Self, Error> {
        let mut substitutions = Vec::new();
        for (key, value) in map.candidates() {
            let escaped = regex::escape(key);
            substitutions.push(Substitution {
                double_quoted: Regex::new(&format!("\"{}\"", escaped))?,
                single_quoted: Regex::new(&format!("'{}'", escaped))?,
                double_replacement: format!("\"{}\"", value),
                single_replacement: format!("'{}'", value),
            });
        }
        Ok(SubstitutionSet { substitutions })
    }

    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }

    /// Applies every substitution to the text and returns the result.
    /// Replacements are literal (no capture-group expansion).
    pub fn apply(&self, content: &str) -> String {
        let mut text = content.to_string();
        for sub in &self.substitutions {
            let pass = sub
                .double_quoted
                .replace_all(&text, NoExpand(&sub.double_replacement))
                .into_owned();
            text = sub
                .single_quoted
                .replace_all(&pass, NoExpand(&sub.single_replacement))
                .into_owned();
        }
        text
    }
}

/// Rewrites one file with the compiled substitutions. The file is written
/// back only when the content actually changed; returns whether it was.
pub fn update_file(path: &Path, substitutions: &SubstitutionSet) -> Result<bool, Error> {
    let content = source::read_lossy(path)?;
    let updated = substitutions.apply(&content);

    if updated != content {
        fs::write(path, updated)?;
        return Ok(true);
    }
    Ok(false)
}

/// Applies every matching patch rule to the file and rewrites it.
///
/// Unlike [`update_file`] this writes unconditionally, change or not. The
/// asymmetry is inherited from the original tooling and kept as-is.
pub fn patch_default_language(path: &Path, rules: &[PatchRule]) -> Result<(), Error> {
    let mut content = source::read_lossy(path)?;

    let name = path.to_string_lossy();
    for rule in rules {
        if rule.applies_to(&name) {
            content = rule
                .pattern
                .replace_all(&content, NoExpand(&rule.replacement))
                .into_owned();
        }
    }

    fs::write(path, content)?;
    Ok(())
}

/// Runs the full update pass over the project at `root`: default-language
/// constants first, then string substitution across every source root.
pub fn update_project(
    root: &Path,
    profile: &MigrationProfile,
    translations: &TranslationMap,
) -> Result<UpdateOutcome, Error> {
    let substitutions = SubstitutionSet::compile(translations)?;
    let rules = profile.patch_rules()?;
    let mut outcome = UpdateOutcome::default();

    for rel in &profile.table_files {
        let path = root.join(rel);
        if !path.is_file() {
            continue;
        }
        match patch_default_language(&path, &rules) {
            Ok(()) => outcome.summary.language_files_updated.push(rel.clone()),
            Err(e) => outcome.issues.push(Issue::new(rel.clone(), e)),
        }
    }

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
            match update_file(&file, &substitutions) {
                Ok(true) => outcome.summary.files_updated.push(rel),
                Ok(false) => {}
                Err(e) => outcome.issues.push(Issue::new(rel, e)),
            }
        }
    }

    Ok(outcome)
}
