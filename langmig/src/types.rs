//! Core types for langmig.
//! The scanner produces these; the updater consumes them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{error::Error, traits::Artifact};

/// A single source file together with the Turkish string literals found in
/// it, in extraction order. Immutable once written to the scan report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Finding {
    /// Path of the file, relative to the project root.
    pub file: String,

    /// All string literals in the file that classified as likely Turkish.
    pub strings: Vec<String>,
}

/// Mapping from a Turkish string literal to its English equivalent.
///
/// An empty value means "not translated yet"; such entries are kept in the
/// report for manual completion but are never substitution candidates.
/// Neither are single-character keys, which would corrupt unrelated short
/// tokens if substituted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TranslationMap(BTreeMap<String, String>);

impl TranslationMap {
    pub fn new() -> Self {
        TranslationMap(BTreeMap::new())
    }

    /// Inserts a translation, overwriting any previous value for the key.
    /// Used for pairs mined from the translation-table files.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Inserts an untranslated placeholder only if the key is absent, so a
    /// mined translation is never clobbered by a scanned occurrence of the
    /// same string.
    pub fn insert_missing(&mut self, key: impl Into<String>) {
        self.0.entry(key.into()).or_default();
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the substitution candidates, longest key first.
    ///
    /// Only entries with a non-empty value and a key longer than one
    /// character qualify. The descending length order guarantees that when
    /// one key is a substring of another (`alt` inside `altyapı`), the more
    /// specific literal is substituted first.
    pub fn candidates(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<(&str, &str)> = self
            .0
            .iter()
            .filter(|(k, v)| k.chars().count() > 1 && !v.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        out.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        out
    }
}

impl FromIterator<(String, String)> for TranslationMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        TranslationMap(iter.into_iter().collect())
    }
}

/// The persisted scan artifact: the scanner → updater contract.
///
/// Serialized as a JSON object with exactly two top-level keys,
/// `files_with_turkish` and `translations`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanReport {
    /// Per-file findings, in scan order.
    #[serde(rename = "files_with_turkish")]
    pub findings: Vec<Finding>,

    /// The flattened Turkish → English mapping.
    pub translations: TranslationMap,
}

impl Artifact for ScanReport {
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }

    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, self).map_err(Error::Parse)
    }
}

/// The write-only run summary produced by the updater. Not consumed by any
/// other component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UpdateSummary {
    /// Configuration files whose default-language constant was patched.
    pub language_files_updated: Vec<String>,

    /// Source files actually rewritten by string substitution.
    pub files_updated: Vec<String>,
}

impl Artifact for UpdateSummary {
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }

    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, self).map_err(Error::Parse)
    }
}

/// A non-fatal per-file problem recorded during a scan or update run.
/// One bad file never aborts the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Path of the file the problem occurred on.
    pub path: String,
    /// Human-readable description of the underlying cause.
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl ToString) -> Self {
        Issue {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
