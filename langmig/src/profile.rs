//! The migration profile: which directories, extensions and table files a
//! run operates on, and which languages it migrates between.
//!
//! The profile is plain data threaded explicitly into every scan and
//! update call; there is no ambient configuration. `Default` carries the
//! layout of the web application this tool was built for.

use std::path::Path;

use regex::Regex;
use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// Configuration for one scan/update run.
#[derive(Debug, Clone)]
pub struct MigrationProfile {
    /// The language being migrated away from.
    pub source_language: LanguageIdentifier,

    /// The language hardcoded strings are rewritten to, and the new value
    /// for the default-language constants.
    pub target_language: LanguageIdentifier,

    /// Directories (relative to the project root) to walk.
    pub roots: Vec<String>,

    /// File extensions (without the dot) eligible for scanning and
    /// updating.
    pub extensions: Vec<String>,

    /// Files (relative to the project root) declaring the sibling
    /// source/target translation tables. Also the files subject to
    /// default-language patching.
    pub table_files: Vec<String>,
}

impl Default for MigrationProfile {
    fn default() -> Self {
        MigrationProfile {
            source_language: "tr".parse().expect("static language id"),
            target_language: "en".parse().expect("static language id"),
            roots: ["app", "components", "lib", "pages", "hooks"]
                .map(String::from)
                .to_vec(),
            extensions: ["tsx", "ts", "jsx", "js"].map(String::from).to_vec(),
            table_files: ["lib/translations.ts", "components/language-provider.tsx"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl MigrationProfile {
    /// The bare source language code, as used in table declarations
    /// (`const tr = { ... }`).
    pub fn source_code(&self) -> &str {
        self.source_language.language.as_str()
    }

    /// The bare target language code.
    pub fn target_code(&self) -> &str {
        self.target_language.language.as_str()
    }

    /// Whether the file's extension is in the allow-list.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }

    /// Builds the default-language patch rules with the target language
    /// baked into the replacements.
    pub fn patch_rules(&self) -> Result<Vec<PatchRule>, Error> {
        let target = self.target_code();
        Ok(vec![
            PatchRule {
                file_hint: "translations.ts".to_string(),
                pattern: Regex::new(r"let currentLanguage: SupportedLanguage = '([^']*)'")?,
                replacement: format!("let currentLanguage: SupportedLanguage = '{}'", target),
            },
            PatchRule {
                file_hint: "language-provider.tsx".to_string(),
                pattern: Regex::new(
                    r#"const \[language, setLanguage\] = useState<Language>\("([^"]*)"\)"#,
                )?,
                replacement: format!(
                    r#"const [language, setLanguage] = useState<Language>("{}")"#,
                    target
                ),
            },
        ])
    }
}

/// One targeted rewrite of a default-language constant, recognized by a
/// fixed textual pattern specific to a named configuration file.
#[derive(Debug, Clone)]
pub struct PatchRule {
    /// Path fragment selecting the file this rule applies to.
    pub file_hint: String,

    /// Pattern matching the declared default-language value.
    pub pattern: Regex,

    /// Literal replacement text, target language included.
    pub replacement: String,
}

impl PatchRule {
    /// Whether this rule applies to the given path.
    pub fn applies_to(&self, path: &str) -> bool {
        path.contains(&self.file_hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = MigrationProfile::default();
        assert_eq!(profile.source_code(), "tr");
        assert_eq!(profile.target_code(), "en");
        assert_eq!(profile.roots.len(), 5);
        assert!(profile.table_files.contains(&"lib/translations.ts".to_string()));
    }

    #[test]
    fn test_matches_extension() {
        let profile = MigrationProfile::default();
        assert!(profile.matches_extension(Path::new("app/page.tsx")));
        assert!(profile.matches_extension(Path::new("lib/util.js")));
        assert!(!profile.matches_extension(Path::new("app/globals.css")));
        assert!(!profile.matches_extension(Path::new("README")));
    }

    #[test]
    fn test_patch_rules_target_baked_in() {
        let profile = MigrationProfile::default();
        let rules = profile.patch_rules().unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules[0].replacement.contains("'en'"));
        assert!(rules[1].replacement.contains(r#""en""#));
    }

    #[test]
    fn test_patch_rule_applies_to() {
        let profile = MigrationProfile::default();
        let rules = profile.patch_rules().unwrap();
        assert!(rules[0].applies_to("lib/translations.ts"));
        assert!(!rules[0].applies_to("components/language-provider.tsx"));
        assert!(rules[1].applies_to("components/language-provider.tsx"));
    }
}
