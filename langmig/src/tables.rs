//! Mining of explicit key → string pairs from the translation-table files.
//!
//! The table files declare one mapping per language, either as a top-level
//! `const <name> = { ... }` or as a nested `<name>: { ... }` property.
//! Both shapes are tried against every file. Block matching is non-greedy
//! up to the first closing brace, so nested braces inside a block truncate
//! extraction; this limitation is deliberate and documented rather than
//! handled.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

lazy_static! {
    // key: "value" or key: 'value', keys are identifiers.
    static ref ITEM_RE: Regex = Regex::new(r#"(\w+):\s*['"]([^'"]*)['"]"#).unwrap();
}

/// Extracts the key → string pairs of the language block named `name`
/// (e.g. `tr` or `en`) from the file content. Pairs from a later-matching
/// declaration shape overwrite earlier ones, mirroring how the table files
/// are merged when a key is declared twice.
pub fn mine_language_block(content: &str, name: &str) -> Result<BTreeMap<String, String>, Error> {
    let shapes = [
        // const tr = { ... }
        Regex::new(&format!(r"(?s)const\s+{}\s*=\s*\{{([^}}]*)\}}", name))?,
        // tr: { ... }
        Regex::new(&format!(r"(?s){}:\s*\{{([^}}]*)\}}", name))?,
    ];

    let mut pairs = BTreeMap::new();
    for shape in &shapes {
        if let Some(captures) = shape.captures(content) {
            for item in ITEM_RE.captures_iter(&captures[1]) {
                pairs.insert(item[1].to_string(), item[2].to_string());
            }
        }
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_named_block_shape() {
        let content = indoc! {r#"
            const tr = {
              hello: "Merhaba",
              world: 'Dünya',
            }
            const en = {
              hello: "Hello",
              world: "World",
            }
        "#};

        let tr = mine_language_block(content, "tr").unwrap();
        let en = mine_language_block(content, "en").unwrap();
        assert_eq!(tr.get("hello").map(String::as_str), Some("Merhaba"));
        assert_eq!(tr.get("world").map(String::as_str), Some("Dünya"));
        assert_eq!(en.get("hello").map(String::as_str), Some("Hello"));
        assert_eq!(en.len(), 2);
    }

    #[test]
    fn test_property_block_shape() {
        let content = indoc! {r#"
            const translations = {
              tr: {
                save: 'Kaydet',
              },
              en: {
                save: 'Save',
              },
            }
        "#};

        let tr = mine_language_block(content, "tr").unwrap();
        let en = mine_language_block(content, "en").unwrap();
        assert_eq!(tr.get("save").map(String::as_str), Some("Kaydet"));
        assert_eq!(en.get("save").map(String::as_str), Some("Save"));
    }

    #[test]
    fn test_nested_braces_truncate() {
        // Non-greedy up to the first `}`: the nested object ends the block.
        let content = indoc! {r#"
            const tr = {
              a: "bir",
              nested: { b: "iki" },
              c: "üç",
            }
        "#};

        let tr = mine_language_block(content, "tr").unwrap();
        assert_eq!(tr.get("a").map(String::as_str), Some("bir"));
        assert_eq!(tr.get("b").map(String::as_str), Some("iki"));
        assert!(!tr.contains_key("c"));
    }

    #[test]
    fn test_missing_block_yields_empty() {
        let tr = mine_language_block("const de = { a: 'eins' }", "tr").unwrap();
        assert!(tr.is_empty());
    }

    #[test]
    fn test_multiline_block() {
        let content = "const en = {\n  yes: \"Yes\",\n  no: \"No\"\n}";
        let en = mine_language_block(content, "en").unwrap();
        assert_eq!(en.len(), 2);
    }
}
