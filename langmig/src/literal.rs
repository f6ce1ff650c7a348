//! Best-effort extraction of quoted string literals from source text.
//!
//! A single regex pass per quote style, terminated by the first unescaped
//! matching quote. This is deliberately not a parser for the host
//! language: literals inside comments are false positives, and multi-line
//! or template literals are missed. Both are accepted tradeoffs; do not
//! upgrade this to grammar-aware parsing, as that would change what counts
//! as a literal.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SINGLE_QUOTED: Regex = Regex::new(r"'([^'\\]*(?:\\.[^'\\]*)*)'").unwrap();
    static ref DOUBLE_QUOTED: Regex = Regex::new(r#""([^"\\]*(?:\\.[^"\\]*)*)""#).unwrap();
}

/// Extracts the contents of all single- and double-quoted literals, in
/// order of occurrence per quote style (all single-quoted first, then all
/// double-quoted). Escape sequences are kept verbatim in the output, so
/// `"a\"b"` yields `a\"b`.
pub fn extract_string_literals(content: &str) -> Vec<String> {
    let singles = SINGLE_QUOTED
        .captures_iter(content)
        .map(|c| c[1].to_string());
    let doubles = DOUBLE_QUOTED
        .captures_iter(content)
        .map(|c| c[1].to_string());

    singles.chain(doubles).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_extraction() {
        let content = r#"const a = 'merhaba'; const b = "dünya";"#;
        let strings = extract_string_literals(content);
        assert_eq!(strings, vec!["merhaba", "dünya"]);
    }

    #[test]
    fn test_escaped_quotes_preserved() {
        let content = r#"x = "a\"b"; y = 'c\'d';"#;
        let strings = extract_string_literals(content);
        assert!(strings.contains(&r#"c\'d"#.to_string()));
        assert!(strings.contains(&r#"a\"b"#.to_string()));
        assert_eq!(strings.len(), 2);
    }

    #[test]
    fn test_empty_literals_are_extracted() {
        let content = r#"a = ''; b = """#;
        let strings = extract_string_literals(content);
        assert_eq!(strings, vec!["", ""]);
    }

    #[test]
    fn test_singles_before_doubles() {
        let content = r#"const b = "ikinci"; const a = 'birinci';"#;
        let strings = extract_string_literals(content);
        assert_eq!(strings, vec!["birinci", "ikinci"]);
    }

    #[test]
    fn test_comment_contents_are_false_positives() {
        // A known, accepted imprecision of the regex pass.
        let content = "// 'yorum'\nconst x = 1;";
        let strings = extract_string_literals(content);
        assert_eq!(strings, vec!["yorum"]);
    }

    #[test]
    fn test_no_literals() {
        assert!(extract_string_literals("const x = 42;").is_empty());
    }
}
