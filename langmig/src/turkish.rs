//! The likely-Turkish text heuristic.
//!
//! Two cheap, order-independent checks: a Turkish-specific character set
//! (diacritics that do not occur in English) and a closed list of common
//! Turkish function and domain words. This is a heuristic, not a language
//! detector; short words shared across languages will false-positive and
//! Turkish text using none of the listed words and no special characters
//! will be missed. Callers must additionally skip fragments of length ≤ 1.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w+").unwrap();
}

/// Characters unique to Turkish among the languages this tool is aimed at.
/// Any occurrence is a strong signal on its own.
pub const TURKISH_CHARS: &[char] = &[
    'ğ', 'Ğ', 'ü', 'Ü', 'ş', 'Ş', 'ı', 'İ', 'ö', 'Ö', 'ç', 'Ç',
];

/// Common Turkish words, lowercase. A closed vocabulary; membership of any
/// case-folded token is the secondary signal.
pub const COMMON_TURKISH_WORDS: &[&str] = &[
    "ve",
    "veya",
    "için",
    "ile",
    "bu",
    "şu",
    "daha",
    "en",
    "bir",
    "olarak",
    "canlı",
    "maç",
    "lig",
    "tahmin",
    "analiz",
    "yükleniyor",
    "hata",
    "veri",
    "dil",
    "galibiyet",
    "beraberlik",
    "mağlubiyet",
    "evet",
    "hayır",
    "üst",
    "alt",
    "tarih",
    "saat",
    "göster",
    "seç",
    "filtrele",
    "ara",
];

/// Returns true if the fragment is likely Turkish.
pub fn is_likely_turkish(text: &str) -> bool {
    if text.chars().any(|c| TURKISH_CHARS.contains(&c)) {
        return true;
    }

    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .any(|word| COMMON_TURKISH_WORDS.contains(&word.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_turkish_char_classifies_true() {
        for c in TURKISH_CHARS {
            let text = format!("x{}y", c);
            assert!(is_likely_turkish(&text), "failed for {}", c);
        }
    }

    #[test]
    fn test_common_word_classifies_true() {
        assert!(is_likely_turkish("tahmin et"));
        assert!(is_likely_turkish("Veri bulunamadi"));
        assert!(is_likely_turkish("bu"));
    }

    #[test]
    fn test_case_folded_word_match() {
        assert!(is_likely_turkish("EVET"));
        assert!(is_likely_turkish("Tarih"));
    }

    #[test]
    fn test_plain_english_classifies_false() {
        assert!(!is_likely_turkish("Hello World"));
        assert!(!is_likely_turkish("loading"));
        assert!(!is_likely_turkish(""));
    }

    #[test]
    fn test_word_boundary_membership() {
        // "environment" contains "en" as a substring but not as a token.
        assert!(!is_likely_turkish("environment"));
        assert!(is_likely_turkish("en iyi"));
    }

    #[test]
    fn test_diacritic_wins_without_word_match() {
        assert!(is_likely_turkish("Gündem"));
    }
}
