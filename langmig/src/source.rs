//! Tolerant reading of source files.
//!
//! Source trees in the wild contain the odd BOM-prefixed or not-quite-UTF-8
//! file; a scan must not lose findings from the rest of the tree because of
//! one of them. Decoding is BOM-aware and replaces malformed sequences
//! instead of failing.

use std::{fs::File, io::Read, path::Path};

use crate::error::Error;

/// Reads a file to a string, honoring a BOM if present and replacing
/// malformed byte sequences with U+FFFD.
pub fn read_lossy<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let file = File::open(path).map_err(Error::Io)?;
    let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .encoding(Some(encoding_rs::UTF_8))
        .bom_override(true)
        .build(file);

    let mut decoded = String::new();
    decoder.read_to_string(&mut decoded).map_err(Error::Io)?;

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_plain_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("Merhaba Dünya".as_bytes()).unwrap();
        let content = read_lossy(file.path()).unwrap();
        assert_eq!(content, "Merhaba Dünya");
    }

    #[test]
    fn test_read_utf8_with_bom() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFsaat").unwrap();
        let content = read_lossy(file.path()).unwrap();
        assert_eq!(content, "saat");
    }

    #[test]
    fn test_malformed_bytes_are_replaced() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"ara \xFF ve").unwrap();
        let content = read_lossy(file.path()).unwrap();
        assert!(content.starts_with("ara "));
        assert!(content.ends_with(" ve"));
        assert!(content.contains('\u{FFFD}'));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(read_lossy("no/such/file.tsx").is_err());
    }
}
