//! Traits for reading and writing the persisted JSON artifacts.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use crate::error::Error;

/// A trait for reading and writing a persisted artifact from/to one file.
///
/// Implemented by [`crate::types::ScanReport`] (the scanner → updater
/// contract) and [`crate::types::UpdateSummary`] (the write-only run
/// summary).
///
/// # Example
///
/// ```rust,no_run
/// use langmig::traits::Artifact;
/// let report = langmig::ScanReport::read_from("turkish_strings.json")?;
/// report.write_to("turkish_strings_copy.json")?;
/// Ok::<(), langmig::Error>(())
/// ```
pub trait Artifact {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Write to file path.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.to_writer(writer)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }
}
