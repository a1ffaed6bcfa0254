//! Support for Windows resource scripts (`.rc`).
//!
//! Only the translatable subset is read: menu text, `#define` string
//! constants and string-table lines. Everything else in the script is
//! skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{classifier, error::Error, traits::Parser, types::ResourceEntry};

/// The translatable entries of one resource script, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Format {
    pub entries: Vec<ResourceEntry>,
}

impl Format {
    /// Builds the entry sequence from the lines of a script.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Format {
            entries: parse_lines(lines),
        }
    }
}

/// Classifies every line and concatenates the resulting entries.
pub fn parse_lines<I, S>(lines: I) -> Vec<ResourceEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .flat_map(|line| classifier::entries_for_line(line.as_ref()))
        .collect()
}

impl Parser for Format {
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Ok(Format::from_lines(lines))
    }

    /// Override default file reading to support BOM-aware decoding (UTF-16
    /// scripts saved by Visual Studio are common).
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        // Auto-detect BOM, decode to UTF-8; passthrough UTF-8
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = Vec::new();
        decoder.read_to_end(&mut decoded).map_err(Error::Io)?;

        // Stray bytes that are not UTF-8 become U+FFFD instead of failing the run
        let text = String::from_utf8_lossy(&decoded);
        Ok(Format::from_lines(text.lines()))
    }
}
