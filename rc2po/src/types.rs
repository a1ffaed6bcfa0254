//! Core data model shared by the resource-script reader, the aligner and the
//! `.po` writer.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{error::Error, formats::RcFormat, traits::Parser};

/// One translatable string extracted from a resource script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    /// `#define` name or string-table number. `None` for `POPUP`/`MENUITEM` text.
    pub identifier: Option<String>,
    /// The string, already converted to `.po` quoting.
    pub text: String,
}

impl ResourceEntry {
    /// Entry without an identifier, as produced by menu lines.
    pub fn anonymous(text: impl Into<String>) -> Self {
        ResourceEntry {
            identifier: None,
            text: text.into(),
        }
    }

    pub fn keyed(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        ResourceEntry {
            identifier: Some(identifier.into()),
            text: text.into(),
        }
    }

    /// The identifier for diagnostics, `<none>` when absent.
    pub fn display_identifier(&self) -> &str {
        self.identifier.as_deref().unwrap_or("<none>")
    }
}

/// All entries of one locale's resource script, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleFile {
    /// Locale code taken from the file stem, e.g. `en-US`.
    pub code: String,
    /// Where the entries were read from, if they came from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    pub entries: Vec<ResourceEntry>,
}

impl LocaleFile {
    pub fn new(code: impl Into<String>, entries: Vec<ResourceEntry>) -> Self {
        LocaleFile {
            code: code.into(),
            source: None,
            entries,
        }
    }

    /// Reads a resource script, naming the locale after the file stem.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let code = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| Error::invalid_path(format!("no locale code in {}", path.display())))?
            .to_string();

        let format = RcFormat::read_from(path)?;

        Ok(LocaleFile {
            code,
            source: Some(path.to_path_buf()),
            entries: format.entries,
        })
    }

    /// Pretty-printed JSON dump of the locale, for inspection.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Case-insensitive locale code comparison.
    pub fn is_locale(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A resolved `msgid`/`msgstr` pair produced by the aligner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationPair {
    pub final_id: String,
    pub text: String,
}

impl TranslationPair {
    pub fn new(final_id: impl Into<String>, text: impl Into<String>) -> Self {
        TranslationPair {
            final_id: final_id.into(),
            text: text.into(),
        }
    }
}
