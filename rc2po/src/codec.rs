//! This module provides the `Codec` struct, which loads every locale's
//! resource script from a directory and writes one `.po` catalog per locale,
//! keyed by the reference locale's text.
//!
//! Locales are handled one after another: each catalog is aligned, deduplicated
//! and written (and its file closed) before the next one is started.

use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};

use crate::{
    align::{AlignOptions, IdMismatch, align_with_options},
    error::Error,
    formats::{DroppedTranslation, PoFormat},
    traits::Writer,
    types::LocaleFile,
};

/// Locale whose text becomes the `msgid` of every catalog.
pub const DEFAULT_REFERENCE_LOCALE: &str = "en-US";

/// Extension given to the written catalogs.
pub const OUTPUT_EXTENSION: &str = "po";

lazy_static! {
    static ref LOCALE_FILE_REGEX: Regex = Regex::new(r"(?i)^\w{2}-\w{2}\.rc$").unwrap();
}

/// Conversion settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Reference locale code, compared case-insensitively.
    pub reference_locale: String,
    /// Warn when a locale has a different number of entries than the reference.
    pub warn_on_length_mismatch: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            reference_locale: DEFAULT_REFERENCE_LOCALE.to_string(),
            warn_on_length_mismatch: true,
        }
    }
}

impl ConvertOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reference locale.
    pub fn with_reference_locale(mut self, code: impl Into<String>) -> Self {
        self.reference_locale = code.into();
        self
    }

    /// Enables/disables the length mismatch warning.
    pub fn with_length_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_length_mismatch = enabled;
        self
    }

    fn align_options(&self) -> AlignOptions {
        AlignOptions {
            warn_on_length_mismatch: self.warn_on_length_mismatch,
        }
    }
}

/// What happened while converting one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleReport {
    pub code: String,
    /// Catalog path, `None` when the catalog was only built in memory.
    pub output: Option<PathBuf>,
    /// Number of `msgid`/`msgstr` blocks in the catalog.
    pub messages: usize,
    pub mismatches: Vec<IdMismatch>,
    pub length_mismatch: Option<(usize, usize)>,
    pub dropped: Vec<DroppedTranslation>,
}

/// Returns true for file names like `de-DE.rc` (case-insensitive).
pub fn is_locale_file_name(name: &str) -> bool {
    LOCALE_FILE_REGEX.is_match(name)
}

/// Lists the locale resource scripts directly inside `dir`, sorted by path.
pub fn find_locale_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for dent in std::fs::read_dir(dir)? {
        let path = dent?.path();
        let matches = path
            .file_name()
            .and_then(|s| s.to_str())
            .is_some_and(is_locale_file_name);
        // `is_file` follows symlinks
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Represents the set of loaded locales.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    /// Loaded locales, in load order.
    pub locales: Vec<LocaleFile>,
}

impl Codec {
    /// Creates a new, empty `Codec`.
    pub fn new() -> Self {
        Codec {
            locales: Vec::new(),
        }
    }

    /// Loads every locale resource script found in `dir`.
    pub fn read_dir<P: AsRef<Path>>(dir: P) -> Result<Self, Error> {
        let mut codec = Codec::new();
        for path in find_locale_files(dir)? {
            let locale = LocaleFile::read_from(&path)?;
            debug!(
                "Read {} entries for {} from {}",
                locale.len(),
                locale.code,
                path.display()
            );
            codec.add_locale(locale)?;
        }
        Ok(codec)
    }

    /// Adds a locale, rejecting a second locale with the same code.
    pub fn add_locale(&mut self, locale: LocaleFile) -> Result<(), Error> {
        if let Some(existing) = self.get_by_locale(&locale.code) {
            return Err(Error::DuplicateLocale {
                code: locale.code.clone(),
                first: existing.source.clone().unwrap_or_default(),
                second: locale.source.clone().unwrap_or_default(),
            });
        }
        self.locales.push(locale);
        Ok(())
    }

    /// Finds a locale by code, ignoring case.
    pub fn get_by_locale(&self, code: &str) -> Option<&LocaleFile> {
        self.locales.iter().find(|locale| locale.is_locale(code))
    }

    /// Returns the reference locale or `Error::MissingReference`.
    pub fn reference(&self, options: &ConvertOptions) -> Result<&LocaleFile, Error> {
        self.get_by_locale(&options.reference_locale)
            .ok_or_else(|| Error::missing_reference(options.reference_locale.clone()))
    }

    /// Builds one locale's catalog against the reference.
    pub fn build_catalog(
        reference: &LocaleFile,
        locale: &LocaleFile,
        options: &ConvertOptions,
    ) -> (PoFormat, LocaleReport) {
        let alignment =
            align_with_options(&reference.entries, &locale.entries, options.align_options());
        let catalog = PoFormat::from_pairs(alignment.pairs);

        let report = LocaleReport {
            code: locale.code.clone(),
            output: None,
            messages: catalog.len(),
            mismatches: alignment.mismatches,
            length_mismatch: alignment.length_mismatch,
            dropped: catalog.dropped.clone(),
        };
        (catalog, report)
    }

    /// Writes `<code>.po` into `output_dir` for every locale, including the
    /// reference itself. Existing catalogs are overwritten.
    ///
    /// Fails before writing anything when the reference locale is missing.
    pub fn write_all<P: AsRef<Path>>(
        &self,
        output_dir: P,
        options: &ConvertOptions,
    ) -> Result<Vec<LocaleReport>, Error> {
        let reference = self.reference(options)?;
        let output_dir = output_dir.as_ref();

        let mut reports = Vec::with_capacity(self.locales.len());
        for locale in &self.locales {
            let (catalog, mut report) = Self::build_catalog(reference, locale, options);

            let path = output_dir.join(format!("{}.{}", locale.code, OUTPUT_EXTENSION));
            info!("Writing {}", path.display());
            catalog.write_to(&path)?;

            report.output = Some(path);
            reports.push(report);
        }
        Ok(reports)
    }
}

/// Converts every locale script in `input_dir` into a catalog in `output_dir`.
pub fn convert_dir<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    output_dir: Q,
    options: &ConvertOptions,
) -> Result<Vec<LocaleReport>, Error> {
    for dir in [input_dir.as_ref(), output_dir.as_ref()] {
        if !dir.is_dir() {
            return Err(Error::invalid_path(format!(
                "not a directory: {}",
                dir.display()
            )));
        }
    }

    let codec = Codec::read_dir(input_dir)?;
    codec.write_all(output_dir, options)
}
