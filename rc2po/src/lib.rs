#![forbid(unsafe_code)]
//! Converts Windows resource scripts (`.rc`), one per locale, into gettext
//! `.po` catalogs.
//!
//! Only the translatable subset of a script is read: `POPUP`/`MENUITEM` text,
//! `#define` string constants and string-table lines. Each locale's entries are
//! paired by position with those of a reference locale (`en-US` by default),
//! whose text becomes the `msgid` of every message.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rc2po::{ConvertOptions, convert_dir};
//!
//! // Writes one <locale>.po per <locale>.rc found in the input directory
//! let reports = convert_dir("src/win/languages", "src/qt/languages", &ConvertOptions::default())?;
//! for report in reports {
//!     println!("{}: {} messages", report.code, report.messages);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Pipeline
//!
//! - [`classifier`] turns one script line into raw entries
//! - [`filter`] splits file-dialog filter strings into their descriptions
//! - [`text`] expands library-name macros and rewrites quote escapes
//! - [`formats::rc`] builds a locale's ordered entry sequence
//! - [`align`] pairs a locale with the reference locale by position
//! - [`formats::po`] drops duplicate ids and writes the catalog

pub mod align;
pub mod classifier;
pub mod codec;
pub mod error;
pub mod filter;
pub mod formats;
pub mod text;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    align::{Alignment, IdMismatch, align},
    codec::{Codec, ConvertOptions, LocaleReport, convert_dir},
    error::Error,
    formats::{PoFormat, RcFormat},
    types::{LocaleFile, ResourceEntry, TranslationPair},
};
