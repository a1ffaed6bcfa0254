//! Positional alignment of a translated locale against the reference locale.
//!
//! Resource scripts of all locales are expected to list the same strings in
//! the same order, so entries are paired by index rather than by identifier.
//! The reference text becomes the `msgid`, except for the font settings,
//! which keep their symbolic names so that each locale can choose its own
//! font.

use tracing::warn;

use crate::types::{ResourceEntry, TranslationPair};

/// Identifiers written as-is instead of being keyed by reference text.
pub const RESERVED_IDENTIFIERS: [&str; 2] = ["FONT_NAME", "FONT_SIZE"];

/// Reference and target identifiers differing at the same position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdMismatch {
    pub index: usize,
    pub reference: Option<String>,
    pub target: Option<String>,
}

/// Result of aligning one target locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    pub pairs: Vec<TranslationPair>,
    pub mismatches: Vec<IdMismatch>,
    /// `(reference_len, target_len)` when the sequences differ in length.
    /// Pairing stops at the shorter one.
    pub length_mismatch: Option<(usize, usize)>,
}

/// Options controlling alignment diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignOptions {
    /// Log a warning when the two sequences differ in length.
    pub warn_on_length_mismatch: bool,
}

impl Default for AlignOptions {
    fn default() -> Self {
        AlignOptions {
            warn_on_length_mismatch: true,
        }
    }
}

/// Aligns with default options.
pub fn align(reference: &[ResourceEntry], target: &[ResourceEntry]) -> Alignment {
    align_with_options(reference, target, AlignOptions::default())
}

pub fn align_with_options(
    reference: &[ResourceEntry],
    target: &[ResourceEntry],
    options: AlignOptions,
) -> Alignment {
    let mut alignment = Alignment::default();

    if reference.len() != target.len() {
        if options.warn_on_length_mismatch {
            warn!(
                "Length mismatch: reference has {} entries, translation has {}; extra entries are ignored",
                reference.len(),
                target.len()
            );
        }
        alignment.length_mismatch = Some((reference.len(), target.len()));
    }

    for (index, (original, translation)) in reference.iter().zip(target).enumerate() {
        if original.identifier != translation.identifier {
            warn!(
                "ID mismatch: {} vs {}",
                original.display_identifier(),
                translation.display_identifier()
            );
            alignment.mismatches.push(IdMismatch {
                index,
                reference: original.identifier.clone(),
                target: translation.identifier.clone(),
            });
        }

        alignment.pairs.push(resolve(original, translation));
    }

    alignment
}

/// Chooses the `msgid` for one positional pair.
fn resolve(original: &ResourceEntry, translation: &ResourceEntry) -> TranslationPair {
    match original.identifier.as_deref() {
        Some(id) if RESERVED_IDENTIFIERS.contains(&id) => {
            TranslationPair::new(id, translation.text.clone())
        }
        _ => TranslationPair::new(original.text.clone(), translation.text.clone()),
    }
}
