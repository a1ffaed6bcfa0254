//! Detection and splitting of file-dialog filter strings.
//!
//! Open/save dialogs take their filter list as one string literal made of
//! `description\0pattern\0` pairs, e.g.
//! `"Text files (*.txt)\0*.txt\0All files (*.*)\0*.*\0"`. Only the
//! descriptions are translatable.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A parenthesized pattern list closing a description, followed by the
    /// `\0`-delimited pattern. `\0` is the two characters `\` and `0` as they
    /// appear in the script source.
    static ref FILTER_PAIR_REGEX: Regex = Regex::new(r"(\(.+?\))\\0.+?\\0").unwrap();
}

/// Splits a filter string into its descriptions.
///
/// Returns `None` when the string holds no `(...)\0...\0` pair at all, so the
/// caller can treat it as ordinary text. Descriptions keep their
/// parenthesized pattern list, are trimmed, and empty ones are dropped.
///
/// ```rust
/// let parts = rc2po::filter::split_descriptions(r"Text files (*.txt)\0*.txt\0All files (*.*)\0*.*\0");
/// assert_eq!(parts.unwrap(), vec!["Text files (*.txt)", "All files (*.*)"]);
/// assert!(rc2po::filter::split_descriptions("Save as...").is_none());
/// ```
pub fn split_descriptions(text: &str) -> Option<Vec<String>> {
    let mut fragments = Vec::new();
    let mut last_end = 0;

    for caps in FILTER_PAIR_REGEX.captures_iter(text) {
        let (Some(pair), Some(patterns)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        fragments.push(format!("{}{}", &text[last_end..pair.start()], patterns.as_str()));
        last_end = pair.end();
    }

    if last_end == 0 {
        return None;
    }
    fragments.push(text[last_end..].to_string());

    Some(
        fragments
            .iter()
            .map(|fragment| fragment.trim())
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string)
            .collect(),
    )
}
