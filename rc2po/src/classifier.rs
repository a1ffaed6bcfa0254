//! Line classification for resource scripts.
//!
//! Every line is checked against three independent matchers and each match
//! that fires contributes its own entries. No state is carried between lines.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{filter, text, types::ResourceEntry};

/// `#define` name marking the English language block. It carries no
/// translatable text.
pub const ENGLISH_MARKER: &str = "IDS_LANG_ENUS";

lazy_static! {
    static ref MENU_REGEX: Regex = Regex::new(r#"^\s*(POPUP|MENUITEM)\s*"(.+)""#).unwrap();
    // A value opened with a quote runs to the last quote on the line; an
    // unterminated quote falls through to the bare alternative.
    static ref DEFINE_REGEX: Regex =
        Regex::new(r#"^\s*#define\s+(\w+)\s+(?:"(.+)"|(.+))"#).unwrap();
    static ref NUMBERED_REGEX: Regex = Regex::new(r#"^\s*((?:IDS_)?\d+).+?"(.+)""#).unwrap();
}

/// Result of one matcher applied to one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch<'a> {
    /// `POPUP "text"` or `MENUITEM "text", ID`.
    Menu { text: &'a str },
    /// `#define NAME "value"` or `#define NAME value`.
    Define { name: &'a str, value: &'a str },
    /// `2048 "text"` or `IDS_2048 "text"` in a string table.
    Numbered { base: &'a str, text: &'a str },
    NoMatch,
}

pub fn match_menu(line: &str) -> LineMatch<'_> {
    match MENU_REGEX.captures(line).and_then(|caps| caps.get(2)) {
        Some(text) => LineMatch::Menu {
            text: text.as_str(),
        },
        None => LineMatch::NoMatch,
    }
}

pub fn match_define(line: &str) -> LineMatch<'_> {
    let Some(caps) = DEFINE_REGEX.captures(line) else {
        return LineMatch::NoMatch;
    };
    match (caps.get(1), caps.get(2).or_else(|| caps.get(3))) {
        (Some(name), Some(value)) => LineMatch::Define {
            name: name.as_str(),
            value: value.as_str(),
        },
        _ => LineMatch::NoMatch,
    }
}

pub fn match_numbered(line: &str) -> LineMatch<'_> {
    let Some(caps) = NUMBERED_REGEX.captures(line) else {
        return LineMatch::NoMatch;
    };
    match (caps.get(1), caps.get(2)) {
        (Some(base), Some(text)) => LineMatch::Numbered {
            base: base.as_str(),
            text: text.as_str(),
        },
        _ => LineMatch::NoMatch,
    }
}

/// Runs all three matchers and keeps the ones that fired, in matcher order.
pub fn classify(line: &str) -> Vec<LineMatch<'_>> {
    [match_menu(line), match_define(line), match_numbered(line)]
        .into_iter()
        .filter(|m| !m.is_no_match())
        .collect()
}

/// Entries contributed by a single line.
pub fn entries_for_line(line: &str) -> Vec<ResourceEntry> {
    classify(line)
        .into_iter()
        .flat_map(LineMatch::into_entries)
        .collect()
}

impl<'a> LineMatch<'a> {
    pub fn is_no_match(&self) -> bool {
        matches!(self, LineMatch::NoMatch)
    }

    /// Turns a match into resource entries.
    ///
    /// Numbered filter strings expand to one entry per description, keyed
    /// `{base}_1`, `{base}_2`, ... Each description is converted like any
    /// other text.
    pub fn into_entries(self) -> Vec<ResourceEntry> {
        match self {
            LineMatch::Menu { text } => vec![ResourceEntry::anonymous(text::convert(text))],
            LineMatch::Define { name, .. } if name == ENGLISH_MARKER => Vec::new(),
            LineMatch::Define { name, value } => {
                vec![ResourceEntry::keyed(name, text::convert(value))]
            }
            LineMatch::Numbered { base, text } => match filter::split_descriptions(text) {
                Some(descriptions) => descriptions
                    .into_iter()
                    .enumerate()
                    .map(|(i, description)| {
                        ResourceEntry::keyed(
                            format!("{}_{}", base, i + 1),
                            text::convert(&description),
                        )
                    })
                    .collect(),
                None => vec![ResourceEntry::keyed(base, text::convert(text))],
            },
            LineMatch::NoMatch => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_line() {
        assert_eq!(
            entries_for_line(r#"  POPUP "&File""#),
            vec![ResourceEntry::anonymous("&File")]
        );
    }

    #[test]
    fn test_menuitem_line_takes_text_up_to_last_quote() {
        let line = r#"        MENUITEM "&Hard Reset...", IDM_ACTION_HRESET"#;
        assert_eq!(
            match_menu(line),
            LineMatch::Menu {
                text: "&Hard Reset..."
            }
        );
        assert_eq!(
            entries_for_line(line),
            vec![ResourceEntry::anonymous("&Hard Reset...")]
        );
    }

    #[test]
    fn test_menu_separator_has_no_text() {
        assert!(entries_for_line("        MENUITEM SEPARATOR").is_empty());
    }

    #[test]
    fn test_menu_text_is_converted() {
        assert_eq!(
            entries_for_line(r#"MENUITEM "Use ""fast"" mode", IDM_FAST"#),
            vec![ResourceEntry::anonymous(r#"Use \"fast\" mode"#)]
        );
    }

    #[test]
    fn test_english_marker_define_is_skipped() {
        let line = r#"#define IDS_LANG_ENUS "English (US)""#;
        assert!(matches!(
            match_define(line),
            LineMatch::Define {
                name: ENGLISH_MARKER,
                ..
            }
        ));
        assert!(entries_for_line(line).is_empty());
    }

    #[test]
    fn test_quoted_define() {
        assert_eq!(
            entries_for_line(r#"#define FONT_NAME "Segoe UI""#),
            vec![ResourceEntry::keyed("FONT_NAME", "Segoe UI")]
        );
    }

    #[test]
    fn test_bare_define() {
        assert_eq!(
            entries_for_line("  #define FONT_SIZE 9"),
            vec![ResourceEntry::keyed("FONT_SIZE", "9")]
        );
    }

    #[test]
    fn test_define_with_unterminated_quote_keeps_quote() {
        assert_eq!(
            match_define(r#"#define BROKEN "oops"#),
            LineMatch::Define {
                name: "BROKEN",
                value: "\"oops"
            }
        );
    }

    #[test]
    fn test_define_without_value_does_not_match() {
        assert_eq!(match_define("#define GUARD_H"), LineMatch::NoMatch);
    }

    #[test]
    fn test_numbered_line() {
        assert_eq!(
            entries_for_line(r#"    2048    "86Box""#),
            vec![ResourceEntry::keyed("2048", "86Box")]
        );
    }

    #[test]
    fn test_numbered_line_with_ids_prefix() {
        assert_eq!(
            entries_for_line(r#"    IDS_2049    "Error""#),
            vec![ResourceEntry::keyed("IDS_2049", "Error")]
        );
    }

    #[test]
    fn test_numbered_line_with_library_macro() {
        assert_eq!(
            entries_for_line(r#"    2120    "Unable to initialize " LIB_NAME_FREETYPE ".""#),
            vec![ResourceEntry::keyed("2120", "Unable to initialize libfreetype.")]
        );
    }

    #[test]
    fn test_numbered_filter_line_expands_descriptions() {
        let line = r#"    123 "Text files (*.txt)\0*.txt\0All files (*.*)\0*.*\0""#;
        assert_eq!(
            entries_for_line(line),
            vec![
                ResourceEntry::keyed("123_1", "Text files (*.txt)"),
                ResourceEntry::keyed("123_2", "All files (*.*)"),
            ]
        );
    }

    #[test]
    fn test_filter_descriptions_are_converted() {
        let line = r#"    2200 "Files (""x"") (*.x)\0*.x\0""#;
        assert_eq!(
            entries_for_line(line),
            vec![ResourceEntry::keyed("2200_1", r#"Files (\"x\") (*.x)"#)]
        );
    }

    #[test]
    fn test_numbered_without_quoted_text_does_not_match() {
        assert_eq!(match_numbered("    2048 no quotes here"), LineMatch::NoMatch);
    }

    #[test]
    fn test_unrelated_lines() {
        for line in [
            "",
            "// comment",
            "BEGIN",
            "STRINGTABLE DISCARDABLE",
            r#"    DEFPUSHBUTTON   "OK",IDOK,7,7,50,14"#,
            "#include \"resource.h\"",
        ] {
            assert!(classify(line).is_empty(), "unexpected match for {:?}", line);
        }
    }

    #[test]
    fn test_matchers_are_anchored_at_line_start() {
        assert!(classify(r#"Text MENUITEM "x""#).is_empty());
        assert_eq!(
            classify(r#" 7 MENUITEM "x""#),
            vec![LineMatch::Numbered {
                base: "7",
                text: "x"
            }]
        );
    }
}
