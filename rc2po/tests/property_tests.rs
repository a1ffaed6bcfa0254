use proptest::prelude::*;
use rc2po::classifier::{LineMatch, entries_for_line, match_numbered};
use rc2po::filter::split_descriptions;
use rc2po::formats::RcFormat;
use rc2po::traits::Writer;
use rc2po::{LocaleFile, PoFormat, align};

fn word_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 &.,!()*;]{1,20}").expect("valid word regex")
}

/// Lines shaped like the ones found in resource scripts, plus noise.
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        word_strategy().prop_map(|t| format!("    POPUP \"{}\"", t)),
        word_strategy().prop_map(|t| format!("        MENUITEM \"{}\", IDM_X", t)),
        ("[A-Z_]{1,12}", word_strategy()).prop_map(|(n, t)| format!("#define {} \"{}\"", n, t)),
        ("[0-9]{1,5}", word_strategy()).prop_map(|(n, t)| format!("    {}    \"{}\"", n, t)),
        ("[0-9]{1,5}", word_strategy(), word_strategy()).prop_map(|(n, a, b)| format!(
            "    {} \"{} (*.a)\\0*.a\\0{} (*.*)\\0*.*\\0\"",
            n, a, b
        )),
        proptest::string::string_regex("[ -~]{0,40}").expect("valid noise regex"),
    ]
}

fn script_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(), 0..30)
}

proptest! {
    #[test]
    fn prop_only_filter_lines_yield_several_entries(line in line_strategy()) {
        let entries = entries_for_line(&line);
        if entries.len() > 1 {
            match match_numbered(&line) {
                LineMatch::Numbered { text, .. } => {
                    prop_assert!(split_descriptions(text).is_some());
                }
                other => prop_assert!(false, "unexpected match {:?}", other),
            }
        }
    }

    #[test]
    fn prop_pipeline_is_deterministic(reference in script_strategy(), target in script_strategy()) {
        let render = || {
            let reference = LocaleFile::new("en-US", RcFormat::from_lines(&reference).entries);
            let target = LocaleFile::new("de-DE", RcFormat::from_lines(&target).entries);
            let alignment = align(&reference.entries, &target.entries);
            PoFormat::from_pairs(alignment.pairs).to_string_lossy().unwrap()
        };
        prop_assert_eq!(render(), render());
    }

    #[test]
    fn prop_catalog_never_exceeds_reference(reference in script_strategy(), target in script_strategy()) {
        let reference = RcFormat::from_lines(&reference).entries;
        let target = RcFormat::from_lines(&target).entries;
        let catalog = PoFormat::from_pairs(align(&reference, &target).pairs);
        prop_assert!(catalog.len() <= reference.len());
        prop_assert!(catalog.len() <= target.len());
    }
}
