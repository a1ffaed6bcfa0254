//! Conversion of resource-script string literals to `.po` string content.

/// Library-name macros concatenated into string literals, e.g.
/// `"Unable to load " LIB_NAME_PCAP "."`, and the names they expand to.
const LIBRARY_MACROS: [(&str, &str); 4] = [
    ("\" LIB_NAME_PCAP \"", "libpcap"),
    ("\" LIB_NAME_FREETYPE \"", "libfreetype"),
    ("\" LIB_NAME_FLUIDSYNTH \"", "libfluidsynth"),
    ("\" LIB_NAME_GS \"", "libgs"),
];

/// Expands the library-name macros, then turns `""` escapes into `\"`.
///
/// The macros must be expanded first: they are delimited by quote characters
/// that the escape rewrite would otherwise consume.
///
/// ```rust
/// assert_eq!(rc2po::text::convert(r#"She said ""hi"""#), r#"She said \"hi\""#);
/// assert_eq!(
///     rc2po::text::convert(r#"Unable to initialize " LIB_NAME_PCAP ""#),
///     "Unable to initialize libpcap"
/// );
/// ```
pub fn convert(raw: &str) -> String {
    let expanded = LIBRARY_MACROS
        .iter()
        .fold(raw.to_string(), |text, (pattern, name)| {
            text.replace(pattern, name)
        });

    expanded.replace("\"\"", "\\\"")
}
