use rc2po_cli::validation::{ValidationContext, validate_context};

use rc2po::{ConvertOptions, Error, LocaleReport, convert_dir};

const USAGE_HINT: &str = "\
Converter for resource-script language files from .rc to .po

Usage: rc2po convert <INPUT_DIR> <OUTPUT_DIR> [--reference <CODE>]

Input path should point to the folder holding the <locale>.rc files (e.g. src/win/languages).
Output path should point to the folder receiving the <locale>.po files (e.g. src/qt/languages).";

pub fn run_convert_command(input_dir: String, output_dir: String, reference: String) {
    let context = ValidationContext::new()
        .with_input_dir(&input_dir)
        .with_output_dir(&output_dir)
        .with_reference_locale(&reference);
    if let Err(e) = validate_context(&context) {
        println!("{}", USAGE_HINT);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let options = ConvertOptions::new().with_reference_locale(reference);
    match convert_dir(&input_dir, &output_dir, &options) {
        Ok(reports) => print_summary(&reports),
        Err(Error::MissingReference(code)) => {
            eprintln!("Language {} not found! Check the input-path.", code);
            std::process::exit(1);
        }
        Err(e) => {
            println!("❌ Conversion failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_summary(reports: &[LocaleReport]) {
    let mismatches: usize = reports.iter().map(|r| r.mismatches.len()).sum();
    let dropped: usize = reports.iter().map(|r| r.dropped.len()).sum();
    let misaligned = reports
        .iter()
        .filter(|r| r.length_mismatch.is_some())
        .count();

    println!(
        "✅ Converted {} locale(s) ({} ID mismatch(es), {} misaligned, {} dropped duplicate(s))",
        reports.len(),
        mismatches,
        misaligned,
        dropped
    );
}
