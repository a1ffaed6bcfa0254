use rc2po::LocaleFile;
use std::fs::File;
use std::io::Write;

/// Run the debug command: parse one resource script and output its entries as JSON.
pub fn run_debug_command(input: String, output: Option<String>) {
    let locale = match LocaleFile::read_from(&input) {
        Ok(locale) => locale,
        Err(e) => {
            eprintln!("Error reading {}: {}", input, e);
            std::process::exit(1);
        }
    };

    let json = locale.to_json().unwrap_or_else(|e| {
        eprintln!("Error serializing to JSON: {}", e);
        std::process::exit(1);
    });

    match output {
        Some(output_path) => {
            if let Err(e) =
                File::create(&output_path).and_then(|mut f| f.write_all(json.as_bytes()))
            {
                eprintln!("Error writing to {}: {}", output_path, e);
                std::process::exit(1);
            }
            println!("✅ Debug output written to: {}", output_path);
        }
        None => {
            println!("{}", json);
        }
    }
}
