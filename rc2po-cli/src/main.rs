mod convert;
mod debug;

use clap::{Parser, Subcommand};
use rc2po::codec::DEFAULT_REFERENCE_LOCALE;
use rc2po_cli::validation::validate_file_path;
use tracing_subscriber::EnvFilter;

use crate::{convert::run_convert_command, debug::run_debug_command};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert every <locale>.rc in a directory into <locale>.po files.
    Convert {
        /// Folder holding the <locale>.rc files
        input_dir: String,
        /// Folder receiving the <locale>.po files
        output_dir: String,
        /// Locale whose text becomes the msgid of every message
        #[arg(short, long, default_value = DEFAULT_REFERENCE_LOCALE)]
        reference: String,
    },

    /// Print the entries parsed from one resource script as JSON.
    Debug {
        /// The .rc file to parse
        #[arg(short, long)]
        input: String,
        /// Optional output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .without_time()
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let args = Args::parse();

    match args.commands {
        Commands::Convert {
            input_dir,
            output_dir,
            reference,
        } => run_convert_command(input_dir, output_dir, reference),
        Commands::Debug { input, output } => {
            if let Err(e) = validate_file_path(&input) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            run_debug_command(input, output);
        }
    }
}
