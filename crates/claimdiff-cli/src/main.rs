//! claimdiff CLI
//!
//! Command-line interface comparing two certification claim files

use clap::{Parser, Subcommand, ValueEnum};
use claimdiff_core::logging_facility::{init, Profile};
use claimdiff_core_types::RunId;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "claimdiff")]
#[command(about = "claimdiff - Compare two certification claim files", long_about = None)]
struct Cli {
    /// Log format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two claim files
    Compare(commands::compare::CompareArgs),
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Text => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let run_id = RunId::new();
    let span = tracing::info_span!("claimdiff", run_id = %run_id);
    let _guard = span.enter();

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
