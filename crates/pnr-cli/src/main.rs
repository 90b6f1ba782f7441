//! # pnr CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Swedish personal identity number toolkit.
///
/// Validates, formats, and inspects personnummer and coordination numbers.
#[derive(Parser, Debug)]
#[command(name = "pnr", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Check a number; exit status reports the verdict.
    Validate(pnr_cli::validate::ValidateArgs),
    /// Print the canonical short or long form.
    Format(pnr_cli::format::FormatArgs),
    /// Print the parsed fields, optionally as JSON.
    Inspect(pnr_cli::inspect::InspectArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(args) => pnr_cli::validate::run(&args),
        Commands::Format(args) => pnr_cli::format::run(&args),
        Commands::Inspect(args) => pnr_cli::inspect::run(&args),
    }
}
