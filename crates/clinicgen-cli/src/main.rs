use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use clinicgen_generate::{GenerateOptions, GenerationEngine, GenerationError};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
}

#[derive(Parser, Debug)]
#[command(name = "clinicgen", version, about = "Clinic star-schema mock data generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the CSV tables and the data dictionary.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Directory where the output files are written.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Seed for the deterministic random stream.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<(), CliError> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let options = GenerateOptions {
        out_dir: args.out_dir,
        seed: args.seed,
    };
    let result = GenerationEngine::new(options).run()?;

    for table in &result.report.tables {
        info!(table = %table.table, rows = table.rows, bytes = table.bytes, "exported");
    }
    info!(
        out_dir = %result.out_dir.display(),
        bytes_written = result.report.bytes_written,
        duration_ms = result.report.duration_ms,
        "done"
    );

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
