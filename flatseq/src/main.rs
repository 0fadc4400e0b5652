mod check;
mod common;
mod flatten;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten a nested JSON array into its leaves.
    Flatten(flatten::Flatten),
    /// Run the built-in flattening scenarios through every strategy.
    Check(check::Check),
}

/// Initialize logging to stderr.
///
/// Use `RUST_LOG` to override the default filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flatseq=info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Flatten(flatten) => {
            flatten.run()?;
        }
        Commands::Check(check) => {
            check.run()?;
        }
    }
    Ok(())
}
