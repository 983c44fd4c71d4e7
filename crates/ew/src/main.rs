//! EW CLI - Newsletter rendering engine.
//!
//! Provides commands for:
//! - `render`: Render newsletter markdown to HTML
//! - `extract`: Pull named sections and reading stats out of a draft

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ExtractArgs, RenderArgs};
use output::Output;

/// EW - Newsletter rendering engine.
#[derive(Parser)]
#[command(name = "ew", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render newsletter markdown to HTML.
    Render(RenderArgs),
    /// Extract named sections and reading stats from a draft.
    Extract(ExtractArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for the selected command
    let verbose = match &cli.command {
        Commands::Render(args) => args.verbose,
        Commands::Extract(args) => args.verbose,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG
    // Logs go to stderr so stdout stays clean for the rendered payload
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Extract(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
