//! CLI for querying Gemini with Google Search grounding.
//!
//! Connects the model to real-time web content and prints answers with
//! verifiable sources as JSON or markdown.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod input;
mod query;

/// Query Gemini with Google Search grounding.
///
/// Requires the GEMINI_API_KEY environment variable.
#[derive(Parser, Debug)]
#[command(name = "grounded", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Queries Gemini with Google Search grounding for real-time web information
    Query(query::QueryArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Query(args) => {
            init_tracing(args.verbose);
            if let Err(e) = query::run(args).await {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}

/// Maps the repeatable `-v` flag onto a log filter. Logs go to stderr so
/// stdout stays reserved for the formatted response.
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
