//! Stencil CLI: walk text through a stencil constraint step by step.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stencil_cli::walk::walk;
use stencil_core::StencilOptions;
use stencil_runtime::StencilAutomaton;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "stencil", about = "Step text through a stencil constraint")]
struct Cli {
    /// Path to a JSON file with `stencil` and optional `charsets`
    #[arg(long, conflicts_with = "stencil", required_unless_present = "stencil")]
    options: Option<PathBuf>,

    /// Inline JSON options, e.g. '{"stencil": ["id-", 0], "charsets": ["0123456789"]}'
    #[arg(long)]
    stencil: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Exit non-zero unless every chunk is accepted and the stencil can end
    #[arg(long)]
    check: bool,

    /// Chunks of text to feed, in order
    chunks: Vec<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // --- Load options ---
    // clap guarantees exactly one of --options / --stencil.
    let options = if let Some(path) = &cli.options {
        StencilOptions::from_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {e}", path.display()))?
    } else {
        StencilOptions::from_json(cli.stencil.as_deref().unwrap_or_default())?
    };

    let automaton = StencilAutomaton::from_options(&options)?;
    info!(
        "Stencil compiled: {} positions from {} entries",
        automaton.len(),
        options.stencil.len()
    );

    // --- Walk chunks ---
    let report = walk(&automaton, &cli.chunks);
    match cli.format {
        Format::Text => println!("{report}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.exit_ok(cli.check) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
