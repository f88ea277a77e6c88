//! QuoteForge CLI entry point.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Cli::parse();

    let written = quoteforge_common::generate_from_path(&args.input, Some(&args.output), &args.logos)
        .with_context(|| format!("failed to generate report from {}", args.input.display()))?;

    println!("{} Generated: {}", style("✓").green().bold(), written.display());
    Ok(())
}
