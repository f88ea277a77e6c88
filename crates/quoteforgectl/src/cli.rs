//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap. Keeps argument parsing separate
//! from execution logic.

use std::path::PathBuf;

use clap::Parser;

/// QuoteForge CLI - generate a plan comparison document from a workbook.
#[derive(Parser)]
#[command(name = "quoteforgectl")]
#[command(about = "Generate a health-insurance quote comparison from an Excel workbook", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input workbook with sheets 'Client Details' and 'Premiums'
    pub input: PathBuf,

    /// Output document path
    #[arg(short, long, default_value = "output/Health_Quote.html")]
    pub output: PathBuf,

    /// Folder containing insurer logos
    #[arg(short, long, default_value = "logos")]
    pub logos: PathBuf,
}
