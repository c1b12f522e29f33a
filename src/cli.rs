//! Command-line interface for fontcat.

use clap::Parser;
use std::path::PathBuf;

/// fontcat - SDF/MSDF font atlas and FontCatalog generator
#[derive(Parser)]
#[command(name = "fontcat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the catalog description JSON file
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output directory for the generated assets (default: ./output)
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,
}
