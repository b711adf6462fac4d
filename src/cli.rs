//! Command-line interface for zeroret.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "zeroret")]
#[command(
    about = "Synthesize zero-value early returns for a Go source position",
    long_about = None
)]
pub struct Cli {
    /// Target .go file.
    pub file: PathBuf,

    /// 1-based line number inside the target file.
    #[arg(long)]
    pub line: u32,

    /// Package directory to scan; defaults to the file's parent.
    #[arg(long)]
    pub pkg: Option<PathBuf>,

    /// Emit a complete `if err != nil` block instead of one value per line.
    #[arg(long)]
    pub snippet: bool,
}
