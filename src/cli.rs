//! Command line arguments for the `lox` binary.

use clap::Parser;
use std::path::PathBuf;

/// Scan Lox source and print its tokens.
///
/// Without arguments an interactive prompt is started.
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Script to scan
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Scan source code given on the command line
    #[arg(short, long, value_name = "CODE", conflicts_with = "script")]
    pub eval: Option<String>,

    /// Only report diagnostics, do not print tokens
    #[arg(short, long)]
    pub quiet: bool,
}
