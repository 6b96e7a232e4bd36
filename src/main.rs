// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lox - the scanning front-end of the Lox scripting language
//!
//! This is the main entry point for the lox CLI/REPL.
//!
//! ## Features
//!
//! - Interactive REPL with syntax highlighting and history
//! - Async file loading with tokio
//! - Token listing with diagnostics and sysexits exit codes

mod cli;
mod error;
mod repl;
mod report;

use clap::Parser;
use clap::error::ErrorKind;
use cli::Cli;
use error::{CliError, EX_USAGE};
use lox_lexer::{AsyncScanner, ScanOutput};
use owo_colors::OwoColorize;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point - uses tokio runtime for async operations.
#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EX_USAGE),
            };
        }
    };

    let result = match (&cli.eval, &cli.script) {
        (Some(code), _) => run_eval(code, cli.quiet).await,
        (None, Some(path)) => run_file(path, cli.quiet).await,
        // No arguments - start REPL
        (None, None) => return run_repl(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "run failed");
            // Lexical errors were already printed as diagnostics.
            if !matches!(e, CliError::Lexical { .. }) {
                eprintln!("{}: {}", "Error".red().bold(), e);
            }
            e.exit_code()
        }
    }
}

/// Start the interactive REPL
fn run_repl() -> ExitCode {
    match repl::Repl::new() {
        Ok(mut repl) => {
            if let Err(e) = repl.run() {
                eprintln!("{}: {:?}", "REPL Error".red().bold(), e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "{}: Failed to initialize REPL: {:?}",
                "Error".red().bold(),
                e
            );
            ExitCode::FAILURE
        }
    }
}

/// Scan a Lox file asynchronously.
async fn run_file(path: &Path, quiet: bool) -> error::Result<()> {
    let output = AsyncScanner::new().scan_file(path).await?;
    finish(&output, quiet)
}

/// Scan Lox code from the command line.
async fn run_eval(code: &str, quiet: bool) -> error::Result<()> {
    let output = AsyncScanner::new().scan(code).await;
    finish(&output, quiet)
}

fn finish(output: &ScanOutput, quiet: bool) -> error::Result<()> {
    if !quiet {
        report::print_tokens(&output.tokens);
    }
    report::print_diagnostics(&output.diagnostics);

    if output.had_error() {
        Err(CliError::Lexical {
            count: output.diagnostics.len(),
        })
    } else {
        Ok(())
    }
}
