// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the `lox` binary

use std::process::ExitCode;
use thiserror::Error;

/// Command line usage error (sysexits `EX_USAGE`)
pub const EX_USAGE: u8 = 64;
/// Input data was malformed (sysexits `EX_DATAERR`)
pub const EX_DATAERR: u8 = 65;
/// Input file could not be opened (sysexits `EX_NOINPUT`)
pub const EX_NOINPUT: u8 = 66;
/// Internal software error (sysexits `EX_SOFTWARE`)
pub const EX_SOFTWARE: u8 = 70;

/// Result type for `lox` runs
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end a `lox` run with a non-zero exit code
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or scanning the source failed
    #[error(transparent)]
    Scan(#[from] lox_lexer::Error),

    /// The source contained lexical errors
    #[error("{count} lexical error(s)")]
    Lexical {
        /// Number of diagnostics reported
        count: usize,
    },
}

impl CliError {
    /// The sysexits code for this error.
    pub fn code(&self) -> u8 {
        match self {
            CliError::Scan(lox_lexer::Error::Io { .. }) => EX_NOINPUT,
            CliError::Scan(lox_lexer::Error::ThreadPool(_)) => EX_SOFTWARE,
            CliError::Lexical { .. } => EX_DATAERR,
        }
    }

    /// Maps the error onto a process exit code.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}
