// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # lox-lexer
//!
//! The scanning front-end of the Lox scripting language.
//!
//! ## Overview
//!
//! This crate turns a complete source string into an ordered token sequence:
//! - Single-pass scanner with one character of lookahead
//! - Number and string literal extraction
//! - Reserved word recognition
//! - Line tracking for diagnostics, including inside string literals
//! - Error recovery: lexical errors are reported, never fatal
//!
//! ## Quick Start
//!
//! ```rust
//! use lox_lexer::lexer::TokenKind;
//!
//! let output = lox_lexer::tokenize("print foo;");
//! assert!(!output.diagnostics.had_error());
//!
//! let kinds: Vec<TokenKind> = output.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Print, TokenKind::Identifier, TokenKind::Semicolon, TokenKind::Eof]
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod diagnostics;
pub mod lexer;

#[cfg(any(feature = "async", feature = "parallel"))]
mod async_scanner;

// Re-exports for convenience
pub use diagnostics::{Diagnostic, DiagnosticSink, Diagnostics, LexError};
pub use lexer::{Literal, Scanner, Token, TokenKind};

#[cfg(feature = "async")]
pub use async_scanner::AsyncScanner;
#[cfg(feature = "parallel")]
pub use async_scanner::ParallelScanner;

use std::path::PathBuf;

/// The result of scanning one source unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    /// The token sequence, always terminated by `Eof`
    pub tokens: Vec<Token>,
    /// Everything reported while scanning
    pub diagnostics: Diagnostics,
}

impl ScanOutput {
    /// Returns true if any lexical error was reported.
    pub fn had_error(&self) -> bool {
        self.diagnostics.had_error()
    }
}

/// Scans `source` with a fresh scanner and diagnostics collector.
pub fn tokenize(source: &str) -> ScanOutput {
    let mut diagnostics = Diagnostics::new();
    let tokens = Scanner::new(source).scan_tokens(&mut diagnostics);
    ScanOutput {
        tokens,
        diagnostics,
    }
}

/// Errors raised around scanning. Lexical errors are not among them; those
/// are reported as [`Diagnostic`]s.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a source file failed
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Building the scanning thread pool failed
    #[error("Failed to create thread pool: {0}")]
    ThreadPool(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_clean_source() {
        let output = tokenize("var a = 1;");
        assert!(!output.had_error());
        assert_eq!(output.tokens.len(), 6);
    }

    #[test]
    fn test_tokenize_collects_diagnostics() {
        let output = tokenize("var a = #;\n\"open");
        assert!(output.had_error());
        let lines: Vec<usize> = output.diagnostics.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![1, 2]);
    }

    #[test]
    fn test_io_error_display() {
        let err = Error::Io {
            path: PathBuf::from("missing.lox"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to read missing.lox: not found");
    }
}
