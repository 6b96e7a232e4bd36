//! Lexical analysis (tokenization) for Lox source code.
//!
//! The lexer transforms Lox source text into a sequence of tokens
//! that can be consumed by the parser.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Scanner` struct that produces tokens
//! - `token.rs` - `Token`, `TokenKind` and `Literal` definitions
//! - `keywords.rs` - The reserved word table
//!
//! ## Documentation Submodules
//!
//! - `operators` - One and two character operator scanning
//! - `literals` - Number, string, and identifier literals
//!
//! ## Usage
//!
//! ```rust
//! use lox_lexer::diagnostics::Diagnostics;
//! use lox_lexer::lexer::{Scanner, TokenKind};
//!
//! let mut diagnostics = Diagnostics::new();
//! let tokens = Scanner::new("var x = 42;").scan_tokens(&mut diagnostics);
//!
//! assert!(!diagnostics.had_error());
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! for token in &tokens {
//!     println!("{}", token);
//! }
//! ```

mod keywords;
mod scanner;
mod token;

// Documentation and test submodules
pub mod literals;
pub mod operators;

pub use keywords::{keyword, RESERVED_WORDS};
pub use scanner::Scanner;
pub use token::{Literal, Span, Token, TokenKind};
