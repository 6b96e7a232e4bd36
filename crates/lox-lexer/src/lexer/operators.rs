//! Operator scanning documentation.
//!
//! This module documents the operator scanning logic in `scanner.rs`.
//! The lexer resolves two-character operators with one character of lookahead.
//!
//! ## Single-Character Tokens
//!
//! `(` `)` `{` `}` `,` `.` `-` `+` `;` `*` map directly to their token kind.
//! There are no compound forms: `++` scans as two `PLUS` tokens and `-1`
//! scans as `MINUS` followed by `NUMBER`.
//!
//! ## One or Two Character Tokens
//!
//! | Token | Method | Variants |
//! |-------|--------|----------|
//! | `!` | `scan_bang` | `!`, `!=` |
//! | `=` | `scan_equal` | `=`, `==` |
//! | `<` | `scan_less` | `<`, `<=` |
//! | `>` | `scan_greater` | `>`, `>=` |
//!
//! ## Lookahead Logic
//!
//! ```text
//! // For input "!="
//! scan_bang():
//!   '!' already consumed
//!   match_char('=') -> true, consumes '='
//!   return BangEqual
//! ```
//!
//! The longer form always wins, so `!=` is never `BANG` followed by `EQUAL`.
//!
//! ## Comment Handling
//!
//! The `/` character can start:
//! - Division: `a / b`
//! - Line comment: `// comment`, running up to (not including) the newline
//!
//! There are no block comments.

// This module serves as documentation. The actual implementation is in scanner.rs.
