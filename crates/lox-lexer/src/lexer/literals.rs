//! Literal scanning documentation.
//!
//! This module documents the literal scanning logic in `scanner.rs`.
//! The lexer handles numeric, string, and identifier literals.
//!
//! ## Numeric Literals
//!
//! Method: `scan_number`
//!
//! ```text
//! 42        -> Number(42.0)
//! 49.75     -> Number(49.75)
//! 49.       -> Number(49.0), Dot
//! .5        -> Dot, Number(5.0)
//! -3        -> Minus, Number(3.0)
//! ```
//!
//! A `.` joins the number only when a digit follows it, so `123.sqrt`
//! stays a method call on `123`. There is no exponent, sign, base prefix
//! or digit separator. Every number is a double; integer runs too large
//! for `f64` saturate to infinity without an error.
//!
//! ## String Literals
//!
//! Method: `scan_string`
//!
//! ```text
//! "double"  -> String("double")
//! ```
//!
//! - Only double quotes delimit strings.
//! - There are no escape sequences; a backslash is an ordinary character.
//! - Strings may span lines. Each embedded newline bumps the line counter,
//!   while the token keeps the line of its opening quote.
//! - Reaching end of input before the closing quote reports
//!   `Unterminated string.` and emits no token.
//!
//! ## Identifiers and Keywords
//!
//! Method: `scan_identifier`
//!
//! ### Identifier Rules
//!
//! - Start: `A-Z`, `a-z`, `_`
//! - Continue: Start chars + `0-9`
//!
//! Non-ASCII letters are reported as unexpected characters.
//!
//! ### Keyword Detection
//!
//! After the maximal run is consumed it is looked up in `RESERVED_WORDS`:
//!
//! ```text
//! "and"    -> TokenKind::And
//! "andeas" -> TokenKind::Identifier
//! "And"    -> TokenKind::Identifier
//! ```

// This module serves as documentation. The actual implementation is in scanner.rs.

#[cfg(test)]
mod tests {
    use crate::lexer::{Literal, Token, TokenKind, RESERVED_WORDS};
    use crate::tokenize;

    fn scan_single(src: &str) -> Token {
        let output = tokenize(src);
        assert!(!output.diagnostics.had_error(), "error scanning {:?}", src);
        output.tokens.into_iter().next().unwrap()
    }

    // Number tests
    #[test]
    fn test_integer() {
        let token = scan_single("49");
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.literal, Literal::Number(49.0));
    }

    #[test]
    fn test_float() {
        let token = scan_single("49.75");
        assert_eq!(token.lexeme, "49.75");
        assert_eq!(token.literal, Literal::Number(49.75));
    }

    #[test]
    fn test_trailing_dot_is_not_consumed() {
        let output = tokenize("49.");
        let kinds: Vec<TokenKind> = output.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]);
        assert_eq!(output.tokens[0].lexeme, "49");
    }

    #[test]
    fn test_method_call_on_number() {
        let output = tokenize("123.sqrt");
        let lexemes: Vec<&str> = output.tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["123", ".", "sqrt", ""]);
    }

    #[test]
    fn test_leading_dot() {
        let output = tokenize(".5");
        assert_eq!(output.tokens[0].kind, TokenKind::Dot);
        assert_eq!(output.tokens[1].literal, Literal::Number(5.0));
    }

    #[test]
    fn test_negative_number_is_two_tokens() {
        let output = tokenize("-3");
        assert_eq!(output.tokens[0].kind, TokenKind::Minus);
        assert_eq!(output.tokens[1].literal, Literal::Number(3.0));
    }

    #[test]
    fn test_huge_integer_saturates() {
        let digits = "9".repeat(400);
        let token = scan_single(&digits);
        assert_eq!(token.literal, Literal::Number(f64::INFINITY));
    }

    // String tests
    #[test]
    fn test_string() {
        let token = scan_single("\"Hello\"");
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.lexeme, "\"Hello\"");
        assert_eq!(token.literal, Literal::String("Hello".to_string()));
    }

    #[test]
    fn test_empty_string() {
        let token = scan_single("\"\"");
        assert_eq!(token.literal, Literal::String(String::new()));
    }

    #[test]
    fn test_backslash_is_literal() {
        let token = scan_single(r#""a\nb""#);
        assert_eq!(token.literal.as_str(), Some(r"a\nb"));
    }

    #[test]
    fn test_string_keeps_comment_markers() {
        let token = scan_single("\"// not a comment\"");
        assert_eq!(token.literal.as_str(), Some("// not a comment"));
    }

    // Identifier and keyword tests
    #[test]
    fn test_identifier() {
        let token = scan_single("orchid");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert!(token.literal.is_none());
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        assert_eq!(scan_single("_private").kind, TokenKind::Identifier);
        assert_eq!(scan_single("x1_y2").lexeme, "x1_y2");
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(scan_single("andeas").kind, TokenKind::Identifier);
        assert_eq!(scan_single("classy").kind, TokenKind::Identifier);
        assert_eq!(scan_single("nil_").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(scan_single("Print").kind, TokenKind::Identifier);
        assert_eq!(scan_single("TRUE").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_every_keyword() {
        for (word, kind) in RESERVED_WORDS {
            let token = scan_single(word);
            assert_eq!(token.kind, kind, "keyword {:?}", word);
            assert_eq!(token.lexeme, word);
            assert!(token.literal.is_none());
        }
    }

    #[test]
    fn test_digit_starts_number_not_identifier() {
        let output = tokenize("1abc");
        assert_eq!(output.tokens[0].kind, TokenKind::Number);
        assert_eq!(output.tokens[1].kind, TokenKind::Identifier);
        assert_eq!(output.tokens[1].lexeme, "abc");
    }
}
