//! The scanner that produces tokens from source text.

use std::iter::Peekable;
use std::str::CharIndices;

use super::{keyword, Literal, Span, Token, TokenKind};
use crate::diagnostics::{Diagnostic, DiagnosticSink, LexError};

/// A scanner that tokenizes Lox source code.
///
/// A scanner is consumed by [`Scanner::scan_tokens`], so each instance
/// produces exactly one token sequence.
pub struct Scanner<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    /// Byte offset of the lexeme being recognized
    start: usize,
    /// Byte offset of the next unread character
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the whole source.
    ///
    /// Lexical errors are handed to `sink` and scanning resumes with the
    /// next character. The returned sequence always ends with exactly one
    /// `Eof` token carrying the final line number.
    pub fn scan_tokens<S>(mut self, sink: &mut S) -> Vec<Token>
    where
        S: DiagnosticSink + ?Sized,
    {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            self.start = self.current;
            if let Some(token) = self.scan_token(sink) {
                tracing::trace!(line = token.line, "{}", token);
                tokens.push(token);
            }
        }

        tokens.push(Token::eof(self.current, self.line));
        tracing::debug!(
            tokens = tokens.len(),
            lines = self.line,
            bytes = self.source.len(),
            "scan complete"
        );
        tokens
    }

    /// Recognizes one token, or skips one unit of whitespace or comment.
    fn scan_token<S>(&mut self, sink: &mut S) -> Option<Token>
    where
        S: DiagnosticSink + ?Sized,
    {
        let line = self.line;
        let ch = self.advance()?;

        let kind = match ch {
            // Single-character tokens
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,

            // One or two character tokens
            '!' => self.scan_bang(),
            '=' => self.scan_equal(),
            '<' => self.scan_less(),
            '>' => self.scan_greater(),
            '/' => {
                if self.peek() == Some('/') {
                    self.skip_line_comment();
                    return None;
                }
                TokenKind::Slash
            }

            // Whitespace
            ' ' | '\t' | '\r' => return None,
            '\n' => {
                self.line += 1;
                return None;
            }

            '"' => return self.scan_string(line, sink),
            _ if ch.is_ascii_digit() => return Some(self.scan_number(line)),
            _ if is_alpha(ch) => self.scan_identifier(),

            _ => {
                self.report(sink, LexError::UnexpectedCharacter(ch));
                return None;
            }
        };

        Some(self.make_token(kind, Literal::None, line))
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, ch) = self.chars.next()?;
        self.current = pos + ch.len_utf8();
        Some(ch)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.chars.clone();
        iter.next();
        iter.next().map(|(_, ch)| ch)
    }

    /// Consumes the next character if it is `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_line_comment(&mut self) {
        // The newline itself is left for the main loop to count.
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn scan_bang(&mut self) -> TokenKind {
        if self.match_char('=') {
            TokenKind::BangEqual
        } else {
            TokenKind::Bang
        }
    }

    fn scan_equal(&mut self) -> TokenKind {
        if self.match_char('=') {
            TokenKind::EqualEqual
        } else {
            TokenKind::Equal
        }
    }

    fn scan_less(&mut self) -> TokenKind {
        if self.match_char('=') {
            TokenKind::LessEqual
        } else {
            TokenKind::Less
        }
    }

    fn scan_greater(&mut self) -> TokenKind {
        if self.match_char('=') {
            TokenKind::GreaterEqual
        } else {
            TokenKind::Greater
        }
    }

    fn scan_string<S>(&mut self, line: usize, sink: &mut S) -> Option<Token>
    where
        S: DiagnosticSink + ?Sized,
    {
        while let Some(ch) = self.peek() {
            if ch == '"' {
                break;
            }
            if ch == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        // Closing quote
        if self.advance().is_none() {
            self.report(sink, LexError::UnterminatedString);
            return None;
        }

        let value = self.source[self.start + 1..self.current - 1].to_string();
        Some(self.make_token(TokenKind::String, Literal::String(value), line))
    }

    fn scan_number(&mut self, line: usize) -> Token {
        self.consume_digits();

        // A dot only belongs to the number when a digit follows it.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance();
            self.consume_digits();
        }

        let lexeme = &self.source[self.start..self.current];
        // Digits with an optional fraction always parse; huge values saturate to infinity.
        let value = lexeme.parse::<f64>().unwrap_or(f64::INFINITY);
        self.make_token(TokenKind::Number, Literal::Number(value), line)
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance();
        }
    }

    fn scan_identifier(&mut self) -> TokenKind {
        while self.peek().is_some_and(is_alphanumeric) {
            self.advance();
        }

        keyword(&self.source[self.start..self.current]).unwrap_or(TokenKind::Identifier)
    }

    fn make_token(&self, kind: TokenKind, literal: Literal, line: usize) -> Token {
        Token::new(
            kind,
            &self.source[self.start..self.current],
            literal,
            line,
            Span::new(self.start, self.current),
        )
    }

    fn report<S>(&self, sink: &mut S, error: LexError)
    where
        S: DiagnosticSink + ?Sized,
    {
        tracing::debug!(line = self.line, %error, "lexical error");
        sink.report(Diagnostic::new(self.line, error));
    }
}

/// Checks if a character can start an identifier.
fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Checks if a character can continue an identifier.
fn is_alphanumeric(ch: char) -> bool {
    is_alpha(ch) || ch.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostics;

    fn scan(source: &str) -> (Vec<Token>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let tokens = Scanner::new(source).scan_tokens(&mut diagnostics);
        (tokens, diagnostics)
    }

    type Summary = (TokenKind, String, Literal, usize);

    fn token(kind: TokenKind, lexeme: &str, literal: Literal, line: usize) -> Summary {
        (kind, lexeme.to_string(), literal, line)
    }

    fn eof(line: usize) -> Summary {
        token(TokenKind::Eof, "", Literal::None, line)
    }

    fn summarize(tokens: &[Token]) -> Vec<Summary> {
        tokens
            .iter()
            .map(|t| (t.kind, t.lexeme.clone(), t.literal.clone(), t.line))
            .collect()
    }

    #[test]
    fn test_scanning_table() {
        let cases = vec![
            (" ", vec![eof(1)]),
            ("\t", vec![eof(1)]),
            (" \r\n ", vec![eof(2)]),
            (" \n ", vec![eof(2)]),
            ("// Comment", vec![eof(1)]),
            ("/", vec![token(TokenKind::Slash, "/", Literal::None, 1), eof(1)]),
            ("!=", vec![token(TokenKind::BangEqual, "!=", Literal::None, 1), eof(1)]),
            ("!", vec![token(TokenKind::Bang, "!", Literal::None, 1), eof(1)]),
            (
                "\"Hello\"",
                vec![
                    token(TokenKind::String, "\"Hello\"", Literal::String("Hello".into()), 1),
                    eof(1),
                ],
            ),
            ("49", vec![token(TokenKind::Number, "49", Literal::Number(49.0), 1), eof(1)]),
            (
                "49.75",
                vec![token(TokenKind::Number, "49.75", Literal::Number(49.75), 1), eof(1)],
            ),
            ("orchid", vec![token(TokenKind::Identifier, "orchid", Literal::None, 1), eof(1)]),
            (
                "print foo",
                vec![
                    token(TokenKind::Print, "print", Literal::None, 1),
                    token(TokenKind::Identifier, "foo", Literal::None, 1),
                    eof(1),
                ],
            ),
            (
                "print \"Hello world\"",
                vec![
                    token(TokenKind::Print, "print", Literal::None, 1),
                    token(
                        TokenKind::String,
                        "\"Hello world\"",
                        Literal::String("Hello world".into()),
                        1,
                    ),
                    eof(1),
                ],
            ),
        ];

        for (source, expected) in cases {
            let (tokens, diagnostics) = scan(source);
            assert!(!diagnostics.had_error(), "unexpected error for {:?}", source);
            assert_eq!(summarize(&tokens), expected, "source: {:?}", source);
        }
    }

    #[test]
    fn test_unexpected_character() {
        let (tokens, diagnostics) = scan("3 ^ 4");
        assert_eq!(diagnostics.len(), 1);
        let first = diagnostics.iter().next().unwrap();
        assert_eq!(first.line, 1);
        assert_eq!(first.error, LexError::UnexpectedCharacter('^'));

        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]);
    }

    #[test]
    fn test_unterminated_string() {
        let (tokens, diagnostics) = scan("\"Hello");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics.iter().next().unwrap().error,
            LexError::UnterminatedString
        );
        assert_eq!(summarize(&tokens), vec![eof(1)]);
    }

    #[test]
    fn test_unterminated_string_reports_last_line() {
        let (tokens, diagnostics) = scan("\"one\ntwo\nthree");
        assert_eq!(diagnostics.iter().next().unwrap().line, 3);
        assert_eq!(summarize(&tokens), vec![eof(3)]);
    }

    #[test]
    fn test_multiline_string_keeps_opening_line() {
        let (tokens, diagnostics) = scan("\"a\nb\" x");
        assert!(!diagnostics.had_error());
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].literal.as_str(), Some("a\nb"));
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[2].kind, TokenKind::Eof);
        assert_eq!(tokens[2].line, 2);
    }

    #[test]
    fn test_comment_stops_at_newline() {
        let (tokens, _) = scan("// first\n+");
        assert_eq!(
            summarize(&tokens),
            vec![token(TokenKind::Plus, "+", Literal::None, 2), eof(2)]
        );
    }

    #[test]
    fn test_division_vs_comment() {
        let (tokens, _) = scan("6 / 2");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Number, TokenKind::Slash, TokenKind::Number, TokenKind::Eof]
        );
    }

    #[test]
    fn test_spans_slice_the_source() {
        let source = "var x = \"hi\";";
        let (tokens, _) = scan(source);
        for t in &tokens {
            assert_eq!(&source[t.span.start..t.span.end], t.lexeme);
        }
        assert_eq!(tokens.last().unwrap().span, Span::new(source.len(), source.len()));
    }

    #[test]
    fn test_non_ascii_character_is_reported_once() {
        let (tokens, diagnostics) = scan("a é b");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics.iter().next().unwrap().error,
            LexError::UnexpectedCharacter('é')
        );
        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["a", "b", ""]);
    }

    #[test]
    fn test_non_ascii_inside_string() {
        let (tokens, diagnostics) = scan("\"héllo\"");
        assert!(!diagnostics.had_error());
        assert_eq!(tokens[0].literal.as_str(), Some("héllo"));
    }

    #[test]
    fn test_dyn_sink() {
        let mut diagnostics = Diagnostics::new();
        let sink: &mut dyn DiagnosticSink = &mut diagnostics;
        let tokens = Scanner::new("@").scan_tokens(sink);
        assert_eq!(tokens.len(), 1);
        assert!(diagnostics.had_error());
    }
}
