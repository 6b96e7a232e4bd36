//! Terminal output for tokens and diagnostics.

use lox_lexer::{Diagnostic, Diagnostics, Token, TokenKind};
use owo_colors::OwoColorize;

/// Prints one token per line using its plain `KIND lexeme literal` form.
pub fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{}", token);
    }
}

/// Prints tokens with the kind name colored by category.
pub fn print_tokens_colored(tokens: &[Token]) {
    for token in tokens {
        println!("{}", format_token(token));
    }
}

/// Prints every diagnostic to stderr.
pub fn print_diagnostics(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics {
        eprintln!("{}", format_diagnostic(diagnostic));
    }
}

fn format_token(token: &Token) -> String {
    let kind = token.kind.name();
    let kind = if token.kind.is_keyword() {
        kind.magenta().bold().to_string()
    } else if token.kind.is_literal() {
        kind.yellow().to_string()
    } else if token.kind == TokenKind::Identifier {
        kind.cyan().to_string()
    } else if token.kind == TokenKind::Eof {
        kind.dimmed().to_string()
    } else {
        kind.to_string()
    };

    format!("{} {} {}", kind, token.lexeme, token.literal.green())
}

fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    format!(
        "{} {}: {}",
        format!("[line {}]", diagnostic.line).dimmed(),
        "Error".red().bold(),
        diagnostic.message()
    )
}
