// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive REPL (Read-Eval-Print Loop) for the Lox scanner.

use lox_lexer::lexer::RESERVED_WORDS;
use lox_lexer::{Diagnostics, LexError, Scanner, Token, TokenKind, tokenize};
use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config, Editor, Helper};
use std::borrow::Cow;
use std::path::PathBuf;

use crate::report;

/// REPL configuration constants
const HISTORY_FILE: &str = ".lox_history";
const MAX_HISTORY_SIZE: usize = 1000;

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Load,
    Tokens,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let input = input.trim();
        let rest = input.strip_prefix('.')?;

        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        match cmd.as_str() {
            "help" | "h" | "?" => Some((ReplCommand::Help, arg)),
            "exit" | "quit" | "q" => Some((ReplCommand::Exit, arg)),
            "clear" | "cls" => Some((ReplCommand::Clear, arg)),
            "version" | "v" => Some((ReplCommand::Version, arg)),
            "load" | "l" => Some((ReplCommand::Load, arg)),
            "tokens" | "t" => Some((ReplCommand::Tokens, arg)),
            _ => None,
        }
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".load <file>", "Load and scan a Lox file"),
            (".tokens", "Toggle printing of scanned tokens"),
        ]
    }
}

/// Helper struct for rustyline that provides completion, hints, and validation
#[derive(Default)]
struct LoxHelper {
    /// Keywords and REPL commands for completion
    keywords: Vec<String>,
}

impl LoxHelper {
    fn new() -> Self {
        let keywords = RESERVED_WORDS
            .iter()
            .map(|(word, _)| *word)
            .chain([".help", ".exit", ".clear", ".version", ".load", ".tokens"])
            .map(String::from)
            .collect();

        Self { keywords }
    }
}

/// Finds the start of the word that ends at `pos`.
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .char_indices()
        .rev()
        .find(|&(_, c)| !c.is_ascii_alphanumeric() && c != '_' && c != '.')
        .map_or(0, |(i, c)| i + c.len_utf8())
}

impl Completer for LoxHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = word_start(line, pos);

        let word = &line[start..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches: Vec<Pair> = self
            .keywords
            .iter()
            .filter(|kw| kw.starts_with(word))
            .map(|kw| Pair {
                display: kw.clone(),
                replacement: kw[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for LoxHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let word = &line[word_start(line, pos)..];
        if word.len() < 2 {
            return None;
        }

        // Find first matching keyword
        self.keywords
            .iter()
            .find(|kw| kw.starts_with(word) && kw.len() > word.len())
            .map(|kw| (&kw[word.len()..]).dimmed().to_string())
    }
}

impl Highlighter for LoxHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if ReplCommand::parse(line).is_some() {
            return Cow::Owned(line.magenta().to_string());
        }

        // Color by the real token stream; gaps hold whitespace, comments and
        // anything the scanner rejected.
        let output = tokenize(line);
        let open_string = output
            .diagnostics
            .iter()
            .any(|d| d.error == LexError::UnterminatedString);
        let mut result = String::with_capacity(line.len() * 2);
        let mut cursor = 0;

        for token in &output.tokens {
            if token.span.start > cursor {
                let gap = &line[cursor..token.span.start];
                let unterminated = open_string && token.kind == TokenKind::Eof;
                result.push_str(&highlight_gap(gap, unterminated));
            }
            result.push_str(&highlight_token(token));
            cursor = token.span.end;
        }

        Cow::Owned(result)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

/// An unterminated string never becomes a token, so it shows up in the
/// gap before Eof.
fn highlight_gap(gap: &str, unterminated: bool) -> String {
    match open_quote(gap).filter(|_| unterminated) {
        Some(quote) => format!("{}{}", (&gap[..quote]).dimmed(), (&gap[quote..]).green()),
        None => gap.dimmed().to_string(),
    }
}

/// Byte offset of the first quote in `gap` that is not inside a comment.
fn open_quote(gap: &str) -> Option<usize> {
    let mut chars = gap.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some(i),
            '/' if chars.peek().is_some_and(|&(_, next)| next == '/') => {
                // Skip to the end of the line
                for (_, c) in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            _ => {}
        }
    }
    None
}

fn highlight_token(token: &Token) -> String {
    let lexeme = token.lexeme.as_str();
    match token.kind {
        TokenKind::True | TokenKind::False | TokenKind::Nil | TokenKind::This => {
            lexeme.blue().to_string()
        }
        kind if kind.is_keyword() => lexeme.magenta().bold().to_string(),
        TokenKind::Number => lexeme.yellow().to_string(),
        TokenKind::String => lexeme.green().to_string(),
        TokenKind::LeftParen
        | TokenKind::RightParen
        | TokenKind::LeftBrace
        | TokenKind::RightBrace => lexeme.yellow().to_string(),
        TokenKind::Identifier | TokenKind::Dot | TokenKind::Comma | TokenKind::Semicolon => {
            lexeme.to_string()
        }
        TokenKind::Eof => String::new(),
        _ => lexeme.cyan().to_string(),
    }
}

impl Validator for LoxHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        let input = ctx.input();

        if ReplCommand::parse(input).is_some() {
            return Ok(ValidationResult::Valid(None));
        }

        if needs_more_input(input) {
            return Ok(ValidationResult::Incomplete);
        }

        Ok(ValidationResult::Valid(None))
    }
}

/// Check whether the input is still open: an unterminated string, an
/// unclosed bracket, or a trailing binary operator.
fn needs_more_input(input: &str) -> bool {
    let output = tokenize(input);

    if output
        .diagnostics
        .iter()
        .any(|d| d.error == LexError::UnterminatedString)
    {
        return true;
    }

    if !is_balanced(&output.tokens) {
        return true;
    }

    // The last real token sits before Eof.
    let last = output.tokens.iter().rev().nth(1).map(|t| t.kind);
    matches!(
        last,
        Some(
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Equal
                | TokenKind::Comma
                | TokenKind::And
                | TokenKind::Or
        )
    )
}

/// Check if parentheses and braces are balanced
fn is_balanced(tokens: &[Token]) -> bool {
    let mut stack = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::LeftParen => stack.push(TokenKind::RightParen),
            TokenKind::LeftBrace => stack.push(TokenKind::RightBrace),
            // A stray closer is left for a parser to report
            TokenKind::RightParen | TokenKind::RightBrace => {
                if stack.last() == Some(&token.kind) {
                    stack.pop();
                }
            }
            _ => {}
        }
    }

    stack.is_empty()
}

impl Helper for LoxHelper {}

/// The interactive REPL for the Lox scanner
pub struct Repl {
    editor: Editor<LoxHelper, DefaultHistory>,
    history_path: PathBuf,
    /// Reset before every evaluation
    diagnostics: Diagnostics,
    show_tokens: bool,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new() -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(LoxHelper::new()));

        // Determine history file path
        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lox")
            .join(HISTORY_FILE);

        // Create parent directory if it doesn't exist
        if let Some(parent) = history_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        // Load history
        if let Err(e) = editor.load_history(&history_path) {
            tracing::debug!(path = %history_path.display(), error = %e, "no history loaded");
        }

        Ok(Self {
            editor,
            history_path,
            diagnostics: Diagnostics::new(),
            show_tokens: true,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> rustyline::Result<()> {
        self.print_banner();

        loop {
            let prompt = self.format_prompt();

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();

                    if trimmed.is_empty() {
                        continue;
                    }

                    // Check for REPL commands
                    if let Some((cmd, arg)) = ReplCommand::parse(trimmed) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    self.scan_and_print(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "^D".dimmed());
                    break;
                }
                Err(err) => {
                    eprintln!("{}: {:?}", "Error".red().bold(), err);
                    break;
                }
            }
        }

        // Save history
        if let Err(e) = self.editor.save_history(&self.history_path) {
            tracing::warn!(path = %self.history_path.display(), error = %e, "failed to save history");
        }

        self.print_goodbye();
        Ok(())
    }

    fn print_banner(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!(
            "  {} {} {}",
            "Lox Scanner".white().bold(),
            "v".dimmed(),
            version.bright_yellow()
        );
        println!(
            "  {}",
            "Every line is scanned and its tokens are printed".dimmed()
        );
        println!();
        println!(
            "  {} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
        println!();
    }

    fn print_goodbye(&self) {
        println!();
        println!("{}", "Goodbye!".bright_cyan());
        println!();
    }

    fn format_prompt(&self) -> String {
        format!("{} ", "lox>".bright_green().bold())
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        tracing::debug!(?cmd, ?arg, "repl command");
        match cmd {
            ReplCommand::Help => {
                self.print_help();
                CommandResult::Continue
            }
            ReplCommand::Exit => CommandResult::Exit,
            ReplCommand::Clear => {
                print!("\x1B[2J\x1B[H");
                CommandResult::Continue
            }
            ReplCommand::Version => {
                self.print_version();
                CommandResult::Continue
            }
            ReplCommand::Load => {
                if let Some(path) = arg {
                    self.load_file(path);
                } else {
                    eprintln!(
                        "{}: {} {}",
                        "Error".red().bold(),
                        ".load".cyan(),
                        "requires a file path".dimmed()
                    );
                }
                CommandResult::Continue
            }
            ReplCommand::Tokens => {
                self.show_tokens = !self.show_tokens;
                let state = if self.show_tokens { "on" } else { "off" };
                println!("{} {}", "Token output".dimmed(), state.cyan());
                CommandResult::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "REPL Commands:".white().bold());
        println!();

        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:16} {}", cmd.cyan(), desc.dimmed());
        }

        println!();
        println!("{}", "Keyboard Shortcuts:".white().bold());
        println!();
        println!(
            "  {:16} {}",
            "Ctrl+C".yellow(),
            "Cancel current input".dimmed()
        );
        println!("  {:16} {}", "Ctrl+D".yellow(), "Exit REPL".dimmed());
        println!("  {:16} {}", "Ctrl+L".yellow(), "Clear screen".dimmed());
        println!("  {:16} {}", "Tab".yellow(), "Autocomplete".dimmed());
        println!("  {:16} {}", "↑/↓".yellow(), "Navigate history".dimmed());
        println!();
    }

    fn print_version(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!("{}: {}", "Lox".bright_cyan().bold(), version.yellow());
        println!("{}: {}", "Rust".dimmed(), env!("CARGO_PKG_RUST_VERSION"));
        println!();
    }

    fn load_file(&mut self, path: &str) {
        let path = std::path::Path::new(path);

        match std::fs::read_to_string(path) {
            Ok(source) => self.scan_and_print(&source),
            Err(e) => {
                eprintln!(
                    "{}: failed to read '{}': {}",
                    "Error".red().bold(),
                    path.display().cyan(),
                    e
                );
            }
        }
    }

    fn scan_and_print(&mut self, source: &str) {
        let tokens = self.scan(source);
        if self.show_tokens {
            report::print_tokens_colored(&tokens);
        }
        report::print_diagnostics(&self.diagnostics);
    }

    /// Scan one input, forgetting the errors of the previous one.
    fn scan(&mut self, source: &str) -> Vec<Token> {
        self.diagnostics.clear();
        Scanner::new(source).scan_tokens(&mut self.diagnostics)
    }
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}
