//! Line tokenizer for IPPcode23.
//!
//! IPPcode23 is line-oriented: every instruction sits on its own physical line. For each line the tokenizer
//! - removes everything from the first `#` to the end of the line (purely lexical; a `#` inside a would-be
//!   string constant still starts a comment),
//! - splits the rest on runs of whitespace, and
//! - discards the line entirely when nothing is left.
//!
//! Tokenization never fails: lines without content simply produce no tokens.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (Token, SourceLine)

pub mod tokens;

pub use tokens::{SourceLine, Token};

use crate::ast::Span;

/// Character that starts a comment running to the end of the line.
pub const COMMENT_CHAR: char = '#';

/// Check if a character separates tokens (ASCII whitespace including vertical tab).
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Remove the comment (if any) from a physical line.
///
/// ## Examples
/// ```rust
/// use ippc_syntax::lexer::strip_comment;
///
/// assert_eq!(strip_comment("WRITE GF@x # print it # twice"), "WRITE GF@x ");
/// assert_eq!(strip_comment("WRITE GF@x"), "WRITE GF@x");
/// ```
pub fn strip_comment(line: &str) -> &str {
    line.split_once(COMMENT_CHAR).map_or(line, |(code, _)| code)
}

/// Split one physical line into tokens.
///
/// ## Returns
/// - `Some(tokens)` with at least one token, or `None` when the line is blank or comment-only.
///
/// ## Examples
/// ```rust
/// use ippc_syntax::lexer::tokenize_line;
///
/// assert_eq!(tokenize_line("  MOVE\tGF@x   int@5 # init"), Some(vec!["MOVE", "GF@x", "int@5"]));
/// assert_eq!(tokenize_line("   # nothing here"), None);
/// ```
pub fn tokenize_line(line: &str) -> Option<Vec<&str>> {
    let tokens: Vec<&str> = strip_comment(line)
        .split(is_separator)
        .filter(|t| !t.is_empty())
        .collect();
    (!tokens.is_empty()).then_some(tokens)
}

/// Normalize one physical line: comment removed, whitespace collapsed to single spaces, trimmed.
pub fn normalize_line(line: &str) -> Option<String> {
    tokenize_line(line).map(|tokens| tokens.join(" "))
}

/// Tokenizer over a whole source text.
///
/// Produces one [`SourceLine`] per retained physical line, with spans pointing into the original text so
/// diagnostics can label the offending token.
pub struct Lexer<'a> {
    source: &'a str,
    lines: Vec<SourceLine>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lines: Vec::new(),
        }
    }

    /// Tokenize the entire source text.
    ///
    /// Lines are separated by `\n`; a trailing `\r` is treated as whitespace, so CRLF input works unchanged.
    pub fn tokenize(mut self) -> Vec<SourceLine> {
        let mut offset = 0;
        for (idx, raw) in self.source.split('\n').enumerate() {
            if let Some(line) = scan_line(idx + 1, offset, raw) {
                self.lines.push(line);
            }
            offset += raw.len() + 1;
        }
        self.lines
    }
}

/// Scan a single physical line starting at byte `offset` of the source.
fn scan_line(number: usize, offset: usize, raw: &str) -> Option<SourceLine> {
    let code = strip_comment(raw);
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in code.char_indices() {
        if is_separator(c) {
            if let Some(s) = start.take() {
                tokens.push(Token::new(&code[s..i], Span::new(offset + s, offset + i)));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(Token::new(&code[s..], Span::new(offset + s, offset + code.len())));
    }

    (!tokens.is_empty()).then(|| SourceLine { number, tokens })
}

/// Convenience function to tokenize a source text.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<SourceLine> {
    let lines = Lexer::new(source).tokenize();
    tracing::trace!(retained = lines.len(), "tokenized source");
    lines
}

// ============================================================================
// TESTS
// ============================================================================
