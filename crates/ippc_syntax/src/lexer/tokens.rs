//! Token types for the IPPcode23 line tokenizer.
//!
//! The tokenizer does not interpret tokens; classification into operand kinds happens later in
//! `crate::classify`. A token is therefore just its text plus where it came from.

use crate::ast::Span;

/// A whitespace-delimited token with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// A retained (non-blank, non-comment-only) physical line.
///
/// ## Notes
/// - `tokens` is never empty.
/// - `number` is the 1-based physical line number in the raw text, counting discarded lines too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub tokens: Vec<Token>,
}

impl SourceLine {
    /// Span from the first to the last token of the line.
    pub fn span(&self) -> Span {
        match (self.tokens.first(), self.tokens.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::default(),
        }
    }

    /// The token texts joined by single spaces (the normalized line).
    pub fn normalized(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>().join(" ")
    }
}
