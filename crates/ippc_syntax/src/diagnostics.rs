//! Parse errors for IPPcode23 programs.
//!
//! Validation is fail-fast: the first violation ends the parse and is returned as a single [`ParseError`]. Each
//! variant carries the 1-based physical line number and, where a token is at fault, a span so a `miette` report
//! can point at it.

use std::fmt;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use ippc_core::lang::exit_codes::{self, ExitCodeId};
use ippc_core::lang::opcodes::OpcodeId;
use ippc_core::lang::operands::OperandRole;
use ippc_core::lang::HEADER_MARKER;

use crate::classify::OperandError;

/// The first error found while parsing a program.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    #[error("input is empty")]
    #[diagnostic(
        code(ippc::empty_input),
        help("a program consists of the `.IPPcode23` header line followed by instructions")
    )]
    EmptyInput,

    #[error("{}", missing_header_message(.found))]
    #[diagnostic(
        code(ippc::missing_header),
        help("the first line that is not blank or a comment must be exactly `.IPPcode23`")
    )]
    MissingHeader {
        found: Option<String>,
        line: Option<usize>,
        #[label("expected the header here")]
        span: Option<SourceSpan>,
    },

    #[error("line {line}: unknown opcode `{opcode}`")]
    #[diagnostic(code(ippc::unknown_opcode))]
    UnknownOpcode {
        opcode: String,
        line: usize,
        #[label("not an IPPcode23 instruction")]
        span: SourceSpan,
    },

    #[error("line {line}: `{opcode}` takes {} but got {}", operand_count(.expected), operand_count(.found))]
    #[diagnostic(code(ippc::arity_mismatch))]
    ArityMismatch {
        opcode: OpcodeId,
        expected: usize,
        found: usize,
        line: usize,
        #[label("this instruction")]
        span: SourceSpan,
    },

    #[error("line {line}: operand {position} of `{opcode}` must be {role}, got `{token}`")]
    #[diagnostic(code(ippc::invalid_operand))]
    InvalidOperand {
        token: String,
        role: OperandRole,
        position: usize,
        opcode: OpcodeId,
        line: usize,
        #[label("{reason}")]
        span: SourceSpan,
        #[source]
        reason: OperandError,
    },
}

/// The kind of a [`ParseError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    EmptyInput,
    MissingHeader,
    UnknownOpcode,
    ArityMismatch,
    InvalidOperand,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseErrorKind::EmptyInput => "empty input",
            ParseErrorKind::MissingHeader => "missing header",
            ParseErrorKind::UnknownOpcode => "unknown opcode",
            ParseErrorKind::ArityMismatch => "arity mismatch",
            ParseErrorKind::InvalidOperand => "invalid operand",
        };
        f.write_str(name)
    }
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::EmptyInput => ParseErrorKind::EmptyInput,
            ParseError::MissingHeader { .. } => ParseErrorKind::MissingHeader,
            ParseError::UnknownOpcode { .. } => ParseErrorKind::UnknownOpcode,
            ParseError::ArityMismatch { .. } => ParseErrorKind::ArityMismatch,
            ParseError::InvalidOperand { .. } => ParseErrorKind::InvalidOperand,
        }
    }

    /// The documented exit status identifier for this error.
    pub fn exit_code_id(&self) -> ExitCodeId {
        match self.kind() {
            ParseErrorKind::EmptyInput => ExitCodeId::InputOpen,
            ParseErrorKind::MissingHeader => ExitCodeId::MissingHeader,
            ParseErrorKind::UnknownOpcode => ExitCodeId::BadOpcode,
            ParseErrorKind::ArityMismatch | ParseErrorKind::InvalidOperand => ExitCodeId::LexicalOrSyntax,
        }
    }

    /// The numeric process exit status for this error (see `ippc_core::lang::exit_codes`).
    pub fn exit_code(&self) -> i32 {
        exit_codes::code(self.exit_code_id())
    }

    /// 1-based physical line number of the offending line, if the error is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::EmptyInput => None,
            ParseError::MissingHeader { line, .. } => *line,
            ParseError::UnknownOpcode { line, .. }
            | ParseError::ArityMismatch { line, .. }
            | ParseError::InvalidOperand { line, .. } => Some(*line),
        }
    }
}

fn missing_header_message(found: &Option<String>) -> String {
    match found {
        Some(line) => format!("expected header `{HEADER_MARKER}`, found `{line}`"),
        None => format!("missing header `{HEADER_MARKER}`"),
    }
}

fn operand_count(n: &usize) -> String {
    match *n {
        1 => "1 operand".to_string(),
        n => format!("{n} operands"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> SourceSpan {
        (0..1).into()
    }

    #[test]
    fn test_exit_codes_per_kind() {
        assert_eq!(ParseError::EmptyInput.exit_code(), 11);
        let header = ParseError::MissingHeader {
            found: None,
            line: None,
            span: None,
        };
        assert_eq!(header.exit_code(), 21);
        let opcode = ParseError::UnknownOpcode {
            opcode: "FOO".into(),
            line: 2,
            span: span(),
        };
        assert_eq!(opcode.exit_code(), 22);
        let arity = ParseError::ArityMismatch {
            opcode: OpcodeId::Move,
            expected: 2,
            found: 1,
            line: 3,
            span: span(),
        };
        assert_eq!(arity.exit_code(), 23);
        assert_eq!(arity.kind(), ParseErrorKind::ArityMismatch);
        assert_eq!(arity.line(), Some(3));
    }

    #[test]
    fn test_messages() {
        let header = ParseError::MissingHeader {
            found: Some(".IPPcode22".into()),
            line: Some(1),
            span: Some(span()),
        };
        assert_eq!(header.to_string(), "expected header `.IPPcode23`, found `.IPPcode22`");

        let arity = ParseError::ArityMismatch {
            opcode: OpcodeId::DefVar,
            expected: 1,
            found: 0,
            line: 4,
            span: span(),
        };
        assert_eq!(arity.to_string(), "line 4: `DEFVAR` takes 1 operand but got 0 operands");

        let operand = ParseError::InvalidOperand {
            token: "int@x".into(),
            role: OperandRole::Symb,
            position: 2,
            opcode: OpcodeId::Move,
            line: 5,
            span: span(),
            reason: OperandError::InvalidInt { payload: "x".into() },
        };
        assert_eq!(operand.to_string(), "line 5: operand 2 of `MOVE` must be <symb>, got `int@x`");
        assert_eq!(operand.exit_code(), 23);
    }
}
