//! Instruction validator and program assembler for IPPcode23.
//!
//! Turns the retained lines produced by [`crate::lexer`] into a [`Program`]: the first line must be the header,
//! every following line is validated against the opcode table in `ippc_core::lang::opcodes`, and validated
//! instructions are numbered `1..=n` in source order.
//!
//! ## Examples
//!
//! ```rust
//! use ippc_syntax::parser;
//!
//! let program = parser::parse_program(".IPPcode23\nDEFVAR GF@x\nMOVE GF@x int@5\n").unwrap();
//! assert_eq!(program.len(), 2);
//! assert_eq!(program.instructions[1].to_string(), "MOVE GF@x int@5");
//! ```

use crate::ast::{Argument, Instruction, Program};
use crate::classify;
use crate::diagnostics::ParseError;
use crate::lexer::{self, SourceLine, Token};
use ippc_core::lang::{opcodes, HEADER_MARKER};

// NOTE: This module is split across multiple files using `include!` to keep the validator, its public entry
// points and its tests in the same Rust module.

include!("parser/core.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
