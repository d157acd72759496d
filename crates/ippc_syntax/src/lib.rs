//! Shared syntax frontend for IPPcode23: line tokenizer, operand classifier, instruction validator, AST and
//! diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the `ippc-parse` command line and by tests.
//!
//! ## Notes
//! - This crate is "syntax-only": it checks operand well-formedness and instruction shapes, not semantics (jump
//!   targets, variable definitions and types are not checked).
//! - Vocabulary identity (opcodes, frames, types, the header marker) comes from `ippc_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use ippc_syntax::parser;
//!
//! let program = parser::parse_program(".IPPcode23\nWRITE string@hello\n").unwrap();
//! assert_eq!(program.instructions.len(), 1);
//! ```
//!
//! ## See also
//! - `ippc_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod classify;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
