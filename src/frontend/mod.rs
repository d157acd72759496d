//! IPPcode23 frontend
//!
//! This module re-exports the frontend components:
//! - `lexer`: line tokenization (comments, whitespace, blank lines)
//! - `classify`: operand classification
//! - `parser`: header check, instruction validation and program assembly
//! - `ast`: the validated program model
//! - `diagnostics`: parse errors and their exit statuses

// Syntax components are provided by the shared ippc_syntax crate.
pub use ippc_syntax::{ast, classify, diagnostics, lexer, parser};
