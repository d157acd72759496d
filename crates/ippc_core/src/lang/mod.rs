//! IPPcode23 language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: opcodes, operand roles, variable frames, base
//! type names, and the process exit codes that the command-line shell documents.
//!
//! The design goal is to avoid stringly-typed checks scattered across the tokenizer/validator/serializer.
//! Instead, callers work with **stable IDs** (e.g. `OpcodeId`, `FrameId`) and look up spellings/metadata via
//! registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The validator enforces syntax; registries provide spellings, arities and metadata for shared use
//!   (diagnostics, docs, serialization).
//!
//! ## Examples
//! ```rust
//! use ippc_core::lang::opcodes::{self, OpcodeId};
//! use ippc_core::lang::operands::OperandRole;
//!
//! assert_eq!(opcodes::from_str("JUMPIFEQ"), Some(OpcodeId::JumpIfEq));
//! assert_eq!(
//!     opcodes::operands(OpcodeId::JumpIfEq),
//!     &[OperandRole::Label, OperandRole::Symb, OperandRole::Symb]
//! );
//! ```
//!
//! ## See also
//! - `cargo run -p ippc_core --bin generate_lang_reference` to generate a Markdown reference table.

pub mod exit_codes;
pub mod frames;
pub mod opcodes;
pub mod operands;
pub mod registry;
pub mod types;

/// Name of the language, as written into the serialized program.
pub const LANGUAGE_NAME: &str = "IPPcode23";

/// The mandatory first content line of every source program.
///
/// ## Notes
/// - The comparison is exact and case-sensitive.
pub const HEADER_MARKER: &str = ".IPPcode23";
