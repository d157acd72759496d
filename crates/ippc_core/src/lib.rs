//! Provide the canonical IPPcode23 vocabulary and pure grammar helpers shared by the syntax frontend and tooling.
//!
//! This crate is intentionally small and dependency-free. It contains:
//! - registry tables for opcodes, operand roles, variable frames, base types and process exit codes, and
//! - deterministic literal validators (identifiers, `int`/`bool`/`string`/`nil` payloads).
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no parser-specific types.
//! - The syntax frontend (`ippc_syntax`) owns tokenization, classification and diagnostics; it consults the
//!   registries here instead of matching on spellings.
//!
//! ## Examples
//! ```rust
//! use ippc_core::lang::opcodes::{self, OpcodeId};
//! use ippc_core::literals;
//!
//! assert_eq!(opcodes::from_str("move"), Some(OpcodeId::Move));
//! assert_eq!(opcodes::token_count(OpcodeId::Move), 3);
//! assert!(literals::is_int_literal("0x1F"));
//! ```

pub mod lang;
pub mod literals;
