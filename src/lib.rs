#![forbid(unsafe_code)]
//! IPPcode23 lexical and syntactic analyzer
//!
//! Reads an IPPcode23 program, validates every instruction against the opcode table, and serializes the
//! validated program as XML. The syntax work lives in the `ippc_syntax` crate; this crate adds the XML
//! serializer and the `ippc-parse` command line.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: Registry lookups on closed enums (`info_for`) panic only on a missing table entry, which
//!   is a programming error.
//!
//! ## Examples
//! ```rust
//! let program = ippc::parser::parse_program(".IPPcode23\nDEFVAR GF@x\n").unwrap();
//! let xml = ippc::to_xml(&program).unwrap();
//! assert!(xml.contains(r#"<arg1 type="var">GF@x</arg1>"#));
//! ```

pub mod cli;
pub mod frontend;
pub mod version;
pub mod xml;

pub use frontend::ast;
pub use frontend::classify;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;

pub use xml::{XmlConfig, XmlError, to_xml, to_xml_with_config};
