//! Process exit statuses documented by the `ippc-parse` shell.
//!
//! The values are part of the external contract: test harnesses compare them numerically, so they must never
//! change once published.
//!
//! ## Examples
//! ```rust
//! use ippc_core::lang::exit_codes::{self, ExitCodeId};
//!
//! assert_eq!(exit_codes::code(ExitCodeId::MissingHeader), 21);
//! assert_eq!(exit_codes::from_code(22), Some(ExitCodeId::BadOpcode));
//! ```

/// Stable identifier for an exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitCodeId {
    Success,
    MissingParameter,
    InputOpen,
    OutputOpen,
    MissingHeader,
    BadOpcode,
    LexicalOrSyntax,
    Internal,
}

/// Metadata for an exit status.
#[derive(Debug, Clone, Copy)]
pub struct ExitCodeInfo {
    pub id: ExitCodeId,
    pub code: i32,
    pub canonical: &'static str,
    pub description: &'static str,
}

/// Registry of exit statuses, in ascending numeric order.
pub const EXIT_CODES: &[ExitCodeInfo] = &[
    info(ExitCodeId::Success, 0, "success", "The program was valid and the output was written."),
    info(
        ExitCodeId::MissingParameter,
        10,
        "missing-parameter",
        "A command-line parameter is missing, unknown or used in a forbidden combination.",
    ),
    info(
        ExitCodeId::InputOpen,
        11,
        "input-open",
        "The input could not be opened or read, or it was empty.",
    ),
    info(ExitCodeId::OutputOpen, 12, "output-open", "The output could not be opened or written."),
    info(
        ExitCodeId::MissingHeader,
        21,
        "missing-header",
        "The first content line is not the `.IPPcode23` header.",
    ),
    info(ExitCodeId::BadOpcode, 22, "bad-opcode", "An unknown or malformed opcode was found."),
    info(
        ExitCodeId::LexicalOrSyntax,
        23,
        "lexical-or-syntax",
        "Any other lexical or syntactic error: wrong operand count or an ill-formed operand.",
    ),
    info(ExitCodeId::Internal, 99, "internal", "An unexpected internal error."),
];

/// Numeric process status for `id`.
pub fn code(id: ExitCodeId) -> i32 {
    info_for(id).code
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: ExitCodeId) -> &'static ExitCodeInfo {
    EXIT_CODES.iter().find(|e| e.id == id).expect("exit code info missing")
}

/// Reverse lookup by numeric status.
pub fn from_code(code: i32) -> Option<ExitCodeId> {
    EXIT_CODES.iter().find(|e| e.code == code).map(|e| e.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: ExitCodeId, code: i32, canonical: &'static str, description: &'static str) -> ExitCodeInfo {
    ExitCodeInfo {
        id,
        code,
        canonical,
        description,
    }
}
