//! Define the opcode vocabulary and grammar table for IPPcode23.
//!
//! This module is the single source of truth for instructions: a stable identifier ([`OpcodeId`]) plus a const
//! metadata table ([`OPCODES`]) that records the canonical spelling, the ordered operand roles, a category and a
//! short description.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-insensitive**; canonical spellings are upper case.
//! - The operand list fully determines arity: an instruction line has exactly `operands.len() + 1` tokens.
//! - The instruction set is closed; there is no runtime registration.
//!
//! ## Examples
//! ```rust
//! use ippc_core::lang::opcodes::{self, OpcodeId};
//! use ippc_core::lang::operands::OperandRole;
//!
//! assert_eq!(opcodes::from_str("defvar"), Some(OpcodeId::DefVar));
//! assert_eq!(opcodes::as_str(OpcodeId::DefVar), "DEFVAR");
//! assert_eq!(opcodes::operands(OpcodeId::Read), &[OperandRole::Var, OperandRole::Type]);
//! assert_eq!(opcodes::token_count(OpcodeId::Return), 1);
//! ```

use super::operands::OperandRole;

/// Stable identifier for every opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpcodeId {
    // Frames and function calls
    Move,
    CreateFrame,
    PushFrame,
    PopFrame,
    DefVar,
    Call,
    Return,

    // Data stack
    Pushs,
    Pops,

    // Arithmetic, relational, boolean and conversion
    Add,
    Sub,
    Mul,
    IDiv,
    Lt,
    Gt,
    Eq,
    And,
    Or,
    Not,
    Int2Char,
    Stri2Int,

    // Input / output
    Read,
    Write,

    // Strings
    Concat,
    Strlen,
    GetChar,
    SetChar,

    // Types
    Type,

    // Control flow
    Label,
    Jump,
    JumpIfEq,
    JumpIfNeq,
    Exit,

    // Debugging
    DPrint,
    Break,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not influence validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpcodeCategory {
    Frames,
    DataStack,
    Arithmetic,
    Relational,
    Boolean,
    Conversion,
    InputOutput,
    Strings,
    Types,
    ControlFlow,
    Debugging,
}

/// Metadata for an opcode.
///
/// ## Notes
/// - `canonical` is the upper-case spelling written to the serialized program.
/// - `operands` is the ordered list of roles, one per argument position.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    pub id: OpcodeId,
    pub canonical: &'static str,
    pub operands: &'static [OperandRole],
    pub category: OpcodeCategory,
    pub description: &'static str,
}

// Operand shapes shared by several opcodes.
const NONE: &[OperandRole] = &[];
const VAR: &[OperandRole] = &[OperandRole::Var];
const LABEL: &[OperandRole] = &[OperandRole::Label];
const SYMB: &[OperandRole] = &[OperandRole::Symb];
const VAR_SYMB: &[OperandRole] = &[OperandRole::Var, OperandRole::Symb];
const VAR_TYPE: &[OperandRole] = &[OperandRole::Var, OperandRole::Type];
const VAR_SYMB_SYMB: &[OperandRole] = &[OperandRole::Var, OperandRole::Symb, OperandRole::Symb];
const LABEL_SYMB_SYMB: &[OperandRole] = &[OperandRole::Label, OperandRole::Symb, OperandRole::Symb];

/// Registry of all opcodes.
///
/// ## Notes
/// - The ordering follows the language reference grouping; it is not semantically meaningful.
pub const OPCODES: &[OpcodeInfo] = &[
    // Frames and function calls
    info(
        OpcodeId::Move,
        "MOVE",
        VAR_SYMB,
        OpcodeCategory::Frames,
        "Copy the value of a symbol into a variable.",
    ),
    info(
        OpcodeId::CreateFrame,
        "CREATEFRAME",
        NONE,
        OpcodeCategory::Frames,
        "Create a fresh temporary frame, discarding the previous one.",
    ),
    info(
        OpcodeId::PushFrame,
        "PUSHFRAME",
        NONE,
        OpcodeCategory::Frames,
        "Move the temporary frame onto the local frame stack.",
    ),
    info(
        OpcodeId::PopFrame,
        "POPFRAME",
        NONE,
        OpcodeCategory::Frames,
        "Move the top local frame back into the temporary frame.",
    ),
    info(
        OpcodeId::DefVar,
        "DEFVAR",
        VAR,
        OpcodeCategory::Frames,
        "Define an uninitialised variable.",
    ),
    info(
        OpcodeId::Call,
        "CALL",
        LABEL,
        OpcodeCategory::Frames,
        "Save the return position and jump to a label.",
    ),
    info(
        OpcodeId::Return,
        "RETURN",
        NONE,
        OpcodeCategory::Frames,
        "Jump back to the position saved by the matching CALL.",
    ),
    // Data stack
    info(
        OpcodeId::Pushs,
        "PUSHS",
        SYMB,
        OpcodeCategory::DataStack,
        "Push the value of a symbol onto the data stack.",
    ),
    info(
        OpcodeId::Pops,
        "POPS",
        VAR,
        OpcodeCategory::DataStack,
        "Pop the data stack into a variable.",
    ),
    // Arithmetic
    info(
        OpcodeId::Add,
        "ADD",
        VAR_SYMB_SYMB,
        OpcodeCategory::Arithmetic,
        "Integer addition.",
    ),
    info(
        OpcodeId::Sub,
        "SUB",
        VAR_SYMB_SYMB,
        OpcodeCategory::Arithmetic,
        "Integer subtraction.",
    ),
    info(
        OpcodeId::Mul,
        "MUL",
        VAR_SYMB_SYMB,
        OpcodeCategory::Arithmetic,
        "Integer multiplication.",
    ),
    info(
        OpcodeId::IDiv,
        "IDIV",
        VAR_SYMB_SYMB,
        OpcodeCategory::Arithmetic,
        "Integer division.",
    ),
    // Relational
    info(
        OpcodeId::Lt,
        "LT",
        VAR_SYMB_SYMB,
        OpcodeCategory::Relational,
        "Less-than comparison of two values of the same type.",
    ),
    info(
        OpcodeId::Gt,
        "GT",
        VAR_SYMB_SYMB,
        OpcodeCategory::Relational,
        "Greater-than comparison of two values of the same type.",
    ),
    info(
        OpcodeId::Eq,
        "EQ",
        VAR_SYMB_SYMB,
        OpcodeCategory::Relational,
        "Equality comparison; `nil` compares with any type.",
    ),
    // Boolean
    info(
        OpcodeId::And,
        "AND",
        VAR_SYMB_SYMB,
        OpcodeCategory::Boolean,
        "Logical conjunction.",
    ),
    info(
        OpcodeId::Or,
        "OR",
        VAR_SYMB_SYMB,
        OpcodeCategory::Boolean,
        "Logical disjunction.",
    ),
    info(
        OpcodeId::Not,
        "NOT",
        VAR_SYMB,
        OpcodeCategory::Boolean,
        "Logical negation.",
    ),
    // Conversion
    info(
        OpcodeId::Int2Char,
        "INT2CHAR",
        VAR_SYMB,
        OpcodeCategory::Conversion,
        "Convert a Unicode code point to a one-character string.",
    ),
    info(
        OpcodeId::Stri2Int,
        "STRI2INT",
        VAR_SYMB_SYMB,
        OpcodeCategory::Conversion,
        "Code point of the character at an index of a string.",
    ),
    // Input / output
    info(
        OpcodeId::Read,
        "READ",
        VAR_TYPE,
        OpcodeCategory::InputOutput,
        "Read a value of the given type from standard input.",
    ),
    info(
        OpcodeId::Write,
        "WRITE",
        SYMB,
        OpcodeCategory::InputOutput,
        "Write the value of a symbol to standard output.",
    ),
    // Strings
    info(
        OpcodeId::Concat,
        "CONCAT",
        VAR_SYMB_SYMB,
        OpcodeCategory::Strings,
        "Concatenate two strings.",
    ),
    info(
        OpcodeId::Strlen,
        "STRLEN",
        VAR_SYMB,
        OpcodeCategory::Strings,
        "Length of a string in characters.",
    ),
    info(
        OpcodeId::GetChar,
        "GETCHAR",
        VAR_SYMB_SYMB,
        OpcodeCategory::Strings,
        "Character at an index of a string.",
    ),
    info(
        OpcodeId::SetChar,
        "SETCHAR",
        VAR_SYMB_SYMB,
        OpcodeCategory::Strings,
        "Replace the character at an index of a string variable.",
    ),
    // Types
    info(
        OpcodeId::Type,
        "TYPE",
        VAR_SYMB,
        OpcodeCategory::Types,
        "Name of the dynamic type of a symbol.",
    ),
    // Control flow
    info(
        OpcodeId::Label,
        "LABEL",
        LABEL,
        OpcodeCategory::ControlFlow,
        "Mark a position in the program.",
    ),
    info(
        OpcodeId::Jump,
        "JUMP",
        LABEL,
        OpcodeCategory::ControlFlow,
        "Unconditional jump to a label.",
    ),
    info(
        OpcodeId::JumpIfEq,
        "JUMPIFEQ",
        LABEL_SYMB_SYMB,
        OpcodeCategory::ControlFlow,
        "Jump to a label when two symbols are equal.",
    ),
    info(
        OpcodeId::JumpIfNeq,
        "JUMPIFNEQ",
        LABEL_SYMB_SYMB,
        OpcodeCategory::ControlFlow,
        "Jump to a label when two symbols differ.",
    ),
    info(
        OpcodeId::Exit,
        "EXIT",
        SYMB,
        OpcodeCategory::ControlFlow,
        "Terminate the program with an integer status.",
    ),
    // Debugging
    info(
        OpcodeId::DPrint,
        "DPRINT",
        SYMB,
        OpcodeCategory::Debugging,
        "Write the value of a symbol to standard error.",
    ),
    info(
        OpcodeId::Break,
        "BREAK",
        NONE,
        OpcodeCategory::Debugging,
        "Dump interpreter state to standard error.",
    ),
];

/// Canonical (upper-case) spelling.
///
/// ## Parameters
/// - `id`: Opcode identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: OpcodeId) -> &'static str {
    info_for(id).canonical
}

/// Ordered operand roles.
///
/// ## Parameters
/// - `id`: Opcode identifier.
///
/// ## Returns
/// - One [`OperandRole`] per argument position (possibly empty).
pub fn operands(id: OpcodeId) -> &'static [OperandRole] {
    info_for(id).operands
}

/// Required token count for an instruction line, including the opcode itself.
pub fn token_count(id: OpcodeId) -> usize {
    operands(id).len() + 1
}

/// Category.
pub fn category(id: OpcodeId) -> OpcodeCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Parameters
/// - `id`: Opcode identifier.
///
/// ## Returns
/// - The associated [`OpcodeInfo`] from [`OPCODES`].
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OpcodeId) -> &'static OpcodeInfo {
    OPCODES.iter().find(|o| o.id == id).expect("opcode info missing")
}

/// Lookup by spelling.
///
/// ## Parameters
/// - `s`: Candidate opcode spelling, in any letter case.
///
/// ## Returns
/// - `Some(OpcodeId)` if the spelling names an opcode, `None` otherwise.
///
/// ## Notes
/// - Matching is **ASCII case-insensitive**: `move`, `Move` and `MOVE` all resolve to [`OpcodeId::Move`].
pub fn from_str(s: &str) -> Option<OpcodeId> {
    OPCODES.iter().find(|o| o.canonical.eq_ignore_ascii_case(s)).map(|o| o.id)
}

impl std::fmt::Display for OpcodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: OpcodeId,
    canonical: &'static str,
    operands: &'static [OperandRole],
    category: OpcodeCategory,
    description: &'static str,
) -> OpcodeInfo {
    OpcodeInfo {
        id,
        canonical,
        operands,
        category,
        description,
    }
}
