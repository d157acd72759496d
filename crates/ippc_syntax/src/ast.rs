//! Structured representation of a validated IPPcode23 program.
//!
//! A [`Program`] is an ordered list of [`Instruction`]s; each instruction owns its typed [`Argument`]s. The model
//! is build-once: the parser assembles it and nothing mutates it afterwards.

use std::fmt;

use ippc_core::lang::frames::{self, FrameId};
use ippc_core::lang::opcodes::{self, OpcodeId};
use ippc_core::lang::operands::{self, OperandRole};
use ippc_core::lang::types::{self, TypeId};

/// Source location span (byte offsets into the original source text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start..span.end).into()
    }
}

/// A validated program: instructions in source order.
///
/// ## Notes
/// - `instructions[i].order == i + 1` for every instruction (gapless, 1-based).
/// - A program consisting of only the header line has no instructions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

/// A single validated instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// 1-based position among the program's instructions.
    pub order: usize,
    pub opcode: OpcodeId,
    /// One argument per operand role of `opcode`, in order.
    pub args: Vec<Argument>,
    /// 1-based physical line number in the source text.
    pub line: usize,
    /// Span of the instruction's tokens (opcode through last operand).
    pub span: Span,
}

impl fmt::Display for Instruction {
    /// Formats the instruction in source syntax: `MOVE GF@x int@5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(opcodes::as_str(self.opcode))?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// A variable reference: `<frame>@<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    pub frame: FrameId,
    pub name: String,
}

/// A typed constant: `<type>@<payload>`, the payload kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constant {
    pub ty: TypeId,
    pub value: String,
}

/// A classified operand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Argument {
    Variable(Variable),
    Constant(Constant),
    Label(String),
    Type(TypeId),
}

impl Argument {
    /// Serialized kind name: `var`, `label`, `type`, or the constant's base type name.
    pub fn kind(&self) -> &'static str {
        match self {
            Argument::Variable(_) => operands::as_str(OperandRole::Var),
            Argument::Constant(c) => types::as_str(c.ty),
            Argument::Label(_) => operands::as_str(OperandRole::Label),
            Argument::Type(_) => operands::as_str(OperandRole::Type),
        }
    }

    /// Serialized text: the whole token, except constants which keep only their payload.
    pub fn text(&self) -> String {
        match self {
            Argument::Variable(v) => format!("{}@{}", frames::prefix(v.frame), v.name),
            Argument::Constant(c) => c.value.clone(),
            Argument::Label(name) => name.clone(),
            Argument::Type(ty) => types::as_str(*ty).to_string(),
        }
    }

    /// Whether this argument may fill a position that demands `role`.
    pub fn satisfies(&self, role: OperandRole) -> bool {
        matches!(
            (role, self),
            (OperandRole::Var, Argument::Variable(_))
                | (OperandRole::Symb, Argument::Variable(_) | Argument::Constant(_))
                | (OperandRole::Label, Argument::Label(_))
                | (OperandRole::Type, Argument::Type(_))
        )
    }

    /// Human-readable category used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Argument::Variable(_) => "a variable".to_string(),
            Argument::Constant(c) => format!("a `{}` constant", types::as_str(c.ty)),
            Argument::Label(_) => "a label".to_string(),
            Argument::Type(_) => "a type name".to_string(),
        }
    }
}

impl fmt::Display for Argument {
    /// Reproduces the source token byte-for-byte.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Constant(c) => write!(f, "{}@{}", types::as_str(c.ty), c.value),
            other => f.write_str(&other.text()),
        }
    }
}
