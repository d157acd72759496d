//! Base type names.
//!
//! The same four spellings are used as constant prefixes (`int@5`) and as the bare `<type>` operand of `READ`.

use super::registry::{self, LangItemInfo};

/// Stable identifier for a base type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeId {
    Int,
    Bool,
    String,
    Nil,
}

/// Registry of base types.
pub const TYPES: &[LangItemInfo<TypeId>] = &[
    LangItemInfo::new(TypeId::Int, "int", "Signed integer; decimal, hexadecimal or octal literal."),
    LangItemInfo::new(TypeId::Bool, "bool", "Boolean; literal `true` or `false`."),
    LangItemInfo::new(
        TypeId::String,
        "string",
        "String; any non-whitespace characters, with `\\DDD` decimal escapes.",
    ),
    LangItemInfo::new(TypeId::Nil, "nil", "The nil value; literal `nil`."),
];

/// Canonical spelling.
pub fn as_str(id: TypeId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: TypeId) -> &'static LangItemInfo<TypeId> {
    registry::find(TYPES, id).expect("type info missing")
}

/// Lookup by spelling (case-sensitive).
pub fn from_str(s: &str) -> Option<TypeId> {
    registry::find_by_spelling(TYPES, s).map(|t| t.id)
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}
