//! Operand roles: the category a grammar-table position demands.
//!
//! ## Notes
//! - `Symb` (“symbol”) accepts either a variable reference or a typed constant.
//! - Spellings are the lower-case names used in diagnostics (`expected <symb>`).

use super::registry::{self, LangItemInfo};

/// Stable identifier for an operand role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandRole {
    Var,
    Symb,
    Label,
    Type,
}

/// Registry of operand roles.
pub const OPERAND_ROLES: &[LangItemInfo<OperandRole>] = &[
    LangItemInfo::new(OperandRole::Var, "var", "A variable reference such as `GF@counter`."),
    LangItemInfo::new(
        OperandRole::Symb,
        "symb",
        "A variable reference or a typed constant such as `int@5` or `string@hello`.",
    ),
    LangItemInfo::new(OperandRole::Label, "label", "A label name used as a jump or call target."),
    LangItemInfo::new(OperandRole::Type, "type", "A base type name: `int`, `bool`, `string` or `nil`."),
];

/// Canonical spelling.
pub fn as_str(id: OperandRole) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperandRole) -> &'static LangItemInfo<OperandRole> {
    registry::find(OPERAND_ROLES, id).expect("operand role info missing")
}

/// Lookup by spelling (case-sensitive).
pub fn from_str(s: &str) -> Option<OperandRole> {
    registry::find_by_spelling(OPERAND_ROLES, s).map(|r| r.id)
}

impl std::fmt::Display for OperandRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", as_str(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_round_trip() {
        for role in OPERAND_ROLES {
            assert_eq!(from_str(role.canonical), Some(role.id));
        }
    }

    #[test]
    fn test_display_uses_angle_brackets() {
        assert_eq!(OperandRole::Symb.to_string(), "<symb>");
        assert_eq!(OperandRole::Label.to_string(), "<label>");
    }
}
