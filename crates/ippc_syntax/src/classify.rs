//! Operand classification.
//!
//! Decides what a single raw operand token is, without looking at the instruction it belongs to:
//!
//! 1. `<frame>@<name>` with a known frame prefix is a variable; the name must be an identifier.
//! 2. Any other token containing `@` is a typed constant `<type>@<payload>`, split on the first `@`; the payload
//!    must satisfy the grammar of its type.
//! 3. A token without `@` is a type name when it spells one of the base types, otherwise a label when it is an
//!    identifier.
//!
//! Anything else is rejected. The classifier never coerces: an ill-formed token is an error, not a best guess.
//!
//! ## Examples
//! ```rust
//! use ippc_syntax::ast::Argument;
//! use ippc_syntax::classify::classify;
//!
//! assert!(matches!(classify("GF@counter"), Ok(Argument::Variable(_))));
//! assert!(matches!(classify("int@0x1F"), Ok(Argument::Constant(_))));
//! assert!(matches!(classify("loop_end"), Ok(Argument::Label(_))));
//! assert!(matches!(classify("string"), Ok(Argument::Type(_))));
//! assert!(classify("int@abc").is_err());
//! ```

use miette::Diagnostic;
use thiserror::Error;

use ippc_core::lang::frames;
use ippc_core::lang::operands::OperandRole;
use ippc_core::lang::types::{self, TypeId};
use ippc_core::literals;

use crate::ast::{Argument, Constant, Variable};

/// Why a token is not an acceptable operand.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum OperandError {
    #[error("`{name}` is not a valid variable name")]
    #[diagnostic(
        code(ippc::operand::variable_name),
        help("names start with a letter or one of `_ - $ & % * ! ?`; digits may follow")
    )]
    InvalidVariableName { name: String },

    #[error("unknown operand prefix `{prefix}@`")]
    #[diagnostic(
        code(ippc::operand::unknown_prefix),
        help("variables use a frame prefix (`GF@`, `TF@`, `LF@`); constants use `int@`, `bool@`, `string@` or `nil@`")
    )]
    UnknownPrefix { prefix: String },

    #[error("`{payload}` is not a valid int literal")]
    #[diagnostic(
        code(ippc::operand::int),
        help("write a decimal, `0x` hexadecimal or `0o` octal number, optionally signed")
    )]
    InvalidInt { payload: String },

    #[error("`{payload}` is not a valid bool literal")]
    #[diagnostic(code(ippc::operand::bool), help("a bool constant is `bool@true` or `bool@false`"))]
    InvalidBool { payload: String },

    #[error("`{payload}` is not a valid string literal")]
    #[diagnostic(
        code(ippc::operand::string),
        help("every backslash must start an escape of exactly three decimal digits, e.g. `\\032`")
    )]
    InvalidString { payload: String },

    #[error("`{payload}` is not a valid nil literal")]
    #[diagnostic(code(ippc::operand::nil), help("the only nil constant is `nil@nil`"))]
    InvalidNil { payload: String },

    #[error("`{token}` is neither a variable, a constant, a label nor a type name")]
    #[diagnostic(code(ippc::operand::malformed))]
    InvalidIdentifier { token: String },

    #[error("expected {expected}, found {found}")]
    #[diagnostic(code(ippc::operand::role))]
    RoleMismatch { expected: OperandRole, found: String },
}

/// Classify a raw operand token.
///
/// ## Errors
/// Returns an [`OperandError`] describing the first grammar rule the token violates.
pub fn classify(token: &str) -> Result<Argument, OperandError> {
    let arg = match token.split_once('@') {
        Some((prefix, payload)) => classify_prefixed(prefix, payload)?,
        None => classify_bare(token)?,
    };
    tracing::trace!(token, kind = arg.kind(), "classified operand");
    Ok(arg)
}

/// Classify a token and check that it may fill a position demanding `role`.
///
/// ## Errors
/// - The classification error, when the token is ill-formed.
/// - [`OperandError::RoleMismatch`] when it is well-formed but of the wrong kind.
///
/// ## Examples
/// ```rust
/// use ippc_core::lang::operands::OperandRole;
/// use ippc_syntax::classify::check_role;
///
/// assert!(check_role("LF@x", OperandRole::Symb).is_ok());
/// assert!(check_role("int@1", OperandRole::Var).is_err());
/// ```
pub fn check_role(token: &str, role: OperandRole) -> Result<Argument, OperandError> {
    let arg = classify(token)?;
    if arg.satisfies(role) {
        Ok(arg)
    } else {
        Err(OperandError::RoleMismatch {
            expected: role,
            found: arg.describe(),
        })
    }
}

fn classify_prefixed(prefix: &str, payload: &str) -> Result<Argument, OperandError> {
    if let Some(frame) = frames::from_prefix(prefix) {
        if !literals::is_identifier(payload) {
            return Err(OperandError::InvalidVariableName {
                name: payload.to_string(),
            });
        }
        return Ok(Argument::Variable(Variable {
            frame,
            name: payload.to_string(),
        }));
    }

    let Some(ty) = types::from_str(prefix) else {
        return Err(OperandError::UnknownPrefix {
            prefix: prefix.to_string(),
        });
    };

    let payload = payload.to_string();
    let valid = match ty {
        TypeId::Int => literals::is_int_literal(&payload),
        TypeId::Bool => literals::is_bool_literal(&payload),
        TypeId::String => literals::is_string_literal(&payload),
        TypeId::Nil => literals::is_nil_literal(&payload),
    };
    if !valid {
        return Err(match ty {
            TypeId::Int => OperandError::InvalidInt { payload },
            TypeId::Bool => OperandError::InvalidBool { payload },
            TypeId::String => OperandError::InvalidString { payload },
            TypeId::Nil => OperandError::InvalidNil { payload },
        });
    }
    Ok(Argument::Constant(Constant { ty, value: payload }))
}

fn classify_bare(token: &str) -> Result<Argument, OperandError> {
    if let Some(ty) = types::from_str(token) {
        Ok(Argument::Type(ty))
    } else if literals::is_identifier(token) {
        Ok(Argument::Label(token.to_string()))
    } else {
        Err(OperandError::InvalidIdentifier {
            token: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ippc_core::lang::frames::FrameId;

    fn constant(ty: TypeId, value: &str) -> Argument {
        Argument::Constant(Constant {
            ty,
            value: value.to_string(),
        })
    }

    #[test]
    fn test_variables_in_every_frame() {
        for (token, frame) in [
            ("GF@x", FrameId::Global),
            ("TF@_tmp", FrameId::Temporary),
            ("LF@a-b$c", FrameId::Local),
        ] {
            let Ok(Argument::Variable(v)) = classify(token) else {
                panic!("{token} should classify as a variable");
            };
            assert_eq!(v.frame, frame);
            assert_eq!(format!("{}@{}", frames::prefix(frame), v.name), token);
        }
    }

    #[test]
    fn test_frame_prefix_is_case_sensitive() {
        assert_eq!(
            classify("gf@x"),
            Err(OperandError::UnknownPrefix { prefix: "gf".into() })
        );
    }

    #[test]
    fn test_bad_variable_names() {
        assert!(matches!(classify("GF@"), Err(OperandError::InvalidVariableName { .. })));
        assert!(matches!(classify("GF@1x"), Err(OperandError::InvalidVariableName { .. })));
        assert!(matches!(classify("GF@a@b"), Err(OperandError::InvalidVariableName { .. })));
    }

    #[test]
    fn test_int_constants() {
        for payload in ["42", "0x1F", "0o17", "-7", "+0", "017"] {
            assert_eq!(classify(&format!("int@{payload}")), Ok(constant(TypeId::Int, payload)));
        }
        assert_eq!(classify("int@"), Err(OperandError::InvalidInt { payload: String::new() }));
        assert_eq!(classify("int@abc"), Err(OperandError::InvalidInt { payload: "abc".into() }));
    }

    #[test]
    fn test_bool_and_nil_constants() {
        assert_eq!(classify("bool@true"), Ok(constant(TypeId::Bool, "true")));
        assert_eq!(classify("bool@false"), Ok(constant(TypeId::Bool, "false")));
        assert!(matches!(classify("bool@TRUE"), Err(OperandError::InvalidBool { .. })));
        assert!(matches!(classify("bool@"), Err(OperandError::InvalidBool { .. })));
        assert_eq!(classify("nil@nil"), Ok(constant(TypeId::Nil, "nil")));
        assert!(matches!(classify("nil@"), Err(OperandError::InvalidNil { .. })));
    }

    #[test]
    fn test_string_constants() {
        assert_eq!(classify("string@ab\\050c"), Ok(constant(TypeId::String, "ab\\050c")));
        assert_eq!(classify("string@plain"), Ok(constant(TypeId::String, "plain")));
        assert_eq!(classify("string@"), Ok(constant(TypeId::String, "")));
        assert_eq!(classify("string@a@b"), Ok(constant(TypeId::String, "a@b")));
        assert!(matches!(classify("string@ab\\c"), Err(OperandError::InvalidString { .. })));
    }

    #[test]
    fn test_unknown_constant_prefix() {
        assert_eq!(
            classify("float@1.0"),
            Err(OperandError::UnknownPrefix { prefix: "float".into() })
        );
        assert_eq!(classify("@x"), Err(OperandError::UnknownPrefix { prefix: String::new() }));
    }

    #[test]
    fn test_bare_tokens() {
        assert_eq!(classify("int"), Ok(Argument::Type(TypeId::Int)));
        assert_eq!(classify("nil"), Ok(Argument::Type(TypeId::Nil)));
        assert_eq!(classify("end"), Ok(Argument::Label("end".into())));
        assert_eq!(classify("Int"), Ok(Argument::Label("Int".into())));
        assert!(matches!(classify("9lives"), Err(OperandError::InvalidIdentifier { .. })));
    }

    #[test]
    fn test_check_role() {
        assert!(check_role("GF@x", OperandRole::Var).is_ok());
        assert!(check_role("string@hi", OperandRole::Symb).is_ok());
        assert!(check_role("bool", OperandRole::Type).is_ok());
        assert_eq!(
            check_role("int", OperandRole::Label),
            Err(OperandError::RoleMismatch {
                expected: OperandRole::Label,
                found: "a type name".into(),
            })
        );
        assert_eq!(
            check_role("int@1", OperandRole::Var),
            Err(OperandError::RoleMismatch {
                expected: OperandRole::Var,
                found: "a `int` constant".into(),
            })
        );
    }

    #[test]
    fn test_check_role_reports_malformed_token_first() {
        assert!(matches!(
            check_role("int@x", OperandRole::Var),
            Err(OperandError::InvalidInt { .. })
        ));
    }
}
