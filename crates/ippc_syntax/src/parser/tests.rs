#[cfg(test)]
/// Parser unit tests.
///
/// These cover the header rule, each failure kind, and the numbering of instructions across blank and comment
/// lines.
mod tests {
    use super::*;
    use crate::classify::OperandError;
    use crate::diagnostics::ParseErrorKind;
    use ippc_core::lang::frames::FrameId;
    use ippc_core::lang::opcodes::OpcodeId;
    use ippc_core::lang::operands::OperandRole;
    use ippc_core::lang::types::TypeId;

    fn parse_ok(source: &str) -> Program {
        match parse_program(source) {
            Ok(program) => program,
            Err(e) => panic!("expected {source:?} to parse, got: {e}"),
        }
    }

    fn parse_err(source: &str) -> ParseError {
        parse_program(source).expect_err("expected a parse error")
    }

    #[test]
    fn test_defvar_then_move() {
        let program = parse_ok(".IPPcode23\nDEFVAR GF@x\nMOVE GF@x int@5\n");
        assert_eq!(program.len(), 2);

        let defvar = &program.instructions[0];
        assert_eq!(defvar.order, 1);
        assert_eq!(defvar.opcode, OpcodeId::DefVar);
        assert_eq!(defvar.args.len(), 1);
        assert!(matches!(&defvar.args[0], Argument::Variable(v) if v.frame == FrameId::Global && v.name == "x"));

        let mov = &program.instructions[1];
        assert_eq!(mov.order, 2);
        assert_eq!(mov.opcode, OpcodeId::Move);
        assert!(matches!(&mov.args[1], Argument::Constant(c) if c.ty == TypeId::Int && c.value == "5"));
        assert_eq!(mov.line, 3);
    }

    #[test]
    fn test_header_only_program_is_empty() {
        let program = parse_ok(".IPPcode23\n# nothing else\n");
        assert!(program.is_empty());
    }

    #[test]
    fn test_header_may_carry_comment_and_whitespace() {
        let program = parse_ok("# leading comment\n\n   .IPPcode23   # header\nBREAK\n");
        assert_eq!(program.len(), 1);
        assert_eq!(program.instructions[0].line, 4);
    }

    #[test]
    fn test_missing_header() {
        let err = parse_err("DEFVAR GF@x\n");
        assert_eq!(err.kind(), ParseErrorKind::MissingHeader);
        assert_eq!(err.line(), Some(1));
        assert_eq!(err.exit_code(), 21);
    }

    #[test]
    fn test_header_is_case_sensitive_and_alone() {
        assert_eq!(parse_err(".ippcode23\n").kind(), ParseErrorKind::MissingHeader);
        assert_eq!(parse_err(".IPPcode23 BREAK\n").kind(), ParseErrorKind::MissingHeader);
        assert_eq!(parse_err(".IPPcode22\n").kind(), ParseErrorKind::MissingHeader);
    }

    #[test]
    fn test_comment_only_input_is_missing_header() {
        let err = parse_err("# just a comment\n");
        assert_eq!(
            err,
            ParseError::MissingHeader {
                found: None,
                line: None,
                span: None,
            }
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_err(""), ParseError::EmptyInput);
        assert_eq!(parse_err(" \n\t\r\n"), ParseError::EmptyInput);
        assert_eq!(parse_err("").exit_code(), 11);
    }

    #[test]
    fn test_unknown_opcode() {
        let err = parse_err(".IPPcode23\nUNKNOWNOP a\n");
        assert!(matches!(&err, ParseError::UnknownOpcode { opcode, line: 2, .. } if opcode == "UNKNOWNOP"));
        assert_eq!(err.exit_code(), 22);
    }

    #[test]
    fn test_repeated_header_is_an_unknown_opcode() {
        let err = parse_err(".IPPcode23\n.IPPcode23\n");
        assert_eq!(err.kind(), ParseErrorKind::UnknownOpcode);
    }

    #[test]
    fn test_opcode_is_case_insensitive_and_canonicalized() {
        let program = parse_ok(".IPPcode23\ndefVar LF@y\ncreateframe\n");
        assert_eq!(program.instructions[0].opcode, OpcodeId::DefVar);
        assert_eq!(program.instructions[0].to_string(), "DEFVAR LF@y");
        assert_eq!(program.instructions[1].to_string(), "CREATEFRAME");
    }

    #[test]
    fn test_arity_mismatch_beats_operand_validity() {
        let too_few = parse_err(".IPPcode23\nMOVE GF@x\n");
        assert!(matches!(
            too_few,
            ParseError::ArityMismatch {
                opcode: OpcodeId::Move,
                expected: 2,
                found: 1,
                ..
            }
        ));

        // The extra operand is itself ill-formed, but the count is checked first.
        let too_many = parse_err(".IPPcode23\nMOVE GF@x int@1 int@x\n");
        assert_eq!(too_many.kind(), ParseErrorKind::ArityMismatch);

        assert_eq!(parse_err(".IPPcode23\nBREAK now\n").kind(), ParseErrorKind::ArityMismatch);
    }

    #[test]
    fn test_invalid_operand_reports_first_bad_position() {
        let err = parse_err(".IPPcode23\nADD GF@r int@x bool@maybe\n");
        match err {
            ParseError::InvalidOperand {
                token,
                role,
                position,
                opcode,
                line,
                reason,
                ..
            } => {
                assert_eq!(token, "int@x");
                assert_eq!(role, OperandRole::Symb);
                assert_eq!(position, 2);
                assert_eq!(opcode, OpcodeId::Add);
                assert_eq!(line, 2);
                assert!(matches!(reason, OperandError::InvalidInt { .. }));
            }
            other => panic!("expected InvalidOperand, got {other:?}"),
        }
    }

    #[test]
    fn test_role_mismatch_is_invalid_operand() {
        let err = parse_err(".IPPcode23\nDEFVAR int@1\n");
        assert!(matches!(
            err,
            ParseError::InvalidOperand {
                reason: OperandError::RoleMismatch {
                    expected: OperandRole::Var,
                    ..
                },
                ..
            }
        ));
        assert_eq!(err.exit_code(), 23);
    }

    #[test]
    fn test_label_spelled_like_a_type_is_rejected() {
        let err = parse_err(".IPPcode23\nJUMP string\n");
        assert_eq!(err.kind(), ParseErrorKind::InvalidOperand);
        parse_ok(".IPPcode23\nJUMP strings\n");
    }

    #[test]
    fn test_read_takes_a_type_name() {
        let program = parse_ok(".IPPcode23\nREAD GF@x bool\n");
        assert_eq!(program.instructions[0].args[1], Argument::Type(TypeId::Bool));
        assert_eq!(parse_err(".IPPcode23\nREAD GF@x bool@true\n").kind(), ParseErrorKind::InvalidOperand);
    }

    #[test]
    fn test_not_takes_two_operands() {
        parse_ok(".IPPcode23\nNOT GF@r bool@true\n");
        assert_eq!(
            parse_err(".IPPcode23\nNOT GF@r bool@true bool@false\n").kind(),
            ParseErrorKind::ArityMismatch
        );
    }

    #[test]
    fn test_orders_are_gapless_across_blank_and_comment_lines() {
        let program = parse_ok(".IPPcode23\n\n# c\nCREATEFRAME\n\n\nPUSHFRAME # c\n   \nPOPFRAME\n");
        let orders: Vec<usize> = program.iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
        let lines: Vec<usize> = program.iter().map(|i| i.line).collect();
        assert_eq!(lines, vec![4, 7, 9]);
    }

    #[test]
    fn test_hash_inside_string_starts_comment() {
        let program = parse_ok(".IPPcode23\nWRITE string@a#b\n");
        assert_eq!(program.instructions[0].args[0].text(), "a");
    }

    #[test]
    fn test_error_spans_point_at_token() {
        let source = ".IPPcode23\nPUSHS float@1\n";
        let ParseError::InvalidOperand { span, .. } = parse_err(source) else {
            panic!("expected InvalidOperand");
        };
        assert_eq!(&source[span.offset()..span.offset() + span.len()], "float@1");
    }

    #[test]
    fn test_validate_line() {
        let inst = validate_line("CONCAT LF@s string@a string@b").expect("valid line");
        assert_eq!(inst.order, 1);
        assert_eq!(inst.line, 1);
        assert_eq!(inst.args.len(), 3);

        assert_eq!(validate_line("  # comment"), Err(ParseError::EmptyInput));
        assert_eq!(validate_line("").unwrap_err().kind(), ParseErrorKind::EmptyInput);
        assert_eq!(validate_line("FOO").unwrap_err().kind(), ParseErrorKind::UnknownOpcode);
    }
}
