/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, the header check and the per-line instruction validator.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.
/// - Validation is fail-fast: the first violation is returned and no partial program is built.
pub struct Parser<'a> {
    lines: &'a [SourceLine],
    pos: usize,
    instructions: Vec<Instruction>,
}

impl<'a> Parser<'a> {
    /// Create a new parser over retained source lines.
    ///
    /// ## Parameters
    /// - `lines`: Lines produced by `ippc_syntax::lexer`.
    pub fn new(lines: &'a [SourceLine]) -> Self {
        Self {
            lines,
            pos: 0,
            instructions: Vec::new(),
        }
    }

    /// Parse all lines into a [`Program`].
    ///
    /// ## Errors
    /// - [`ParseError::MissingHeader`] when the first line is not the header.
    /// - The first instruction-level error otherwise.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        self.expect_header()?;

        while let Some(line) = self.lines.get(self.pos) {
            self.pos += 1;
            let Some((head, operands)) = line.tokens.split_first() else {
                continue;
            };
            let order = self.instructions.len() + 1;
            let instruction = validate_instruction(line.number, head, operands, order)?;
            tracing::debug!(order, opcode = %instruction.opcode, line = line.number, "validated instruction");
            self.instructions.push(instruction);
        }

        Ok(Program {
            instructions: self.instructions,
        })
    }

    fn expect_header(&mut self) -> Result<(), ParseError> {
        let Some(first) = self.lines.first() else {
            return Err(ParseError::MissingHeader {
                found: None,
                line: None,
                span: None,
            });
        };
        self.pos = 1;

        if is_header(first) {
            Ok(())
        } else {
            Err(ParseError::MissingHeader {
                found: Some(first.normalized()),
                line: Some(first.number),
                span: Some(first.span().into()),
            })
        }
    }
}

/// The header line is exactly one token spelling the marker (case-sensitive).
fn is_header(line: &SourceLine) -> bool {
    matches!(line.tokens.as_slice(), [only] if only.text == HEADER_MARKER)
}

/// Validate one instruction line: opcode, then operand count, then each operand left to right.
fn validate_instruction(
    line: usize,
    head: &Token,
    operands: &[Token],
    order: usize,
) -> Result<Instruction, ParseError> {
    let opcode = opcodes::from_str(&head.text).ok_or_else(|| ParseError::UnknownOpcode {
        opcode: head.text.clone(),
        line,
        span: head.span.into(),
    })?;

    let roles = opcodes::operands(opcode);
    let span = operands.last().map_or(head.span, |last| head.span.merge(last.span));
    if operands.len() != roles.len() {
        return Err(ParseError::ArityMismatch {
            opcode,
            expected: roles.len(),
            found: operands.len(),
            line,
            span: span.into(),
        });
    }

    let args = roles
        .iter()
        .zip(operands)
        .enumerate()
        .map(|(idx, (role, token))| {
            classify::check_role(&token.text, *role).map_err(|reason| ParseError::InvalidOperand {
                token: token.text.clone(),
                role: *role,
                position: idx + 1,
                opcode,
                line,
                span: token.span.into(),
                reason,
            })
        })
        .collect::<Result<Vec<Argument>, ParseError>>()?;

    Ok(Instruction {
        order,
        opcode,
        args,
        line,
        span,
    })
}
