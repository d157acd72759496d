/// Parse a complete IPPcode23 source text into a [`Program`].
///
/// This is the main public entrypoint: empty-input check, tokenization, header check, then validation of every
/// instruction line in source order.
///
/// ## Errors
/// - [`ParseError::EmptyInput`] when `source` is empty or only whitespace.
/// - Otherwise the first [`ParseError`] encountered.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_program(source: &str) -> Result<Program, ParseError> {
    if source.chars().all(lexer::is_separator) {
        return Err(ParseError::EmptyInput);
    }

    let lines = lexer::lex(source);
    let program = Parser::new(&lines).parse()?;
    tracing::debug!(instructions = program.len(), "parsed program");
    Ok(program)
}

/// Validate a single instruction line in isolation, without a header.
///
/// Only the first retained line of `line` is examined; the instruction gets order number 1.
///
/// ## Errors
/// - [`ParseError::EmptyInput`] when the text has no content after comment removal.
/// - [`ParseError::UnknownOpcode`], [`ParseError::ArityMismatch`] or [`ParseError::InvalidOperand`].
///
/// ## Examples
/// ```rust
/// use ippc_syntax::parser::validate_line;
///
/// let inst = validate_line("jumpifeq end GF@x nil@nil # compare").unwrap();
/// assert_eq!(inst.to_string(), "JUMPIFEQ end GF@x nil@nil");
/// assert!(validate_line("MOVE GF@x").is_err());
/// ```
#[tracing::instrument(skip_all, fields(line_len = line.len()))]
pub fn validate_line(line: &str) -> Result<Instruction, ParseError> {
    let lines = lexer::lex(line);
    let Some(first) = lines.first() else {
        return Err(ParseError::EmptyInput);
    };
    let Some((head, operands)) = first.tokens.split_first() else {
        return Err(ParseError::EmptyInput);
    };
    validate_instruction(first.number, head, operands, 1)
}
