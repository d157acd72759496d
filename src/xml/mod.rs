//! XML serialization of validated IPPcode23 programs.
//!
//! The document has one `<instruction>` element per instruction, carrying its order number and canonical opcode,
//! and one `<argN>` child per argument whose `type` attribute is [`Argument::kind`] and whose text is
//! [`Argument::text`]:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <program language="IPPcode23">
//! 	<instruction order="1" opcode="DEFVAR">
//! 		<arg1 type="var">GF@x</arg1>
//! 	</instruction>
//! </program>
//! ```
//!
//! Elements without content are written self-closing. String escapes (`\032`) are written as-is; only the XML
//! special characters are escaped.

mod config;
mod writer;

pub use config::XmlConfig;
pub use writer::{XmlWriter, escape_xml};

use std::io;

use miette::Diagnostic;
use thiserror::Error;

use ippc_core::lang::exit_codes::{self, ExitCodeId};
use ippc_core::lang::opcodes;
use ippc_syntax::ast::{Argument, Instruction, Program};

/// Errors produced while serializing a program.
#[derive(Debug, Error, Diagnostic)]
pub enum XmlError {
    #[error("{context}: character {} cannot be represented in XML 1.0", codepoint(.ch))]
    #[diagnostic(
        code(ippc::xml::invalid_character),
        help("use a `\\DDD` escape for control characters in string constants")
    )]
    InvalidCharacter { ch: char, context: String },

    #[error("failed to write XML output")]
    #[diagnostic(code(ippc::xml::io))]
    Io(#[from] io::Error),
}

impl XmlError {
    /// The documented exit status identifier for this error.
    pub fn exit_code_id(&self) -> ExitCodeId {
        match self {
            XmlError::InvalidCharacter { .. } => ExitCodeId::LexicalOrSyntax,
            XmlError::Io(_) => ExitCodeId::OutputOpen,
        }
    }

    /// The numeric process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        exit_codes::code(self.exit_code_id())
    }
}

/// Serialize a program with default settings
pub fn to_xml(program: &Program) -> Result<String, XmlError> {
    to_xml_with_config(program, XmlConfig::default())
}

/// Serialize a program with custom configuration
#[tracing::instrument(skip_all, fields(instructions = program.len()))]
pub fn to_xml_with_config(program: &Program, config: XmlConfig) -> Result<String, XmlError> {
    let mut writer = XmlWriter::new(config);
    render_program(program, &mut writer)?;
    Ok(writer.finish())
}

/// Serialize a program and write it to `out`.
pub fn write_xml<W: io::Write>(program: &Program, config: XmlConfig, out: &mut W) -> Result<(), XmlError> {
    let xml = to_xml_with_config(program, config)?;
    out.write_all(xml.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn render_program(program: &Program, writer: &mut XmlWriter) -> Result<(), XmlError> {
    let language = writer.config().language.clone();
    ensure_xml_chars(&language, || "language attribute".to_string())?;

    if writer.config().declaration {
        writer.declaration();
    }

    let attrs = [("language", language.as_str())];
    if program.is_empty() {
        writer.empty_element("program", &attrs);
        return Ok(());
    }

    writer.start_element("program", &attrs);
    for instruction in program {
        render_instruction(instruction, writer)?;
    }
    writer.end_element("program");
    Ok(())
}

fn render_instruction(instruction: &Instruction, writer: &mut XmlWriter) -> Result<(), XmlError> {
    let order = instruction.order.to_string();
    let attrs = [("order", order.as_str()), ("opcode", opcodes::as_str(instruction.opcode))];
    if instruction.args.is_empty() {
        writer.empty_element("instruction", &attrs);
        return Ok(());
    }

    writer.start_element("instruction", &attrs);
    for (idx, arg) in instruction.args.iter().enumerate() {
        render_argument(idx + 1, arg, instruction.order, writer)?;
    }
    writer.end_element("instruction");
    Ok(())
}

fn render_argument(position: usize, arg: &Argument, order: usize, writer: &mut XmlWriter) -> Result<(), XmlError> {
    let text = arg.text();
    ensure_xml_chars(&text, || format!("instruction {order}, argument {position}"))?;
    writer.text_element(&format!("arg{position}"), &[("type", arg.kind())], &text);
    Ok(())
}

/// Reject characters outside the XML 1.0 `Char` production.
fn ensure_xml_chars(text: &str, context: impl FnOnce() -> String) -> Result<(), XmlError> {
    match text.chars().find(|c| !is_xml_char(*c)) {
        Some(ch) => Err(XmlError::InvalidCharacter { ch, context: context() }),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..)
}

fn codepoint(ch: &char) -> String {
    format!("U+{:04X}", u32::from(*ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ippc_syntax::parser::parse_program;

    fn xml_of(source: &str) -> String {
        let program = parse_program(source).expect("valid program");
        to_xml(&program).expect("serializable program")
    }

    #[test]
    fn test_defvar_move_document() {
        let xml = xml_of(".IPPcode23\nDEFVAR GF@x\nMOVE GF@x int@5\n");
        let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<program language=\"IPPcode23\">\n\
\t<instruction order=\"1\" opcode=\"DEFVAR\">\n\
\t\t<arg1 type=\"var\">GF@x</arg1>\n\
\t</instruction>\n\
\t<instruction order=\"2\" opcode=\"MOVE\">\n\
\t\t<arg1 type=\"var\">GF@x</arg1>\n\
\t\t<arg2 type=\"int\">5</arg2>\n\
\t</instruction>\n\
</program>\n";
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_empty_program_is_self_closing() {
        let xml = xml_of(".IPPcode23\n");
        assert!(xml.ends_with("<program language=\"IPPcode23\"/>\n"));
    }

    #[test]
    fn test_instruction_without_arguments() {
        let xml = xml_of(".IPPcode23\ncreateframe\n");
        assert!(xml.contains("\t<instruction order=\"1\" opcode=\"CREATEFRAME\"/>\n"));
    }

    #[test]
    fn test_string_payload_is_escaped_but_not_decoded() {
        let xml = xml_of(".IPPcode23\nWRITE string@a<b>&\\010\n");
        assert!(xml.contains("<arg1 type=\"string\">a&lt;b&gt;&amp;\\010</arg1>"));
    }

    #[test]
    fn test_without_declaration_and_custom_indent() {
        let program = parse_program(".IPPcode23\nLABEL start\n").expect("valid program");
        let config = XmlConfig::new().with_declaration(false).with_indent("  ");
        let xml = to_xml_with_config(&program, config).expect("serializable program");
        assert_eq!(
            xml,
            "<program language=\"IPPcode23\">\n  <instruction order=\"1\" opcode=\"LABEL\">\n    <arg1 type=\"label\">start</arg1>\n  </instruction>\n</program>\n"
        );
    }

    #[test]
    fn test_control_character_is_rejected() {
        let program = parse_program(".IPPcode23\nWRITE string@a\u{1}b\n").expect("valid program");
        let err = to_xml(&program).expect_err("control character");
        assert!(matches!(err, XmlError::InvalidCharacter { ch: '\u{1}', .. }));
        assert_eq!(err.to_string(), "instruction 1, argument 1: character U+0001 cannot be represented in XML 1.0");
        assert_eq!(err.exit_code(), 23);
    }

    #[test]
    fn test_write_xml_to_buffer() {
        let program = parse_program(".IPPcode23\nBREAK\n").expect("valid program");
        let mut out = Vec::new();
        write_xml(&program, XmlConfig::default(), &mut out).expect("write to buffer");
        assert_eq!(String::from_utf8(out).expect("utf-8"), to_xml(&program).expect("xml"));
    }
}
