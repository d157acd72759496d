//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use miette::{NamedSource, Report};

use ippc_core::lang::exit_codes::ExitCodeId;

use crate::frontend::ast::Program;
use crate::frontend::diagnostics::ParseError;
use crate::frontend::{lexer, parser};
use crate::xml::{self, XmlConfig, XmlError};

use super::{CliError, CliResult, ExitCode};

/// Maximum source size accepted (100 MiB).
pub const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Where the program text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Interpret the positional FILE argument: absent or `-` means standard input.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => InputSource::File(path.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }

    /// Name used in diagnostics.
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Read the whole program text.
///
/// # Errors
///
/// Returns an input error (exit status 11) if:
/// - The input cannot be opened or read, or is not valid UTF-8
/// - The input exceeds `MAX_SOURCE_SIZE` (100 MiB)
pub fn read_source(input: &InputSource) -> CliResult<String> {
    let source = match input {
        InputSource::File(path) => {
            let metadata = fs::metadata(path)
                .map_err(|e| input_error(format!("Cannot access file '{}': {}", path.display(), e)))?;
            if metadata.len() > MAX_SOURCE_SIZE {
                return Err(too_large(input, metadata.len()));
            }
            fs::read_to_string(path)
                .map_err(|e| input_error(format!("Error reading file '{}': {}", path.display(), e)))?
        }
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .lock()
                .take(MAX_SOURCE_SIZE + 1)
                .read_to_string(&mut buf)
                .map_err(|e| input_error(format!("Error reading standard input: {}", e)))?;
            if buf.len() as u64 > MAX_SOURCE_SIZE {
                return Err(too_large(input, buf.len() as u64));
            }
            buf
        }
    };

    tracing::debug!(input = %input.name(), bytes = source.len(), "read source");
    Ok(source)
}

/// Parse the input into a validated program, rendering any error as a diagnostic report.
pub fn parse_input(input: &InputSource) -> CliResult<Program> {
    let source = read_source(input)?;
    parser::parse_program(&source).map_err(|e| parse_error(&input.name(), &source, e))
}

/// Analyze the input and write its XML representation.
pub fn emit_xml(input: &InputSource, output: Option<&Path>, config: XmlConfig) -> CliResult<ExitCode> {
    let program = parse_input(input)?;

    match output {
        Some(path) => {
            let document = xml::to_xml_with_config(&program, config).map_err(xml_error)?;
            fs::write(path, document).map_err(|e| {
                CliError::with_id(
                    format!("Cannot write output file '{}': {}", path.display(), e),
                    ExitCodeId::OutputOpen,
                )
            })?;
        }
        None => write_program(&program, config, &mut io::stdout().lock())?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Serialize a validated program into `out`. Nothing is written when serialization fails.
pub fn write_program<W: Write>(program: &Program, config: XmlConfig, out: &mut W) -> CliResult<()> {
    xml::write_xml(program, config, out).map_err(xml_error)
}

/// Validate the input without producing XML.
pub fn check_source(input: &InputSource) -> CliResult<ExitCode> {
    let program = parse_input(input)?;
    eprintln!("ok: {} instructions", program.len());
    Ok(ExitCode::SUCCESS)
}

/// Tokenize and display the retained lines (debug).
pub fn lex_source(input: &InputSource) -> CliResult<ExitCode> {
    let source = read_source(input)?;
    for line in lexer::lex(&source) {
        println!("{}: {}", line.number, line.normalized());
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Error rendering
// ============================================================================

fn input_error(message: String) -> CliError {
    CliError::with_id(message, ExitCodeId::InputOpen)
}

fn too_large(input: &InputSource, size: u64) -> CliError {
    input_error(format!(
        "Source '{}' is too large ({} bytes, max {} bytes)",
        input.name(),
        size,
        MAX_SOURCE_SIZE
    ))
}

/// Render a parse error as a `miette` report pointing into the source.
fn parse_error(name: &str, source: &str, err: ParseError) -> CliError {
    let exit_code = ExitCode(err.exit_code());
    let report = Report::new(err).with_source_code(NamedSource::new(name, source.to_string()));
    CliError::new(format!("{report:?}"), exit_code)
}

fn xml_error(err: XmlError) -> CliError {
    let exit_code = ExitCode(err.exit_code());
    CliError::new(format!("{:?}", Report::new(err)), exit_code)
}
