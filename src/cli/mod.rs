//! CLI module for `ippc-parse`
//!
//! This module provides the command-line interface of the analyzer.
//!
//! ## Usage
//!
//! - `ippc-parse [FILE]` - Analyze FILE (or standard input) and print the XML representation
//! - `ippc-parse --check [FILE]` - Validate only
//! - `ippc-parse --lex [FILE]` - Print the retained token lines (debug)
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits, using the statuses registered in
//! `ippc_core::lang::exit_codes`.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::panic;
use std::path::PathBuf;
use std::process;
use std::thread;

use clap::Parser;
use clap::error::ErrorKind;

use ippc_core::lang::exit_codes::{self, ExitCodeId};

use crate::version::IPPC_VERSION;
use crate::xml::XmlConfig;
use commands::InputSource;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Exit code for a registered exit status.
    pub fn from_id(id: ExitCodeId) -> Self {
        ExitCode(exit_codes::code(id))
    }
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create an error for a registered exit status.
    pub fn with_id(message: impl Into<String>, id: ExitCodeId) -> Self {
        Self::new(message, ExitCode::from_id(id))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Lexical and syntactic analyzer for IPPcode23
#[derive(Parser, Debug)]
#[command(name = "ippc-parse")]
#[command(version = IPPC_VERSION)]
#[command(about = "Lexical and syntactic analyzer for IPPcode23", long_about = None)]
#[command(
    after_help = "Reads an IPPcode23 program, checks its lexical and syntactic validity and writes its XML representation to standard output."
)]
pub struct Cli {
    /// Source file to analyze (`-` or omitted: standard input)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write the XML document to PATH instead of standard output
    #[arg(short, long, value_name = "PATH", conflicts_with_all = ["check", "lex"])]
    pub output: Option<PathBuf>,

    /// Validate only; report the instruction count on standard error
    #[arg(long, conflicts_with = "lex")]
    pub check: bool,

    /// Print the retained token lines (debug)
    #[arg(long)]
    pub lex: bool,

    /// Indentation string for the XML output (default: one tab)
    #[arg(long, value_name = "STR")]
    pub indent: Option<String>,

    /// Omit the `<?xml ...?>` declaration
    #[arg(long)]
    pub no_declaration: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(clap_exit_code(&e).0);
        }
    };

    match settle(panic::catch_unwind(|| execute(cli))) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the parsed command line and return the exit code.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let input = InputSource::from_arg(cli.file.as_deref());

    if cli.lex {
        return commands::lex_source(&input);
    }
    if cli.check {
        return commands::check_source(&input);
    }

    let mut config = XmlConfig::new().with_declaration(!cli.no_declaration);
    if let Some(indent) = cli.indent {
        config = config.with_indent(indent);
    }
    commands::emit_xml(&input, cli.output.as_deref(), config)
}

/// Turn a command outcome into a result, reporting a panic as an internal error.
fn settle(outcome: thread::Result<CliResult<ExitCode>>) -> CliResult<ExitCode> {
    outcome.unwrap_or_else(|_| {
        Err(CliError::with_id(
            "internal error: the analyzer stopped unexpectedly",
            ExitCodeId::Internal,
        ))
    })
}

/// Exit code for a clap parse failure: help and version succeed, usage errors are parameter errors.
fn clap_exit_code(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::from_id(ExitCodeId::MissingParameter),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::try_parse_from(["ippc-parse", "prog.ippc"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("prog.ippc")));
        assert!(!cli.check && !cli.lex);
    }

    #[test]
    fn test_cli_parse_stdin() {
        let cli = Cli::try_parse_from(["ippc-parse"]).unwrap();
        assert!(cli.file.is_none());
        let cli = Cli::try_parse_from(["ippc-parse", "-"]).unwrap();
        assert_eq!(InputSource::from_arg(cli.file.as_deref()), InputSource::Stdin);
    }

    #[test]
    fn test_cli_parse_output_and_indent() {
        let cli = Cli::try_parse_from(["ippc-parse", "-o", "out.xml", "--indent", "  ", "prog.ippc"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.xml")));
        assert_eq!(cli.indent.as_deref(), Some("  "));
    }

    #[test]
    fn test_cli_debug_flags() {
        let cli = Cli::try_parse_from(["ippc-parse", "--check", "prog.ippc"]).unwrap();
        assert!(cli.check);
        let cli = Cli::try_parse_from(["ippc-parse", "--lex", "prog.ippc"]).unwrap();
        assert!(cli.lex);
    }

    #[test]
    fn test_cli_conflicting_flags_are_parameter_errors() {
        let err = Cli::try_parse_from(["ippc-parse", "--check", "--lex"]).unwrap_err();
        assert_eq!(clap_exit_code(&err), ExitCode(10));
        let err = Cli::try_parse_from(["ippc-parse", "--check", "-o", "x.xml"]).unwrap_err();
        assert_eq!(clap_exit_code(&err), ExitCode(10));
    }

    #[test]
    fn test_cli_unknown_flag_is_parameter_error() {
        let err = Cli::try_parse_from(["ippc-parse", "--frobnicate"]).unwrap_err();
        assert_eq!(clap_exit_code(&err), ExitCode(10));
    }

    #[test]
    fn test_cli_help_and_version_succeed() {
        let err = Cli::try_parse_from(["ippc-parse", "--help"]).unwrap_err();
        assert_eq!(clap_exit_code(&err), ExitCode::SUCCESS);
        let err = Cli::try_parse_from(["ippc-parse", "--version"]).unwrap_err();
        assert_eq!(clap_exit_code(&err), ExitCode::SUCCESS);
    }

    #[test]
    fn test_panicking_command_is_internal_error() {
        let outcome = panic::catch_unwind(|| -> CliResult<ExitCode> { panic!("unreachable state") });
        let err = settle(outcome).unwrap_err();
        assert_eq!(err.exit_code, ExitCode(99));
        assert_eq!(exit_codes::from_code(err.exit_code.0), Some(ExitCodeId::Internal));
    }

    #[test]
    fn test_settle_passes_command_results_through() {
        assert_eq!(settle(Ok(Ok(ExitCode::SUCCESS))).unwrap(), ExitCode::SUCCESS);
        let err = settle(Ok(Err(CliError::with_id("bad input", ExitCodeId::InputOpen)))).unwrap_err();
        assert_eq!(err.exit_code, ExitCode(11));
    }
}
