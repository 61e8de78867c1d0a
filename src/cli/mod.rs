//! CLI module for lslpy
//!
//! ```text
//! lslpy <INPUT> <OUTPUT> [--indent-width N] [--class-name NAME] [--runtime-module NAME]
//! ```
//!
//! `INPUT` is the front end's annotated-tree document and `OUTPUT` the Python module to write; `-` selects stdin or
//! stdout. Front-end diagnostics are echoed to stderr and the process exits with the number of errors among them.
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::Parser;

use crate::backend::CodegenConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);

    /// Exit code reporting `count` front-end errors.
    pub fn from_error_count(count: usize) -> Self {
        ExitCode(i32::try_from(count).unwrap_or(i32::MAX))
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

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
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

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Compile annotated LSL syntax trees to Python
#[derive(Parser, Debug)]
#[command(name = "lslpy")]
#[command(version = VERSION)]
#[command(about = "Compile annotated LSL syntax trees to Python for the lummao runtime", long_about = None)]
pub struct Cli {
    /// Annotated syntax tree from the LSL front end (`-` for stdin)
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Python module to write (`-` for stdout)
    #[arg(value_name = "OUTPUT")]
    pub output: String,

    /// Spaces per indentation level in the generated code (at least 1)
    #[arg(
        long,
        value_name = "N",
        default_value_t = 4,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub indent_width: usize,

    /// Name of the generated script class
    #[arg(long, value_name = "NAME", default_value = "Script")]
    pub class_name: String,

    /// Runtime module star-imported by the generated code
    #[arg(long, value_name = "NAME", default_value = lslpy_core::runtime::DEFAULT_RUNTIME_MODULE)]
    pub runtime_module: String,
}

impl Cli {
    /// Code generation settings selected on the command line.
    pub fn codegen_config(&self) -> CodegenConfig {
        CodegenConfig::new()
            .with_indent_width(self.indent_width)
            .with_class_name(self.class_name.clone())
            .with_runtime_module(self.runtime_module.clone())
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
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

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.codegen_config();
    commands::compile(&cli.input, &cli.output, &config)
}

// ============================================================================
// Tests
// ============================================================================
