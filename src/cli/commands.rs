//! CLI command implementations
//!
//! All functions return `CliResult<ExitCode>` instead of calling `process::exit`.

use std::fs;
use std::io::{self, Read, Write};

use lslpy_syntax::frontend;

use super::{CliError, CliResult, ExitCode};
use crate::backend::{self, CodegenConfig};

/// Sentinel path selecting stdin (input) or stdout (output).
pub const STDIO_PATH: &str = "-";

/// Maximum accepted input size (100 MB)
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Name used for `path` in diagnostics.
pub fn display_name(path: &str) -> &str {
    if path == STDIO_PATH { "<stdin>" } else { path }
}

/// Read the front end's document from a file or stdin.
///
/// ## Errors
///
/// Returns an error if:
/// - The input cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_input(path: &str) -> CliResult<String> {
    if path == STDIO_PATH {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| CliError::failure(format!("Error reading stdin: {}", e)))?;
        return Ok(source);
    }

    let metadata = fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path, e)))?;
    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Input file '{}' is too large ({} bytes, max {} bytes)",
            path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path, e)))
}

/// Write generated code to a file or stdout.
pub fn write_output(path: &str, code: &str) -> CliResult<()> {
    if path == STDIO_PATH {
        let mut stdout = io::stdout().lock();
        return stdout
            .write_all(code.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| CliError::failure(format!("Error writing stdout: {}", e)));
    }
    fs::write(path, code).map_err(|e| CliError::failure(format!("Couldn't open '{}': {}", path, e)))
}

/// Compile one annotated tree to a Python module.
///
/// The exit code is the number of error diagnostics reported by the front end; code is only generated when it is
/// zero.
#[tracing::instrument(skip(config))]
pub fn compile(input: &str, output: &str, config: &CodegenConfig) -> CliResult<ExitCode> {
    let source = read_input(input)?;
    let name = display_name(input);

    let loaded = frontend::load(&source, name).map_err(|e| CliError::failure(format!("{:?}", miette::Report::new(e))))?;

    for diagnostic in &loaded.diagnostics {
        eprintln!("{}", diagnostic.render(name));
    }

    let errors = loaded.error_count();
    if errors > 0 {
        tracing::debug!(errors, "front end reported errors, skipping generation");
        return Ok(ExitCode::from_error_count(errors));
    }

    let Some(script) = loaded.script else {
        return Err(CliError::failure(format!("{}: no syntax tree to compile", name)));
    };

    let code = backend::generate(&script, config)
        .map_err(|e| CliError::failure(format!("{}: code generation error: {}", name, e)))?;

    write_output(output, &code)?;
    tracing::debug!(bytes = code.len(), "wrote python module");
    Ok(ExitCode::SUCCESS)
}
