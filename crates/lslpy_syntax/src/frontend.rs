//! Load the front end's hand-off document.
//!
//! The external front end (parser, binder, type checker, desugaring) writes its result as JSON:
//!
//! ```json
//! { "diagnostics": [ { "severity": "error", "message": "...", "line": 3, "column": 7 } ],
//!   "script": { "globals": [], "states": [] } }
//! ```
//!
//! ## Notes
//! - A missing `script` is only acceptable when the front end reported at least one error; generation is skipped
//!   in that case anyway.
//! - Structural problems (bad JSON, unknown node kinds, unknown member names) surface as [`LoadError::Malformed`]
//!   with a labelled span into the named source, so `miette` can render them.

use std::fmt;

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ast::Script;

/// Severity of a front-end finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A finding reported by the front end, with an optional 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendDiagnostic {
    pub severity: Severity,
    pub message: String,
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub column: Option<u32>,
}

impl FrontendDiagnostic {
    /// Render as `<file>:<line>:<column>: <severity>: <message>`, dropping missing position parts.
    pub fn render(&self, file_name: &str) -> String {
        match (self.line, self.column) {
            (Some(line), Some(column)) => {
                format!("{file_name}:{line}:{column}: {}: {}", self.severity, self.message)
            }
            (Some(line), None) => format!("{file_name}:{line}: {}: {}", self.severity, self.message),
            _ => format!("{file_name}: {}: {}", self.severity, self.message),
        }
    }
}

/// Everything the front end hands over.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrontendOutput {
    #[serde(default)]
    pub diagnostics: Vec<FrontendDiagnostic>,
    #[serde(default)]
    pub script: Option<Script>,
}

impl FrontendOutput {
    /// Number of error-severity diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }
}

/// Errors while reading the hand-off document.
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("malformed syntax tree: {message}")]
    #[diagnostic(
        code(lslpy::load::malformed),
        help("the input must be the annotated syntax tree document written by the LSL front end")
    )]
    Malformed {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("the front end reported no errors but produced no script")]
    #[diagnostic(code(lslpy::load::missing_script))]
    MissingScript,
}

/// Parse a hand-off document. `name` is used for diagnostics only.
#[tracing::instrument(skip_all, fields(name = name, source_len = source.len()))]
pub fn load(source: &str, name: &str) -> Result<FrontendOutput, LoadError> {
    let output: FrontendOutput = serde_json::from_str(source).map_err(|err| {
        let offset = byte_offset(source, err.line(), err.column());
        LoadError::Malformed {
            message: strip_position(&err),
            src: NamedSource::new(name, source.to_string()),
            span: offset.into(),
        }
    })?;

    if output.script.is_none() && output.error_count() == 0 {
        return Err(LoadError::MissingScript);
    }

    tracing::debug!(
        diagnostics = output.diagnostics.len(),
        errors = output.error_count(),
        "loaded front-end output"
    );
    Ok(output)
}

/// Convert serde_json's 1-based line/column into a byte offset, clamped to the source length.
fn byte_offset(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

/// serde_json appends " at line X column Y" to its messages; the span already carries that.
fn strip_position(err: &serde_json::Error) -> String {
    let message = err.to_string();
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message,
    }
}
