//! Python code emitter - builds Python source text with indentation tracking
//!
//! Python has no block delimiters, so indentation *is* structure here. The emitter only knows the current depth;
//! nesting is managed by the codegen, which saves and restores the depth around every nested body.

use std::borrow::Cow;
use std::fmt::Write;

use lslpy_core::lang::python_names;

/// A buffer for building Python source code with proper indentation
#[derive(Debug)]
pub struct PythonEmitter {
    buffer: String,
    indent_level: usize,
    indent_str: String,
}

impl Default for PythonEmitter {
    fn default() -> Self {
        Self::new(4)
    }
}

impl PythonEmitter {
    /// Create an emitter indenting with `indent_width` spaces per level.
    pub fn new(indent_width: usize) -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent_str: " ".repeat(indent_width),
        }
    }

    /// Get the generated code
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write text without newline
    pub fn write(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    /// Write formatted text
    pub fn writef(&mut self, args: std::fmt::Arguments<'_>) {
        let _ = self.buffer.write_fmt(args);
    }

    /// End the current line (or write an empty one). Never indented.
    pub fn newline(&mut self) {
        self.buffer.push('\n');
    }

    /// Write indentation only
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.indent_str);
        }
    }

    /// Current indentation depth
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Replace the indentation depth. Nesting saves the current depth and restores it afterwards.
    pub fn set_indent_level(&mut self, level: usize) {
        self.indent_level = level;
    }
}

/// Convert a user identifier to a Python identifier that cannot clash with syntax or runtime names
pub fn to_python_ident(name: &str) -> Cow<'_, str> {
    python_names::escape_identifier(name)
}
