//! lslpy backend
//!
//! This module turns an annotated LSL syntax tree into Python source for the `lummao` runtime.
//!
//! The pipeline is:
//! 1. Annotated AST from the front end (`lslpy_syntax`) → `PythonCodegen` → Python module text
//! 2. The caller writes the text wherever it wants; nothing here touches the filesystem
//!
//! ## Module Organization
//!
//! - `codegen/` - Code generation from AST to Python
//!   - `mod.rs` - `PythonCodegen`, `EmitError` and the `generate` entry point
//!   - `declarations.rs` - class, `__init__` and method scaffolding
//!   - `statements.rs` - statement emission and loop lowering
//!   - `expressions.rs` - expression emission
//!   - `literals.rs` - float and string literal encoding
//! - `python_emitter.rs` - Low-level Python code string builder
//! - `config.rs` - `CodegenConfig`

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod codegen;
pub mod config;
pub mod python_emitter;

pub use codegen::{EmitError, PythonCodegen, generate};
pub use config::CodegenConfig;
