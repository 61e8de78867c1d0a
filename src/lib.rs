#![forbid(unsafe_code)]
//! lslpy: LSL to Python compiler backend
//!
//! Translates fully annotated Linden Scripting Language syntax trees into Python modules that run on the `lummao`
//! runtime. Parsing and type checking live in an external front end; this crate provides the code generator
//! (`backend`) and the command-line driver (`cli`).
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Contract breaches**: A tree the front end should never have produced (an `error` type, an assignment to a
//!   builtin) is reported as an [`backend::EmitError`], not a panic.

pub mod backend;
pub mod cli;

pub use lslpy_syntax::ast;
pub use lslpy_syntax::frontend;

pub use backend::{CodegenConfig, EmitError, PythonCodegen, generate};
