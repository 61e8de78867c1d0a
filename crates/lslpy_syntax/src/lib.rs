//! Annotated LSL syntax tree consumed by the lslpy code generator.
//!
//! Lexing, parsing, symbol binding, type checking and cast insertion all happen in an external front end. What
//! arrives here is its finished product: a closed, fully-typed tree where every identifier is bound to a symbol
//! with a storage class and every expression knows whether its value is used.
//!
//! - [`ast`]: the tree itself
//! - [`frontend`]: loading the front end's JSON hand-off document

pub mod ast;
pub mod frontend;

pub use ast::*;
pub use frontend::{FrontendDiagnostic, FrontendOutput, LoadError, Severity, load};
