//! Provide the canonical LSL vocabulary and the Python runtime contract shared by the lslpy crates.
//!
//! This crate is intentionally small and dependency-light. It holds the closed sets the code generator
//! dispatches on (types, operators, composite members) together with the spellings that appear in
//! generated Python (annotation names, runtime dispatch functions, helper names).
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no AST types.
//! - The optional `serde` feature derives `Serialize`/`Deserialize` for the closed sets so the syntax crate can
//!   read them straight out of the front end's hand-off document.

pub mod lang;
pub mod runtime;

pub use lang::members::Member;
pub use lang::operators::{AssignOp, BinaryOp, IncDecOp, UnaryOp};
pub use lang::types::LslType;
