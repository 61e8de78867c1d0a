//! LSL language vocabulary registries.
//!
//! Callers work with **stable IDs** (`LslType`, `BinaryOp`, `Member`, ...) and look up Python and
//! runtime names through these tables instead of scattering string checks across the generator.
//!
//! ## Examples
//! ```rust
//! use lslpy_core::lang::operators::BinaryOp;
//! use lslpy_core::lang::types::LslType;
//!
//! assert_eq!(BinaryOp::Add.dispatch_name(), "radd");
//! assert_eq!(LslType::Quaternion.python_name(), "Quaternion");
//! ```

pub mod members;
pub mod operators;
pub mod python_names;
pub mod types;
