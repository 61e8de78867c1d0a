//! The fixed LSL type universe.
//!
//! Every expression and symbol handed to the generator carries one of these tags. The table below is the single
//! source of truth for how a tag is spelled in LSL source and how it is annotated in generated Python.

use std::fmt;

/// Resolved static type of a symbol or expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LslType {
    /// No value (function and event return type).
    Void,
    Integer,
    Float,
    String,
    Key,
    Vector,
    /// LSL spells this `rotation`.
    Quaternion,
    List,
    /// Produced by a front end that failed to type an expression; never valid input to codegen.
    Error,
}

/// Metadata for one type tag.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub id: LslType,
    /// Spelling in LSL source (`""` for types that have no source spelling).
    pub lsl_spelling: &'static str,
    /// Python annotation used for fields, locals, parameters and return types.
    pub python_name: &'static str,
}

/// Registry of all type tags, in declaration order.
pub const TYPES: &[TypeInfo] = &[
    info(LslType::Void, "", "None"),
    info(LslType::Integer, "integer", "int"),
    info(LslType::Float, "float", "float"),
    info(LslType::String, "string", "str"),
    info(LslType::Key, "key", "Key"),
    info(LslType::Vector, "vector", "Vector"),
    info(LslType::Quaternion, "rotation", "Quaternion"),
    info(LslType::List, "list", "list"),
    info(LslType::Error, "", "<ERROR>"),
];

const fn info(id: LslType, lsl_spelling: &'static str, python_name: &'static str) -> TypeInfo {
    TypeInfo {
        id,
        lsl_spelling,
        python_name,
    }
}

/// Return the registry entry for a type.
pub fn info_for(ty: LslType) -> &'static TypeInfo {
    // The table is indexed in enum declaration order.
    &TYPES[ty as usize]
}

impl LslType {
    /// Python annotation name.
    pub fn python_name(self) -> &'static str {
        info_for(self).python_name
    }

    /// LSL source spelling, if the type has one.
    pub fn lsl_name(self) -> Option<&'static str> {
        let spelling = info_for(self).lsl_spelling;
        (!spelling.is_empty()).then_some(spelling)
    }

    /// Number of float components for vector/quaternion, `None` otherwise.
    pub fn component_count(self) -> Option<usize> {
        match self {
            LslType::Vector => Some(3),
            LslType::Quaternion => Some(4),
            _ => None,
        }
    }
}

impl fmt::Display for LslType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lsl_name() {
            Some(name) => f.write_str(name),
            None => match self {
                LslType::Void => f.write_str("void"),
                _ => f.write_str("error"),
            },
        }
    }
}
