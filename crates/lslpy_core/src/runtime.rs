//! Names from the Python runtime contract.
//!
//! Generated modules start with `from <runtime> import *` and then refer to these names unqualified, except for
//! builtin LSL functions which live under [`BUILTIN_NAMESPACE`].

/// Module the generated code star-imports by default.
pub const DEFAULT_RUNTIME_MODULE: &str = "lummao";
/// Base class every generated script class derives from.
pub const BASE_CLASS: &str = "BaseLSLScript";
/// Namespace holding the builtin `ll*` functions.
pub const BUILTIN_NAMESPACE: &str = "lslfuncs";
/// Decorator that enables `label .x` / `goto .x` inside a method body.
pub const GOTO_DECORATOR: &str = "with_goto";

pub const KEY_CONSTRUCTOR: &str = "Key";
pub const VECTOR_CONSTRUCTOR: &str = "Vector";
pub const QUATERNION_CONSTRUCTOR: &str = "Quaternion";

/// `typecast(value, target_type)`.
pub const TYPECAST: &str = "typecast";
/// `assign(mapping, name, value)`, returns `value`.
pub const ASSIGN: &str = "assign";
/// `replace_coord_axis(value, offset, component)`, returns a new composite.
pub const REPLACE_COORD_AXIS: &str = "replace_coord_axis";
/// `bin2float(readable, hex_bytes)`, only `hex_bytes` is decoded.
pub const BIN2FLOAT: &str = "bin2float";
/// Truthiness normalization for conditions.
pub const COND: &str = "cond";
/// Exception raised to request a state transition.
pub const STATE_CHANGE_EXCEPTION: &str = "StateChangeException";

/// Mapping expression for instance-level slots.
pub const INSTANCE_ATTRIBUTES: &str = "self.__dict__";
/// Mapping expression for local slots.
pub const LOCAL_BINDINGS: &str = "locals()";

/// Statement-level helpers of the goto facility.
pub const GOTO_KEYWORD: &str = "goto";
pub const LABEL_KEYWORD: &str = "label";

/// Every unqualified runtime name generated code may reference (besides operator dispatch functions).
pub const RUNTIME_NAMES: &[&str] = &[
    BASE_CLASS,
    BUILTIN_NAMESPACE,
    GOTO_DECORATOR,
    KEY_CONSTRUCTOR,
    VECTOR_CONSTRUCTOR,
    QUATERNION_CONSTRUCTOR,
    TYPECAST,
    ASSIGN,
    REPLACE_COORD_AXIS,
    BIN2FLOAT,
    COND,
    STATE_CHANGE_EXCEPTION,
    GOTO_KEYWORD,
    LABEL_KEYWORD,
];
