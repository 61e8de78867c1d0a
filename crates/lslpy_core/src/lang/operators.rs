//! Operator vocabulary.
//!
//! LSL operators are never emitted as native Python operators. Each one maps to a runtime function that
//! implements LSL's cross-type coercion rules; this module is the table of those mappings.
//!
//! ## Notes
//! - Binary dispatch functions take `(rhs, lhs)`. The order is part of the runtime contract: LSL evaluates the
//!   right operand first.
//!
//! ## Examples
//! ```rust
//! use lslpy_core::lang::operators::{self, AssignOp, BinaryOp, IncDecOp};
//!
//! assert_eq!(operators::binary_info(BinaryOp::ShiftLeft).dispatch, "rshl");
//! assert_eq!(AssignOp::MulAssign.arithmetic(), Some(BinaryOp::Mul));
//! assert_eq!(IncDecOp::PostDecrement.helper_name(), "postdecr");
//! ```

/// Binary operators with a runtime dispatch function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    NotEq,
    Greater,
    Less,
    GreaterEq,
    LessEq,

    // Logical
    BoolAnd,
    BoolOr,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
}

/// Metadata for a binary operator.
#[derive(Debug, Clone, Copy)]
pub struct BinaryOpInfo {
    pub id: BinaryOp,
    /// Runtime function called as `dispatch(rhs, lhs)`.
    pub dispatch: &'static str,
}

/// Registry of all binary operators, in declaration order.
pub const BINARY_OPERATORS: &[BinaryOpInfo] = &[
    bin(BinaryOp::Add, "radd"),
    bin(BinaryOp::Sub, "rsub"),
    bin(BinaryOp::Mul, "rmul"),
    bin(BinaryOp::Div, "rdiv"),
    bin(BinaryOp::Mod, "rmod"),
    bin(BinaryOp::Eq, "req"),
    bin(BinaryOp::NotEq, "rneq"),
    bin(BinaryOp::Greater, "rgreater"),
    bin(BinaryOp::Less, "rless"),
    bin(BinaryOp::GreaterEq, "rgeq"),
    bin(BinaryOp::LessEq, "rleq"),
    bin(BinaryOp::BoolAnd, "rbooland"),
    bin(BinaryOp::BoolOr, "rboolor"),
    bin(BinaryOp::BitAnd, "rbitand"),
    bin(BinaryOp::BitOr, "rbitor"),
    bin(BinaryOp::BitXor, "rbitxor"),
    bin(BinaryOp::ShiftLeft, "rshl"),
    bin(BinaryOp::ShiftRight, "rshr"),
];

const fn bin(id: BinaryOp, dispatch: &'static str) -> BinaryOpInfo {
    BinaryOpInfo { id, dispatch }
}

/// Return the registry entry for a binary operator.
pub fn binary_info(op: BinaryOp) -> &'static BinaryOpInfo {
    &BINARY_OPERATORS[op as usize]
}

impl BinaryOp {
    /// Runtime dispatch function name.
    pub fn dispatch_name(self) -> &'static str {
        binary_info(self).dispatch
    }
}

/// Prefix operators with a runtime dispatch function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnaryOp {
    Neg,
    BitNot,
    BoolNot,
}

impl UnaryOp {
    /// Runtime dispatch function name.
    pub fn dispatch_name(self) -> &'static str {
        match self {
            UnaryOp::Neg => "neg",
            UnaryOp::BitNot => "bitnot",
            UnaryOp::BoolNot => "boolnot",
        }
    }
}

/// Plain and compound assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
}

impl AssignOp {
    /// The binary operator a compound assignment applies, `None` for plain `=`.
    pub fn arithmetic(self) -> Option<BinaryOp> {
        match self {
            AssignOp::Assign => None,
            AssignOp::AddAssign => Some(BinaryOp::Add),
            AssignOp::SubAssign => Some(BinaryOp::Sub),
            AssignOp::MulAssign => Some(BinaryOp::Mul),
            AssignOp::DivAssign => Some(BinaryOp::Div),
            AssignOp::ModAssign => Some(BinaryOp::Mod),
        }
    }
}

/// Prefix and postfix increment/decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IncDecOp {
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
}

impl IncDecOp {
    pub fn is_decrement(self) -> bool {
        matches!(self, IncDecOp::PreDecrement | IncDecOp::PostDecrement)
    }

    /// Runtime helper used when the operation has to stay an expression.
    pub fn helper_name(self) -> &'static str {
        match self {
            IncDecOp::PreIncrement => "preincr",
            IncDecOp::PreDecrement => "predecr",
            IncDecOp::PostIncrement => "postincr",
            IncDecOp::PostDecrement => "postdecr",
        }
    }

    /// Native Python augmented assignment used in statement context.
    pub fn augmented_assign(self) -> &'static str {
        if self.is_decrement() { "-=" } else { "+=" }
    }
}

/// Every runtime function name referenced by the operator tables.
pub fn dispatch_names() -> impl Iterator<Item = &'static str> {
    let unary = [UnaryOp::Neg, UnaryOp::BitNot, UnaryOp::BoolNot].map(UnaryOp::dispatch_name);
    let incdec = [
        IncDecOp::PreIncrement,
        IncDecOp::PreDecrement,
        IncDecOp::PostIncrement,
        IncDecOp::PostDecrement,
    ]
    .map(IncDecOp::helper_name);
    BINARY_OPERATORS
        .iter()
        .map(|o| o.dispatch)
        .chain(unary)
        .chain(incdec)
}
