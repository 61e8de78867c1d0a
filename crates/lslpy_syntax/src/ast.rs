//! Abstract Syntax Tree definitions for annotated LSL scripts.
//!
//! The tree is a closed set of tagged variants. Parent links from the front end are not carried over: the generator
//! walks top-down and passes the little context it needs (the owning state of an event handler) explicitly.
//!
//! ## Notes
//! - Every identifier use is already bound to a [`Symbol`] with a [`StorageClass`].
//! - Every implicit coercion has been materialized as an [`ExprKind::Typecast`].
//! - Assignment and increment/decrement targets are [`LValue`]s, never arbitrary expressions.
//! - On the wire, statements and expressions are internally tagged by `kind`; expressions additionally carry
//!   `type` and `result_needed`.

use serde::{Deserialize, Serialize};

pub use lslpy_core::{AssignOp, BinaryOp, IncDecOp, LslType, Member, UnaryOp};

/// Resolved binding category of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageClass {
    /// Script-level variable or user function; lives on the instance.
    Global,
    /// Parameter or block-scoped variable.
    Local,
    /// Provided by the runtime (`ll*` functions, constants).
    Builtin,
}

/// A named, typed binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: LslType,
    pub storage: StorageClass,
}

impl Symbol {
    pub fn new(name: impl Into<String>, ty: LslType, storage: StorageClass) -> Self {
        Self {
            name: name.into(),
            ty,
            storage,
        }
    }

    pub fn global(name: impl Into<String>, ty: LslType) -> Self {
        Self::new(name, ty, StorageClass::Global)
    }

    pub fn local(name: impl Into<String>, ty: LslType) -> Self {
        Self::new(name, ty, StorageClass::Local)
    }

    pub fn builtin(name: impl Into<String>, ty: LslType) -> Self {
        Self::new(name, ty, StorageClass::Builtin)
    }
}

// ============================================================================
// Script structure
// ============================================================================

/// A whole script: globals in source order, then states.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub globals: Vec<GlobalItem>,
    #[serde(default)]
    pub states: Vec<State>,
}

impl Script {
    /// Global variables in source order.
    pub fn global_variables(&self) -> impl Iterator<Item = &GlobalVariable> {
        self.globals.iter().filter_map(|g| match g {
            GlobalItem::Variable(var) => Some(var),
            GlobalItem::Function(_) => None,
        })
    }

    /// User-defined functions in source order.
    pub fn global_functions(&self) -> impl Iterator<Item = &GlobalFunction> {
        self.globals.iter().filter_map(|g| match g {
            GlobalItem::Function(func) => Some(func),
            GlobalItem::Variable(_) => None,
        })
    }
}

/// Top-level declarations (variables and functions may interleave in source).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GlobalItem {
    Variable(GlobalVariable),
    Function(GlobalFunction),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalVariable {
    pub symbol: Symbol,
    #[serde(default)]
    pub initializer: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalFunction {
    pub name: String,
    #[serde(default = "void_type")]
    pub return_type: LslType,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub body: Vec<Stmt>,
}

/// A function or event parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: LslType,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: LslType) -> Self {
        Self { name: name.into(), ty }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    #[serde(default)]
    pub handlers: Vec<EventHandler>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventHandler {
    pub name: String,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub body: Vec<Stmt>,
}

fn void_type() -> LslType {
    LslType::Void
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stmt {
    /// `;`
    Nop,
    Compound {
        #[serde(default)]
        body: Vec<Stmt>,
    },
    Expression {
        expr: Expr,
    },
    Declaration {
        symbol: Symbol,
        #[serde(default)]
        initializer: Option<Expr>,
    },
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        #[serde(default)]
        else_branch: Option<Box<Stmt>>,
    },
    For {
        #[serde(default)]
        init: Vec<Expr>,
        condition: Expr,
        #[serde(default)]
        update: Vec<Expr>,
        body: Box<Stmt>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    /// `do body while (condition);`
    Do {
        body: Box<Stmt>,
        condition: Expr,
    },
    Jump {
        label: String,
    },
    Label {
        name: String,
    },
    Return {
        #[serde(default)]
        value: Option<Expr>,
    },
    /// `state name;`
    StateChange {
        state: String,
    },
}

impl Stmt {
    /// Expression statement. The top-level value is discarded.
    pub fn expression(expr: Expr) -> Self {
        Stmt::Expression {
            expr: expr.discarded(),
        }
    }

    pub fn block(body: Vec<Stmt>) -> Self {
        Stmt::Compound { body }
    }

    pub fn declare(symbol: Symbol, initializer: Option<Expr>) -> Self {
        Stmt::Declaration { symbol, initializer }
    }

    pub fn if_else(condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Self {
        Stmt::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn ret(value: Option<Expr>) -> Self {
        Stmt::Return { value }
    }
}

// ============================================================================
// Expressions
// ============================================================================

/// An expression with its resolved type and result-needed flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    #[serde(flatten)]
    pub kind: ExprKind,
    #[serde(rename = "type")]
    pub ty: LslType,
    /// Whether an enclosing expression consumes the value. Absent means `true`: expression-context forms are valid
    /// in statement position too.
    #[serde(default = "result_needed_default")]
    pub result_needed: bool,
}

fn result_needed_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExprKind {
    // Constants
    Integer { value: i32 },
    Float { value: f32 },
    String { value: String },
    Key { value: String },
    VectorConstant { value: [f32; 3] },
    QuaternionConstant { value: [f32; 4] },
    ListConstant { items: Vec<Expr> },

    // Aggregates built from sub-expressions
    Vector { components: Box<[Expr; 3]> },
    Quaternion { components: Box<[Expr; 4]> },
    List { items: Vec<Expr> },

    /// Explicit cast; the target type is the node's own `type`.
    Typecast { operand: Box<Expr> },
    Call {
        callee: Symbol,
        #[serde(default)]
        args: Vec<Expr>,
    },
    Lvalue(LValue),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Assign {
        op: AssignOp,
        target: LValue,
        value: Box<Expr>,
    },
    Unary { op: UnaryOp, operand: Box<Expr> },
    IncDec { op: IncDecOp, target: LValue },
    Print { operand: Box<Expr> },
    Paren { operand: Box<Expr> },
    /// Implicit condition check (`if (v)`, `while (s)`, ...).
    BoolConversion { operand: Box<Expr> },
}

/// A variable reference, optionally narrowed to one composite component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LValue {
    pub symbol: Symbol,
    #[serde(default)]
    pub member: Option<Member>,
}

impl LValue {
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol, member: None }
    }

    pub fn member(symbol: Symbol, member: Member) -> Self {
        Self {
            symbol,
            member: Some(member),
        }
    }

    /// Type of the referenced slot: the component type for members, the symbol's type otherwise.
    pub fn ty(&self) -> LslType {
        if self.member.is_some() {
            LslType::Float
        } else {
            self.symbol.ty
        }
    }
}

impl Expr {
    pub fn new(kind: ExprKind, ty: LslType) -> Self {
        Self {
            kind,
            ty,
            result_needed: true,
        }
    }

    /// Mark the value as unused (statement context).
    pub fn discarded(mut self) -> Self {
        self.result_needed = false;
        self
    }

    pub fn integer(value: i32) -> Self {
        Self::new(ExprKind::Integer { value }, LslType::Integer)
    }

    pub fn float(value: f32) -> Self {
        Self::new(ExprKind::Float { value }, LslType::Float)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(ExprKind::String { value: value.into() }, LslType::String)
    }

    pub fn key(value: impl Into<String>) -> Self {
        Self::new(ExprKind::Key { value: value.into() }, LslType::Key)
    }

    pub fn vector_constant(value: [f32; 3]) -> Self {
        Self::new(ExprKind::VectorConstant { value }, LslType::Vector)
    }

    pub fn quaternion_constant(value: [f32; 4]) -> Self {
        Self::new(ExprKind::QuaternionConstant { value }, LslType::Quaternion)
    }

    pub fn list(items: Vec<Expr>) -> Self {
        Self::new(ExprKind::List { items }, LslType::List)
    }

    pub fn vector(components: [Expr; 3]) -> Self {
        Self::new(
            ExprKind::Vector {
                components: Box::new(components),
            },
            LslType::Vector,
        )
    }

    pub fn quaternion(components: [Expr; 4]) -> Self {
        Self::new(
            ExprKind::Quaternion {
                components: Box::new(components),
            },
            LslType::Quaternion,
        )
    }

    pub fn lvalue(target: LValue) -> Self {
        let ty = target.ty();
        Self::new(ExprKind::Lvalue(target), ty)
    }

    pub fn variable(symbol: Symbol) -> Self {
        Self::lvalue(LValue::new(symbol))
    }

    pub fn typecast(operand: Expr, to: LslType) -> Self {
        Self::new(
            ExprKind::Typecast {
                operand: Box::new(operand),
            },
            to,
        )
    }

    pub fn call(callee: Symbol, args: Vec<Expr>) -> Self {
        let ty = callee.ty;
        Self::new(ExprKind::Call { callee, args }, ty)
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr, ty: LslType) -> Self {
        Self::new(
            ExprKind::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            ty,
        )
    }

    pub fn assign(target: LValue, value: Expr) -> Self {
        Self::compound_assign(AssignOp::Assign, target, value)
    }

    pub fn compound_assign(op: AssignOp, target: LValue, value: Expr) -> Self {
        let ty = target.ty();
        Self::new(
            ExprKind::Assign {
                op,
                target,
                value: Box::new(value),
            },
            ty,
        )
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        let ty = operand.ty;
        Self::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            ty,
        )
    }

    pub fn inc_dec(op: IncDecOp, target: LValue) -> Self {
        let ty = target.ty();
        Self::new(ExprKind::IncDec { op, target }, ty)
    }

    pub fn print(operand: Expr) -> Self {
        let ty = operand.ty;
        Self::new(
            ExprKind::Print {
                operand: Box::new(operand),
            },
            ty,
        )
    }

    pub fn paren(operand: Expr) -> Self {
        let ty = operand.ty;
        Self::new(
            ExprKind::Paren {
                operand: Box::new(operand),
            },
            ty,
        )
    }

    pub fn bool_conversion(operand: Expr) -> Self {
        Self::new(
            ExprKind::BoolConversion {
                operand: Box::new(operand),
            },
            LslType::Integer,
        )
    }
}
