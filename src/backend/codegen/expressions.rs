//! Expression emission
//!
//! Expressions are written inline, without indentation or newlines.
//!
//! ## Notes
//! - Operators never become native Python operators: each one is a call into the runtime's dispatch table with the
//!   right operand first.
//! - Assignment and increment/decrement have a statement form and an expression form. `Expr::result_needed` picks
//!   between them.

use lslpy_core::LslType;
use lslpy_core::lang::operators::{AssignOp, IncDecOp};
use lslpy_core::runtime::{
    ASSIGN, BUILTIN_NAMESPACE, COND, INSTANCE_ATTRIBUTES, LOCAL_BINDINGS, QUATERNION_CONSTRUCTOR, REPLACE_COORD_AXIS,
    TYPECAST, VECTOR_CONSTRUCTOR,
};
use lslpy_syntax::ast::{Expr, ExprKind, LValue, StorageClass, Symbol};

use super::literals::{float_literal, key_literal, string_literal};
use super::{EmitError, PythonCodegen};
use crate::backend::python_emitter::to_python_ident;

impl PythonCodegen<'_> {
    /// Emit an expression
    pub(super) fn emit_expr(&mut self, expr: &Expr) -> Result<(), EmitError> {
        match &expr.kind {
            ExprKind::Integer { value } => self.emitter.writef(format_args!("{value}")),
            ExprKind::Float { value } => self.emitter.write(&float_literal(*value)),
            ExprKind::String { value } => self.emitter.write(&string_literal(value)),
            ExprKind::Key { value } => self.emitter.write(&key_literal(value)),
            ExprKind::VectorConstant { value } => self.emit_float_tuple(VECTOR_CONSTRUCTOR, value),
            ExprKind::QuaternionConstant { value } => self.emit_float_tuple(QUATERNION_CONSTRUCTOR, value),
            ExprKind::ListConstant { items } | ExprKind::List { items } => {
                self.emitter.write("[");
                self.emit_separated(items)?;
                self.emitter.write("]");
            }
            ExprKind::Vector { components } => self.emit_coordinate(VECTOR_CONSTRUCTOR, components.as_slice())?,
            ExprKind::Quaternion { components } => {
                self.emit_coordinate(QUATERNION_CONSTRUCTOR, components.as_slice())?
            }
            ExprKind::Typecast { operand } => self.emit_typecast(operand, expr.ty)?,
            ExprKind::Call { callee, args } => self.emit_call(callee, args)?,
            ExprKind::Lvalue(target) => self.emit_lvalue(target)?,
            ExprKind::Binary { op, lhs, rhs } => self.emit_dispatch(op.dispatch_name(), rhs, lhs)?,
            ExprKind::Assign { op, target, value } => self.emit_assignment(*op, target, value, expr.result_needed)?,
            ExprKind::Unary { op, operand } => self.emit_wrapped(op.dispatch_name(), operand)?,
            ExprKind::IncDec { op, target } => self.emit_inc_dec(*op, target, expr.result_needed)?,
            ExprKind::Print { operand } => self.emit_wrapped("print", operand)?,
            ExprKind::Paren { operand } => self.emit_wrapped("", operand)?,
            ExprKind::BoolConversion { operand } => self.emit_wrapped(COND, operand)?,
        }
        Ok(())
    }

    /// Emit expressions separated by `, `
    fn emit_separated(&mut self, exprs: &[Expr]) -> Result<(), EmitError> {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.emitter.write(", ");
            }
            self.emit_expr(expr)?;
        }
        Ok(())
    }

    /// `name(operand)`; an empty name gives plain parentheses.
    fn emit_wrapped(&mut self, name: &str, operand: &Expr) -> Result<(), EmitError> {
        self.emitter.write(name);
        self.emitter.write("(");
        self.emit_expr(operand)?;
        self.emitter.write(")");
        Ok(())
    }

    fn emit_float_tuple(&mut self, constructor: &str, components: &[f32]) {
        let encoded: Vec<String> = components.iter().map(|c| float_literal(*c)).collect();
        self.emitter.writef(format_args!("{constructor}(({}))", encoded.join(", ")));
    }

    fn emit_coordinate(&mut self, constructor: &str, components: &[Expr]) -> Result<(), EmitError> {
        self.emitter.writef(format_args!("{constructor}(("));
        self.emit_separated(components)?;
        self.emitter.write("))");
        Ok(())
    }

    fn emit_typecast(&mut self, operand: &Expr, to: LslType) -> Result<(), EmitError> {
        if to == LslType::Void {
            return Err(EmitError::VoidCast { from: operand.ty });
        }
        if operand.ty == LslType::Integer && to == LslType::Float {
            return self.emit_wrapped(LslType::Float.python_name(), operand);
        }
        let target = Self::annotation(to, "a typecast")?;
        self.emitter.writef(format_args!("{TYPECAST}("));
        self.emit_expr(operand)?;
        self.emitter.writef(format_args!(", {target})"));
        Ok(())
    }

    fn emit_call(&mut self, callee: &Symbol, args: &[Expr]) -> Result<(), EmitError> {
        match callee.storage {
            StorageClass::Builtin => self.emitter.writef(format_args!("{BUILTIN_NAMESPACE}.{}(", callee.name)),
            StorageClass::Global => self.emitter.writef(format_args!("self.{}(", to_python_ident(&callee.name))),
            StorageClass::Local => {
                return Err(EmitError::LocalCall {
                    name: callee.name.clone(),
                });
            }
        }
        self.emit_separated(args)?;
        self.emitter.write(")");
        Ok(())
    }

    /// `dispatch(first, second)`
    fn emit_dispatch(&mut self, dispatch: &str, first: &Expr, second: &Expr) -> Result<(), EmitError> {
        self.emitter.writef(format_args!("{dispatch}("));
        self.emit_expr(first)?;
        self.emitter.write(", ");
        self.emit_expr(second)?;
        self.emitter.write(")");
        Ok(())
    }

    /// Read an l-value: `self.g`, `l`, `BUILTIN`, with `[offset]` for members.
    pub(super) fn emit_lvalue(&mut self, target: &LValue) -> Result<(), EmitError> {
        check_member(target)?;
        self.emitter.write(&symbol_ref(&target.symbol));
        if let Some(member) = target.member {
            self.emitter.writef(format_args!("[{}]", member.offset()));
        }
        Ok(())
    }

    fn emit_assignment(
        &mut self,
        op: AssignOp,
        target: &LValue,
        value: &Expr,
        result_needed: bool,
    ) -> Result<(), EmitError> {
        let symbol = writable_symbol(target)?;
        check_member(target)?;

        if !result_needed {
            self.emitter.writef(format_args!("{} = ", symbol_ref(symbol)));
            return self.emit_stored_value(op, target, value);
        }

        // `:=` can only bind bare names, so instance attributes go through the runtime's `assign`.
        let name = to_python_ident(&symbol.name);
        match symbol.storage {
            StorageClass::Global => {
                self.emitter.writef(format_args!("{ASSIGN}({INSTANCE_ATTRIBUTES}, \"{name}\", "))
            }
            StorageClass::Local | StorageClass::Builtin => self.emitter.writef(format_args!("({name} := ")),
        }
        self.emit_stored_value(op, target, value)?;
        self.emitter.write(")");
        if let Some(member) = target.member {
            self.emitter.writef(format_args!("[{}]", member.offset()));
        }
        Ok(())
    }

    /// The whole new value of the assigned variable. Members rebuild the composite around the new component.
    fn emit_stored_value(&mut self, op: AssignOp, target: &LValue, value: &Expr) -> Result<(), EmitError> {
        let Some(member) = target.member else {
            return self.emit_assigned_value(op, target, value);
        };
        self.emitter.writef(format_args!(
            "{REPLACE_COORD_AXIS}({}, {}, ",
            symbol_ref(&target.symbol),
            member.offset()
        ));
        self.emit_assigned_value(op, target, value)?;
        self.emitter.write(")");
        Ok(())
    }

    /// The value written to the target slot: the right-hand side, or `r<op>(rhs, target)` for compound forms.
    fn emit_assigned_value(&mut self, op: AssignOp, target: &LValue, value: &Expr) -> Result<(), EmitError> {
        let Some(arithmetic) = op.arithmetic() else {
            return self.emit_expr(value);
        };
        // Dispatch results follow float promotion; an integer slot must stay integer.
        let narrow = target.ty() == LslType::Integer && value.ty == LslType::Float;
        if narrow {
            self.emitter.writef(format_args!("{TYPECAST}("));
        }
        self.emitter.writef(format_args!("{}(", arithmetic.dispatch_name()));
        self.emit_expr(value)?;
        self.emitter.write(", ");
        self.emit_lvalue(target)?;
        self.emitter.write(")");
        if narrow {
            self.emitter.writef(format_args!(", {})", LslType::Integer.python_name()));
        }
        Ok(())
    }

    fn emit_inc_dec(&mut self, op: IncDecOp, target: &LValue, result_needed: bool) -> Result<(), EmitError> {
        let symbol = writable_symbol(target)?;
        check_member(target)?;

        if !result_needed && target.member.is_none() {
            let one = match symbol.ty {
                LslType::Integer => "1",
                LslType::Float => "1.0",
                ty => {
                    return Err(EmitError::NonNumericIncrement {
                        name: symbol.name.clone(),
                        ty,
                    });
                }
            };
            self.emitter.writef(format_args!("{} {} {one}", symbol_ref(symbol), op.augmented_assign()));
            return Ok(());
        }

        let bindings = match symbol.storage {
            StorageClass::Global => INSTANCE_ATTRIBUTES,
            StorageClass::Local | StorageClass::Builtin => LOCAL_BINDINGS,
        };
        self.emitter.writef(format_args!(
            "{}({bindings}, \"{}\"",
            op.helper_name(),
            to_python_ident(&symbol.name)
        ));
        if let Some(member) = target.member {
            self.emitter.writef(format_args!(", {}", member.offset()));
        }
        self.emitter.write(")");
        Ok(())
    }
}

/// Python spelling of a whole-variable reference.
fn symbol_ref(symbol: &Symbol) -> String {
    match symbol.storage {
        StorageClass::Global => format!("self.{}", to_python_ident(&symbol.name)),
        StorageClass::Local => to_python_ident(&symbol.name).into_owned(),
        StorageClass::Builtin => symbol.name.clone(),
    }
}

/// Builtins are runtime constants and have no slot to write to.
fn writable_symbol(target: &LValue) -> Result<&Symbol, EmitError> {
    match target.symbol.storage {
        StorageClass::Builtin => Err(EmitError::BuiltinTarget {
            name: target.symbol.name.clone(),
        }),
        StorageClass::Global | StorageClass::Local => Ok(&target.symbol),
    }
}

fn check_member(target: &LValue) -> Result<(), EmitError> {
    match target.member {
        Some(member) if !member.applies_to(target.symbol.ty) => Err(EmitError::InvalidMember {
            name: target.symbol.name.clone(),
            ty: target.symbol.ty,
            member,
        }),
        _ => Ok(()),
    }
}
