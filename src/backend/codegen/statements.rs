//! Statement emission
//!
//! Every LSL loop becomes `while True:` with an explicit `if not <cond>: break`, placed before the body for
//! `while`/`for` and after it for `do`. Jumps and labels are emitted as-is through the runtime's goto facility.

use lslpy_core::LslType;
use lslpy_core::runtime::{GOTO_KEYWORD, LABEL_KEYWORD, STATE_CHANGE_EXCEPTION};
use lslpy_syntax::ast::{Expr, Stmt, Symbol};

use super::{EmitError, PythonCodegen};
use crate::backend::python_emitter::to_python_ident;

impl PythonCodegen<'_> {
    /// Emit a statement list as a Python suite. Empty lists become `pass`.
    pub(super) fn emit_block(&mut self, body: &[Stmt]) -> Result<(), EmitError> {
        if body.is_empty() {
            self.emitter.line("pass");
            return Ok(());
        }
        body.iter().try_for_each(|stmt| self.emit_stmt(stmt))
    }

    /// Emit a statement
    pub(super) fn emit_stmt(&mut self, stmt: &Stmt) -> Result<(), EmitError> {
        match stmt {
            Stmt::Nop => self.emitter.line("pass"),
            Stmt::Compound { body } => self.emit_block(body)?,
            Stmt::Expression { expr } => self.emit_expr_line(expr)?,
            Stmt::Declaration { symbol, initializer } => self.emit_declaration(symbol, initializer.as_ref())?,
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.emitter.write_indent();
                self.emitter.write("if ");
                self.emit_expr(condition)?;
                self.emitter.write(":\n");
                self.indented(|this| this.emit_stmt(then_branch))?;
                if let Some(else_branch) = else_branch {
                    self.emitter.line("else:");
                    self.indented(|this| this.emit_stmt(else_branch))?;
                }
            }
            Stmt::For {
                init,
                condition,
                update,
                body,
            } => {
                init.iter().try_for_each(|expr| self.emit_expr_line(expr))?;
                self.emitter.line("while True:");
                self.indented(|this| {
                    this.emit_loop_exit(condition)?;
                    this.emit_stmt(body)?;
                    update.iter().try_for_each(|expr| this.emit_expr_line(expr))
                })?;
            }
            Stmt::While { condition, body } => {
                self.emitter.line("while True:");
                self.indented(|this| {
                    this.emit_loop_exit(condition)?;
                    this.emit_stmt(body)
                })?;
            }
            Stmt::Do { body, condition } => {
                self.emitter.line("while True:");
                self.indented(|this| {
                    this.emit_stmt(body)?;
                    this.emit_loop_exit(condition)
                })?;
            }
            Stmt::Jump { label } => {
                self.emitter.line(&format!("{GOTO_KEYWORD} .{}", to_python_ident(label)));
            }
            Stmt::Label { name } => {
                self.emitter.line(&format!("{LABEL_KEYWORD} .{}", to_python_ident(name)));
            }
            Stmt::Return { value } => match value {
                Some(value) => {
                    self.emitter.write_indent();
                    self.emitter.write("return ");
                    self.emit_expr(value)?;
                    self.emitter.newline();
                }
                None => self.emitter.line("return"),
            },
            Stmt::StateChange { state } => {
                self.emitter.line(&format!("raise {STATE_CHANGE_EXCEPTION}('{state}')"));
            }
        }
        Ok(())
    }

    /// An expression on a line of its own.
    fn emit_expr_line(&mut self, expr: &Expr) -> Result<(), EmitError> {
        self.emitter.write_indent();
        self.emit_expr(expr)?;
        self.emitter.newline();
        Ok(())
    }

    /// `if not <condition>: break`
    fn emit_loop_exit(&mut self, condition: &Expr) -> Result<(), EmitError> {
        self.emitter.write_indent();
        self.emitter.write("if not ");
        self.emit_expr(condition)?;
        self.emitter.write(":\n");
        self.indented(|this| {
            this.emitter.line("break");
            Ok(())
        })
    }

    /// `name: Type = <initializer or default>`
    fn emit_declaration(&mut self, symbol: &Symbol, initializer: Option<&Expr>) -> Result<(), EmitError> {
        let annotation = Self::declared_annotation(symbol)?;
        self.emitter.write_indent();
        self.emitter.writef(format_args!("{}: {annotation} = ", to_python_ident(&symbol.name)));
        self.emit_initializer(symbol, initializer)?;
        self.emitter.newline();
        Ok(())
    }

    /// The initializer if present, the type's default value otherwise.
    pub(super) fn emit_initializer(&mut self, symbol: &Symbol, initializer: Option<&Expr>) -> Result<(), EmitError> {
        match initializer {
            Some(expr) => self.emit_expr(expr),
            None => {
                let default = default_value(symbol)?;
                self.emitter.write(default);
                Ok(())
            }
        }
    }

    /// Annotation for a variable declaration. Variables can be neither `void` nor `error`.
    pub(super) fn declared_annotation(symbol: &Symbol) -> Result<&'static str, EmitError> {
        if symbol.ty == LslType::Void {
            return Err(EmitError::VoidDeclaration {
                name: symbol.name.clone(),
            });
        }
        Self::annotation(symbol.ty, "a variable declaration")
    }
}

/// Python rendering of a type's zero value.
fn default_value(symbol: &Symbol) -> Result<&'static str, EmitError> {
    match symbol.ty {
        LslType::Integer => Ok("0"),
        LslType::Float => Ok("0.0"),
        LslType::String => Ok("\"\""),
        LslType::Key => Ok("Key(\"\")"),
        LslType::Vector => Ok("Vector((0.0, 0.0, 0.0))"),
        LslType::Quaternion => Ok("Quaternion((0.0, 0.0, 0.0, 1.0))"),
        LslType::List => Ok("[]"),
        LslType::Void => Err(EmitError::VoidDeclaration {
            name: symbol.name.clone(),
        }),
        LslType::Error => Err(EmitError::ErrorType {
            context: "a default value",
        }),
    }
}
