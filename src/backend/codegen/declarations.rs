//! Script scaffolding
//!
//! One script becomes one class deriving from the runtime's base class:
//!
//! ```text
//! from lummao import *
//!
//!
//! class Script(BaseLSLScript):
//!     counter: int
//!
//!     def __init__(self):
//!         super().__init__()
//!         self.counter = 0
//!
//!     @with_goto
//!     def edefaultstate_entry(self) -> None:
//!         ...
//! ```
//!
//! Handlers of every state share the class namespace, so each handler method is named `e<state><event>`.

use lslpy_core::LslType;
use lslpy_core::runtime::{BASE_CLASS, GOTO_DECORATOR};
use lslpy_syntax::ast::{EventHandler, GlobalFunction, GlobalVariable, Param, Script, State, Stmt};

use super::{EmitError, PythonCodegen};
use crate::backend::python_emitter::to_python_ident;

impl PythonCodegen<'_> {
    pub(super) fn emit_script(&mut self, script: &Script) -> Result<(), EmitError> {
        self.emitter.writef(format_args!("from {} import *\n\n\n", self.config.runtime_module));
        self.emitter.writef(format_args!("class {}({BASE_CLASS}):\n", self.config.class_name));

        self.indented(|this| {
            for var in script.global_variables() {
                this.emit_field_annotation(var)?;
            }
            this.emitter.newline();
            this.emit_constructor(script)?;

            for func in script.global_functions() {
                this.emit_function(func)?;
            }
            for state in &script.states {
                for handler in &state.handlers {
                    this.emit_event_handler(state, handler)?;
                }
            }
            Ok(())
        })
    }

    /// Class-level `name: Type`
    fn emit_field_annotation(&mut self, var: &GlobalVariable) -> Result<(), EmitError> {
        let annotation = Self::declared_annotation(&var.symbol)?;
        self.emitter.line(&format!("{}: {annotation}", to_python_ident(&var.symbol.name)));
        Ok(())
    }

    /// `__init__` assigning every global its initializer or default, in source order.
    fn emit_constructor(&mut self, script: &Script) -> Result<(), EmitError> {
        self.emitter.line("def __init__(self):");
        self.indented(|this| {
            this.emitter.line("super().__init__()");
            for var in script.global_variables() {
                this.emitter.write_indent();
                this.emitter.writef(format_args!("self.{} = ", to_python_ident(&var.symbol.name)));
                this.emit_initializer(&var.symbol, var.initializer.as_ref())?;
                this.emitter.newline();
            }
            Ok(())
        })?;
        self.emitter.newline();
        Ok(())
    }

    fn emit_function(&mut self, func: &GlobalFunction) -> Result<(), EmitError> {
        let name = to_python_ident(&func.name);
        self.emit_method(&name, &func.params, func.return_type, &func.body)
    }

    fn emit_event_handler(&mut self, state: &State, handler: &EventHandler) -> Result<(), EmitError> {
        let name = format!("e{}{}", state.name, handler.name);
        self.emit_method(&name, &handler.params, LslType::Void, &handler.body)
    }

    /// `@with_goto`-decorated method with annotated parameters and return type, followed by a blank line.
    fn emit_method(
        &mut self,
        name: &str,
        params: &[Param],
        return_type: LslType,
        body: &[Stmt],
    ) -> Result<(), EmitError> {
        tracing::debug!(method = name, params = params.len(), "emitting method");

        let mut signature = format!("def {name}(self");
        for param in params {
            let annotation = Self::annotation(param.ty, "a parameter annotation")?;
            signature.push_str(&format!(", {}: {annotation}", to_python_ident(&param.name)));
        }
        let returns = Self::annotation(return_type, "a return annotation")?;
        signature.push_str(&format!(") -> {returns}:"));

        self.emitter.line(&format!("@{GOTO_DECORATOR}"));
        self.emitter.line(&signature);
        self.indented(|this| this.emit_block(body))?;
        self.emitter.newline();
        Ok(())
    }
}
