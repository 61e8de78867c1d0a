//! LSL → Python code generation
//!
//! `PythonCodegen` walks an annotated [`Script`] top-down and streams Python source into a [`PythonEmitter`]. There
//! is no intermediate representation: every node is written exactly once, left to right.
//!
//! ## Module Organization
//!
//! - `mod.rs` - `PythonCodegen`, `EmitError` and the scoped indentation helper
//! - `declarations.rs` - class scaffolding, globals, `__init__`, function and event handler methods
//! - `statements.rs` - statements, loop lowering, goto emulation
//! - `expressions.rs` - expressions, operator dispatch, assignment and increment forms
//! - `literals.rs` - exact float encoding and string escaping
//!
//! ## Errors
//!
//! The input tree is trusted to be well-typed. [`EmitError`] only reports trees that break that contract (an `error`
//! type that survived type checking, an assignment to a builtin, ...). Such a tree has no meaningful translation, so
//! generation stops at the first one.

use thiserror::Error;

use lslpy_core::LslType;
use lslpy_core::lang::members::Member;
use lslpy_syntax::ast::Script;

use super::config::CodegenConfig;
use super::python_emitter::PythonEmitter;

mod declarations;
mod expressions;
pub mod literals;
mod statements;

/// A tree that violates the generator's input contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("the error type reached {context}")]
    ErrorType { context: &'static str },

    #[error("`{name}` is declared with type void")]
    VoidDeclaration { name: String },

    #[error("a {from} value is cast to void")]
    VoidCast { from: LslType },

    #[error("builtin `{name}` cannot be assigned to")]
    BuiltinTarget { name: String },

    #[error("local `{name}` is called like a function")]
    LocalCall { name: String },

    #[error("`{name}` of type {ty} has no member `{member}`")]
    InvalidMember { name: String, ty: LslType, member: Member },

    #[error("`{name}` of type {ty} cannot be incremented or decremented")]
    NonNumericIncrement { name: String, ty: LslType },
}

/// Generate the Python module for `script`.
pub fn generate(script: &Script, config: &CodegenConfig) -> Result<String, EmitError> {
    PythonCodegen::new(config).try_generate(script)
}

/// Streaming LSL → Python translator for one script.
pub struct PythonCodegen<'a> {
    config: &'a CodegenConfig,
    emitter: PythonEmitter,
}

impl<'a> PythonCodegen<'a> {
    pub fn new(config: &'a CodegenConfig) -> Self {
        Self {
            config,
            emitter: PythonEmitter::new(config.indent_width),
        }
    }

    /// Translate a whole script into a Python module.
    #[tracing::instrument(skip_all, fields(globals = script.globals.len(), states = script.states.len()))]
    pub fn try_generate(mut self, script: &Script) -> Result<String, EmitError> {
        self.emit_script(script)?;
        let code = self.emitter.finish();
        tracing::debug!(bytes = code.len(), "generated python module");
        Ok(code)
    }

    /// Run `body` one indentation level deeper, restoring the previous depth whether or not it succeeds.
    fn indented<F>(&mut self, body: F) -> Result<(), EmitError>
    where
        F: FnOnce(&mut Self) -> Result<(), EmitError>,
    {
        let saved = self.emitter.indent_level();
        self.emitter.set_indent_level(saved + 1);
        let result = body(self);
        self.emitter.set_indent_level(saved);
        result
    }

    /// Python annotation for a type, refusing the `error` type.
    fn annotation(ty: LslType, context: &'static str) -> Result<&'static str, EmitError> {
        match ty {
            LslType::Error => Err(EmitError::ErrorType { context }),
            _ => Ok(ty.python_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use lslpy_core::{AssignOp, BinaryOp, IncDecOp, UnaryOp};
    use lslpy_syntax::ast::*;

    use super::*;

    fn render_expr(expr: &Expr) -> Result<String, EmitError> {
        let config = CodegenConfig::default();
        let mut codegen = PythonCodegen::new(&config);
        codegen.emit_expr(expr)?;
        Ok(codegen.emitter.finish())
    }

    fn expr_text(expr: Expr) -> String {
        render_expr(&expr).expect("expression should generate")
    }

    fn render_stmt(stmt: &Stmt) -> Result<String, EmitError> {
        let config = CodegenConfig::default();
        let mut codegen = PythonCodegen::new(&config);
        codegen.emit_stmt(stmt)?;
        Ok(codegen.emitter.finish())
    }

    fn stmt_text(stmt: Stmt) -> String {
        render_stmt(&stmt).expect("statement should generate")
    }

    fn global(name: &str, ty: LslType) -> Symbol {
        Symbol::global(name, ty)
    }

    fn local(name: &str, ty: LslType) -> Symbol {
        Symbol::local(name, ty)
    }

    // ========================================================================
    // Constants and aggregates
    // ========================================================================

    #[test]
    fn test_integer_and_float_constants() {
        assert_eq!(expr_text(Expr::integer(5)), "5");
        assert_eq!(expr_text(Expr::integer(-2147483648)), "-2147483648");
        assert_eq!(expr_text(Expr::float(2.0)), "2.0");
        assert_eq!(expr_text(Expr::float(-0.0)), "-0.0");
    }

    #[test]
    fn test_string_and_key_constants() {
        assert_eq!(expr_text(Expr::string("say \"hi\"\n")), "\"say \\\"hi\\\"\\n\"");
        assert_eq!(expr_text(Expr::key("")), "Key(\"\")");
    }

    #[test]
    fn test_composite_constants_keep_component_order() {
        assert_eq!(expr_text(Expr::vector_constant([1.0, 2.0, 3.0])), "Vector((1.0, 2.0, 3.0))");
        assert_eq!(
            expr_text(Expr::quaternion_constant([0.0, 0.0, -0.0, 1.0])),
            "Quaternion((0.0, 0.0, -0.0, 1.0))"
        );
    }

    #[test]
    fn test_composite_and_list_expressions() {
        let x = Expr::variable(local("x", LslType::Float));
        let v = Expr::vector([x.clone(), Expr::float(0.0), x.clone()]);
        assert_eq!(expr_text(v), "Vector((x, 0.0, x))");

        let list = Expr::list(vec![Expr::integer(1), Expr::string("a"), x]);
        assert_eq!(expr_text(list), "[1, \"a\", x]");
        assert_eq!(expr_text(Expr::list(vec![])), "[]");
    }

    #[test]
    fn test_quaternion_expression_keeps_component_order() {
        let component = |name: &str| Expr::variable(local(name, LslType::Float));
        let q = Expr::quaternion([component("x"), component("y"), component("z"), component("s")]);
        assert_eq!(expr_text(q), "Quaternion((x, y, z, s))");

        let mixed = Expr::quaternion([Expr::float(0.0), component("b"), Expr::float(-0.0), Expr::float(1.0)]);
        assert_eq!(expr_text(mixed), "Quaternion((0.0, b, -0.0, 1.0))");
    }

    #[test]
    fn test_list_constants() {
        let list = Expr::new(
            ExprKind::ListConstant {
                items: vec![Expr::integer(1), Expr::key("k")],
            },
            LslType::List,
        );
        assert_eq!(expr_text(list), "[1, Key(\"k\")]");
    }

    // ========================================================================
    // Casts, calls, references
    // ========================================================================

    #[test]
    fn test_int_to_float_cast_is_plain_conversion() {
        let i = Expr::variable(local("i", LslType::Integer));
        assert_eq!(expr_text(Expr::typecast(i, LslType::Float)), "float(i)");
    }

    #[test]
    fn test_other_casts_use_typecast() {
        let f = Expr::variable(local("f", LslType::Float));
        assert_eq!(expr_text(Expr::typecast(f, LslType::String)), "typecast(f, str)");
        let s = Expr::string("<1,2,3>");
        assert_eq!(expr_text(Expr::typecast(s, LslType::Quaternion)), "typecast(\"<1,2,3>\", Quaternion)");
    }

    #[test]
    fn test_cast_to_error_type_fails() {
        let err = render_expr(&Expr::typecast(Expr::integer(1), LslType::Error)).unwrap_err();
        assert!(matches!(err, EmitError::ErrorType { .. }));
    }

    #[test]
    fn test_cast_to_void_fails() {
        let err = render_expr(&Expr::typecast(Expr::integer(1), LslType::Void)).unwrap_err();
        assert_eq!(err, EmitError::VoidCast { from: LslType::Integer });
    }

    #[test]
    fn test_calls_by_storage_class() {
        let say = Symbol::builtin("llOwnerSay", LslType::Void);
        assert_eq!(
            expr_text(Expr::call(say, vec![Expr::string("hi")])),
            "lslfuncs.llOwnerSay(\"hi\")"
        );

        let helper = global("helper", LslType::Integer);
        assert_eq!(
            expr_text(Expr::call(helper, vec![Expr::integer(1), Expr::integer(2)])),
            "self.helper(1, 2)"
        );
    }

    #[test]
    fn test_calling_a_local_fails() {
        let err = render_expr(&Expr::call(local("f", LslType::Integer), vec![])).unwrap_err();
        assert_eq!(err, EmitError::LocalCall { name: "f".to_string() });
    }

    #[test]
    fn test_references_by_storage_class() {
        assert_eq!(expr_text(Expr::variable(global("gCount", LslType::Integer))), "self.gCount");
        assert_eq!(expr_text(Expr::variable(local("n", LslType::Integer))), "n");
        assert_eq!(expr_text(Expr::variable(Symbol::builtin("PI", LslType::Float))), "PI");
    }

    #[test]
    fn test_member_references_index_by_offset() {
        let pos = LValue::member(global("pos", LslType::Vector), Member::Z);
        assert_eq!(expr_text(Expr::lvalue(pos)), "self.pos[2]");
        let rot = LValue::member(local("rot", LslType::Quaternion), Member::S);
        assert_eq!(expr_text(Expr::lvalue(rot)), "rot[3]");
    }

    #[test]
    fn test_invalid_members_fail() {
        let v = LValue::member(local("v", LslType::Vector), Member::S);
        let err = render_expr(&Expr::lvalue(v)).unwrap_err();
        assert!(matches!(err, EmitError::InvalidMember { member: Member::S, .. }));

        let s = LValue::member(local("s", LslType::String), Member::X);
        assert!(render_expr(&Expr::lvalue(s)).is_err());
    }

    #[test]
    fn test_reserved_user_names_are_escaped() {
        assert_eq!(expr_text(Expr::variable(local("lambda", LslType::Integer))), "lambda_");
        assert_eq!(expr_text(Expr::variable(global("list", LslType::List))), "self.list_");
        let call = Expr::call(global("print", LslType::Void), vec![]);
        assert_eq!(expr_text(call), "self.print_()");
    }

    // ========================================================================
    // Operators
    // ========================================================================

    #[test]
    fn test_binary_operators_pass_rhs_first() {
        let a = Expr::variable(local("a", LslType::Integer));
        let b = Expr::variable(local("b", LslType::Integer));
        assert_eq!(
            expr_text(Expr::binary(BinaryOp::Sub, a.clone(), b.clone(), LslType::Integer)),
            "rsub(b, a)"
        );
        assert_eq!(
            expr_text(Expr::binary(BinaryOp::ShiftLeft, a, b, LslType::Integer)),
            "rshl(b, a)"
        );
    }

    #[test]
    fn test_nested_binary_operators() {
        let a = Expr::variable(local("a", LslType::Integer));
        let inner = Expr::binary(BinaryOp::Mul, a.clone(), Expr::integer(2), LslType::Integer);
        let outer = Expr::binary(BinaryOp::Add, inner, Expr::integer(1), LslType::Integer);
        assert_eq!(expr_text(outer), "radd(1, rmul(2, a))");
    }

    #[test]
    fn test_unary_print_paren_and_condition() {
        let a = Expr::variable(local("a", LslType::Integer));
        assert_eq!(expr_text(Expr::unary(UnaryOp::Neg, a.clone())), "neg(a)");
        assert_eq!(expr_text(Expr::unary(UnaryOp::BitNot, a.clone())), "bitnot(a)");
        assert_eq!(expr_text(Expr::unary(UnaryOp::BoolNot, a.clone())), "boolnot(a)");
        assert_eq!(expr_text(Expr::print(a.clone())), "print(a)");
        assert_eq!(expr_text(Expr::paren(a)), "(a)");
        let s = Expr::variable(local("s", LslType::String));
        assert_eq!(expr_text(Expr::bool_conversion(s)), "cond(s)");
    }

    // ========================================================================
    // Assignment
    // ========================================================================

    #[test]
    fn test_assignment_statement_forms() {
        let g = LValue::new(global("g", LslType::Integer));
        assert_eq!(expr_text(Expr::assign(g, Expr::integer(1)).discarded()), "self.g = 1");
        let l = LValue::new(local("l", LslType::Integer));
        assert_eq!(expr_text(Expr::assign(l, Expr::integer(1)).discarded()), "l = 1");
    }

    #[test]
    fn test_assignment_expression_forms() {
        let g = LValue::new(global("g", LslType::Integer));
        assert_eq!(expr_text(Expr::assign(g, Expr::integer(1))), "assign(self.__dict__, \"g\", 1)");
        let l = LValue::new(local("l", LslType::Integer));
        assert_eq!(expr_text(Expr::assign(l, Expr::integer(1))), "(l := 1)");
    }

    #[test]
    fn test_member_assignment_rebuilds_the_composite() {
        let pos = LValue::member(global("pos", LslType::Vector), Member::Y);
        assert_eq!(
            expr_text(Expr::assign(pos.clone(), Expr::float(2.0)).discarded()),
            "self.pos = replace_coord_axis(self.pos, 1, 2.0)"
        );
        assert_eq!(
            expr_text(Expr::assign(pos, Expr::float(2.0))),
            "assign(self.__dict__, \"pos\", replace_coord_axis(self.pos, 1, 2.0))[1]"
        );

        let rot = LValue::member(local("rot", LslType::Quaternion), Member::S);
        assert_eq!(
            expr_text(Expr::assign(rot, Expr::float(1.0))),
            "(rot := replace_coord_axis(rot, 3, 1.0))[3]"
        );
    }

    #[test]
    fn test_integer_times_float_assignment_narrows() {
        let i = LValue::new(local("i", LslType::Integer));
        let f = Expr::variable(local("f", LslType::Float));
        assert_eq!(
            expr_text(Expr::compound_assign(AssignOp::MulAssign, i.clone(), f.clone())),
            "(i := typecast(rmul(f, i), int))"
        );
        assert_eq!(
            expr_text(Expr::compound_assign(AssignOp::MulAssign, i, f).discarded()),
            "i = typecast(rmul(f, i), int)"
        );
    }

    #[test]
    fn test_compound_assignment_without_narrowing() {
        let total = LValue::new(global("total", LslType::Float));
        assert_eq!(
            expr_text(Expr::compound_assign(AssignOp::AddAssign, total, Expr::float(1.0)).discarded()),
            "self.total = radd(1.0, self.total)"
        );
        let v = LValue::member(local("v", LslType::Vector), Member::X);
        assert_eq!(
            expr_text(Expr::compound_assign(AssignOp::SubAssign, v, Expr::float(1.0)).discarded()),
            "v = replace_coord_axis(v, 0, rsub(1.0, v[0]))"
        );
    }

    #[test]
    fn test_assignment_to_builtin_fails() {
        let pi = LValue::new(Symbol::builtin("PI", LslType::Float));
        let err = render_expr(&Expr::assign(pi, Expr::float(3.0))).unwrap_err();
        assert_eq!(err, EmitError::BuiltinTarget { name: "PI".to_string() });
    }

    #[test]
    fn test_escaped_names_in_quoted_positions() {
        let g = LValue::new(global("from", LslType::Integer));
        assert_eq!(expr_text(Expr::assign(g, Expr::integer(0))), "assign(self.__dict__, \"from_\", 0)");
    }

    #[test]
    fn test_double_underscore_names_use_one_spelling_everywhere() {
        let count = global("__count", LslType::Integer);
        assert_eq!(expr_text(Expr::variable(count.clone())), "self.__count__");
        assert_eq!(
            expr_text(Expr::assign(LValue::new(count.clone()), Expr::integer(5))),
            "assign(self.__dict__, \"__count__\", 5)"
        );
        assert_eq!(
            expr_text(Expr::inc_dec(IncDecOp::PostIncrement, LValue::new(count))),
            "postincr(self.__dict__, \"__count__\")"
        );

        let hidden = LValue::new(local("__i", LslType::Integer));
        assert_eq!(expr_text(Expr::inc_dec(IncDecOp::PreIncrement, hidden)), "preincr(locals(), \"__i__\")");
    }

    #[test]
    fn test_escaped_and_user_spellings_stay_distinct() {
        let keyword = Expr::variable(global("pass", LslType::Integer));
        let suffixed = Expr::variable(global("pass_", LslType::Integer));
        assert_eq!(expr_text(keyword), "self.pass_");
        assert_eq!(expr_text(suffixed), "self.pass__");
    }

    // ========================================================================
    // Increment / decrement
    // ========================================================================

    #[test]
    fn test_discarded_increment_uses_augmented_assignment() {
        let counter = LValue::new(global("counter", LslType::Integer));
        assert_eq!(
            expr_text(Expr::inc_dec(IncDecOp::PostIncrement, counter).discarded()),
            "self.counter += 1"
        );
        let f = LValue::new(local("f", LslType::Float));
        assert_eq!(expr_text(Expr::inc_dec(IncDecOp::PreDecrement, f).discarded()), "f -= 1.0");
    }

    #[test]
    fn test_used_increment_calls_helper() {
        let counter = LValue::new(global("counter", LslType::Integer));
        assert_eq!(
            expr_text(Expr::inc_dec(IncDecOp::PostIncrement, counter)),
            "postincr(self.__dict__, \"counter\")"
        );
        let i = LValue::new(local("i", LslType::Integer));
        assert_eq!(expr_text(Expr::inc_dec(IncDecOp::PreDecrement, i)), "predecr(locals(), \"i\")");
    }

    #[test]
    fn test_member_increment_always_calls_helper() {
        let v = LValue::member(local("v", LslType::Vector), Member::Z);
        assert_eq!(
            expr_text(Expr::inc_dec(IncDecOp::PreIncrement, v).discarded()),
            "preincr(locals(), \"v\", 2)"
        );
    }

    #[test]
    fn test_increment_errors() {
        let s = LValue::new(local("s", LslType::String));
        let err = render_expr(&Expr::inc_dec(IncDecOp::PostIncrement, s).discarded()).unwrap_err();
        assert!(matches!(err, EmitError::NonNumericIncrement { ty: LslType::String, .. }));

        let builtin = LValue::new(Symbol::builtin("ZERO_VECTOR", LslType::Vector));
        assert!(render_expr(&Expr::inc_dec(IncDecOp::PostIncrement, builtin)).is_err());
    }

    // ========================================================================
    // Statements
    // ========================================================================

    #[test]
    fn test_nop_and_empty_block_emit_pass() {
        assert_eq!(stmt_text(Stmt::Nop), "pass\n");
        assert_eq!(stmt_text(Stmt::block(vec![])), "pass\n");
    }

    #[test]
    fn test_declarations_use_defaults() {
        let v = Stmt::declare(local("v", LslType::Vector), None);
        assert_eq!(stmt_text(v), "v: Vector = Vector((0.0, 0.0, 0.0))\n");
        let n = Stmt::declare(local("n", LslType::Integer), Some(Expr::integer(3)));
        assert_eq!(stmt_text(n), "n: int = 3\n");
    }

    #[test]
    fn test_void_declaration_fails() {
        let err = render_stmt(&Stmt::declare(local("nothing", LslType::Void), None)).unwrap_err();
        assert_eq!(err, EmitError::VoidDeclaration { name: "nothing".to_string() });
    }

    #[test]
    fn test_if_else() {
        let flag = Expr::variable(local("flag", LslType::Integer));
        let stmt = Stmt::if_else(flag.clone(), Stmt::ret(None), Some(Stmt::Nop));
        assert_eq!(stmt_text(stmt), "if flag:\n    return\nelse:\n    pass\n");
        let no_else = Stmt::if_else(flag, Stmt::block(vec![]), None);
        assert_eq!(stmt_text(no_else), "if flag:\n    pass\n");
    }

    #[test]
    fn test_while_checks_before_body() {
        let i = LValue::new(local("i", LslType::Integer));
        let cond = Expr::variable(local("i", LslType::Integer));
        let stmt = Stmt::While {
            condition: cond,
            body: Box::new(Stmt::expression(Expr::inc_dec(IncDecOp::PostDecrement, i))),
        };
        assert_eq!(stmt_text(stmt), "while True:\n    if not i:\n        break\n    i -= 1\n");
    }

    #[test]
    fn test_do_checks_after_body() {
        let stmt = Stmt::Do {
            body: Box::new(Stmt::Nop),
            condition: Expr::integer(0),
        };
        assert_eq!(stmt_text(stmt), "while True:\n    pass\n    if not 0:\n        break\n");
    }

    #[test]
    fn test_for_places_init_and_update() {
        let i = local("i", LslType::Integer);
        let stmt = Stmt::For {
            init: vec![Expr::assign(LValue::new(i.clone()), Expr::integer(0)).discarded()],
            condition: Expr::binary(BinaryOp::Less, Expr::variable(i.clone()), Expr::integer(3), LslType::Integer),
            update: vec![Expr::inc_dec(IncDecOp::PreIncrement, LValue::new(i)).discarded()],
            body: Box::new(Stmt::block(vec![])),
        };
        assert_eq!(
            stmt_text(stmt),
            "i = 0\nwhile True:\n    if not rless(3, i):\n        break\n    pass\n    i += 1\n"
        );
    }

    #[test]
    fn test_jumps_labels_returns_and_state_changes() {
        assert_eq!(stmt_text(Stmt::Jump { label: "done".into() }), "goto .done\n");
        assert_eq!(stmt_text(Stmt::Label { name: "done".into() }), "label .done\n");
        assert_eq!(stmt_text(Stmt::Label { name: "pass".into() }), "label .pass_\n");
        assert_eq!(stmt_text(Stmt::ret(Some(Expr::integer(1)))), "return 1\n");
        assert_eq!(
            stmt_text(Stmt::StateChange { state: "running".into() }),
            "raise StateChangeException('running')\n"
        );
    }

    #[test]
    fn test_failed_nested_emission_restores_indentation() {
        let config = CodegenConfig::default();
        let mut codegen = PythonCodegen::new(&config);
        let bad = Stmt::if_else(
            Expr::integer(1),
            Stmt::declare(local("x", LslType::Error), None),
            None,
        );
        assert!(codegen.emit_stmt(&bad).is_err());
        assert_eq!(codegen.emitter.indent_level(), 0);
    }
}
