/// Event-handler statement compilation
///
/// Turns the declarative statements of a UIDL event handler into the
/// method-body statements of the component declaration. Two statement
/// kinds exist: state mutations on `this`, and prop calls. In Vue it is
/// favorable to `$emit` a named event than to invoke a function passed
/// as a prop, so prop calls compile to emit statements.
use indexmap::IndexMap;
use serde_json::Value;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::js_ast::{JsExpr, JsStmt, SyntaxBuilder, UnaryOp};
use crate::uidl::{EventHandlerStatement, PropDefinition};

/// Sentinel for "flip the current boolean value". That the target field
/// is boolean-valued is an upstream UIDL contract; it is not validated
/// here.
pub const TOGGLE_SENTINEL: &str = "$toggle";

pub struct EventStatementCompiler<'a, B: SyntaxBuilder> {
    builder: &'a B,
    prop_definitions: &'a IndexMap<String, PropDefinition>,
}

impl<'a, B: SyntaxBuilder> EventStatementCompiler<'a, B> {
    pub fn new(builder: &'a B, prop_definitions: &'a IndexMap<String, PropDefinition>) -> Self {
        EventStatementCompiler {
            builder,
            prop_definitions,
        }
    }

    /// Compile every event's ordered statement list into a method body.
    /// Statements that fail to compile are dropped (with a diagnostic),
    /// never replaced with placeholders; the rest of the list and the
    /// remaining events are unaffected.
    pub fn compile_methods(
        &self,
        methods: &IndexMap<String, Vec<EventHandlerStatement>>,
        diagnostics: &mut Diagnostics,
    ) -> IndexMap<String, Vec<JsStmt>> {
        let mut compiled = IndexMap::new();
        for (event, statements) in methods {
            let body = statements
                .iter()
                .filter_map(|statement| self.compile_statement(event, statement, diagnostics))
                .collect();
            compiled.insert(event.clone(), body);
        }
        compiled
    }

    fn compile_statement(
        &self,
        event: &str,
        statement: &EventHandlerStatement,
        diagnostics: &mut Diagnostics,
    ) -> Option<JsStmt> {
        match statement {
            EventHandlerStatement::StateChange { modifies, new_state } => {
                Some(self.compile_state_change(modifies, new_state))
            }
            EventHandlerStatement::PropCall { calls, args } => {
                self.compile_prop_call(event, calls.as_deref(), args, diagnostics)
            }
        }
    }

    /// `this.<field> = <literal>`, or `this.<field> = !this.<field>` for
    /// the toggle sentinel.
    fn compile_state_change(&self, modifies: &str, new_state: &Value) -> JsStmt {
        let value = if new_state.as_str() == Some(TOGGLE_SENTINEL) {
            JsExpr::Unary {
                op: UnaryOp::Not,
                operand: Box::new(JsExpr::this_member(modifies)),
            }
        } else {
            self.builder.convert_value_to_literal(new_state)
        };

        JsStmt::Expression(JsExpr::Assign {
            target: Box::new(JsExpr::this_member(modifies)),
            value: Box::new(value),
        })
    }

    /// `this.$emit("<prop>", ...args)`. A missing or unknown "calls"
    /// reference drops the statement with a diagnostic.
    fn compile_prop_call(
        &self,
        event: &str,
        calls: Option<&str>,
        args: &[Value],
        diagnostics: &mut Diagnostics,
    ) -> Option<JsStmt> {
        let prop_name = match calls {
            Some(name) if !name.is_empty() => name,
            _ => {
                diagnostics.warn(Diagnostic::MissingCallsReference {
                    event: event.to_string(),
                });
                return None;
            }
        };

        if !self.prop_definitions.contains_key(prop_name) {
            diagnostics.warn(Diagnostic::UnknownPropReference {
                event: event.to_string(),
                prop: prop_name.to_string(),
            });
            return None;
        }

        let mut call_args = vec![JsExpr::str(prop_name)];
        call_args.extend(args.iter().map(|arg| self.builder.convert_value_to_literal(arg)));

        Some(JsStmt::Expression(JsExpr::Call {
            callee: Box::new(JsExpr::this_member("$emit")),
            args: call_args,
        }))
    }
}
