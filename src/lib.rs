/// UIDL to Vue component-declaration generator
///
/// Transforms a framework-agnostic component description (UIDL) into the
/// abstract declaration of a stateful Vue component: prop descriptors,
/// an initial-data function and compiled event-handler methods. The
/// output is a tree of JavaScript syntax nodes; rendering it to source
/// text is a downstream concern.
pub mod component;
pub mod diagnostics;
pub mod error;
pub mod events;
pub mod js_ast;
pub mod props;
pub mod state;
pub mod uidl;

use indexmap::IndexMap;
use serde_json::Value;

pub use component::{ComponentAssembler, ComponentDeclaration};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::{Error, Result};
pub use events::{EventStatementCompiler, TOGGLE_SENTINEL};
pub use js_ast::{JsAstBuilder, JsExpr, JsStmt, ObjectMember, ObjectValue, SyntaxBuilder, UnaryOp};
pub use props::{PropDefault, PropDescriptor, PropType, PropsMapper};
pub use state::extract_state_object;
pub use uidl::{ComponentUIDL, EventHandlerStatement, PropDefinition, StateDefinition};

/// Generate a component declaration with the default syntax builder.
///
/// `dependencies`, `data` and `methods` are precomputed by the caller;
/// `data` typically comes from [`extract_state_object`]. Non-fatal
/// problems land in `diagnostics`; the only fatal failure is an
/// unsupported prop type.
pub fn generate_component(
    uidl: &ComponentUIDL,
    dependencies: &[String],
    data: &IndexMap<String, Value>,
    methods: &IndexMap<String, Vec<EventHandlerStatement>>,
    diagnostics: &mut Diagnostics,
) -> Result<ComponentDeclaration> {
    let builder = JsAstBuilder;
    ComponentAssembler::new(&builder).assemble(uidl, dependencies, data, methods, diagnostics)
}
