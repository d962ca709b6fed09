/// Component declaration assembly
///
/// Composes the prop descriptors, dependency bindings, initial data and
/// compiled methods into one export-default object expression with a
/// deterministic member order: name, props, components, data, methods.
/// The order affects only generated-source readability, never semantics.
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::events::EventStatementCompiler;
use crate::js_ast::{JsExpr, JsStmt, ObjectMember, ObjectValue, SyntaxBuilder};
use crate::props::PropsMapper;
use crate::uidl::{ComponentUIDL, EventHandlerStatement};

/// The export-default declaration of the assembled component: an ordered
/// sequence of named members, ready for a downstream printer. Owns its
/// whole tree; nothing aliases back into the UIDL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentDeclaration {
    pub members: Vec<ObjectMember>,
}

impl ComponentDeclaration {
    pub fn member_keys(&self) -> Vec<&str> {
        self.members.iter().map(ObjectMember::key).collect()
    }

    pub fn member(&self, key: &str) -> Option<&ObjectMember> {
        self.members.iter().find(|member| member.key() == key)
    }
}

pub struct ComponentAssembler<'a, B: SyntaxBuilder> {
    builder: &'a B,
}

impl<'a, B: SyntaxBuilder> ComponentAssembler<'a, B> {
    pub fn new(builder: &'a B) -> Self {
        ComponentAssembler { builder }
    }

    /// Assemble one component declaration. The dependency list, data
    /// mapping and methods mapping are precomputed by the caller; empty
    /// ones simply leave their member out. Fails only on an unsupported
    /// prop type.
    pub fn assemble(
        &self,
        uidl: &ComponentUIDL,
        dependencies: &[String],
        data: &IndexMap<String, Value>,
        methods: &IndexMap<String, Vec<EventHandlerStatement>>,
        diagnostics: &mut Diagnostics,
    ) -> Result<ComponentDeclaration> {
        let mut members = vec![ObjectMember::property("name", JsExpr::str(&uidl.name))];

        if !uidl.prop_definitions.is_empty() {
            let descriptors = PropsMapper::new(self.builder).map(&uidl.prop_definitions)?;
            let fields: IndexMap<String, ObjectValue> = descriptors
                .iter()
                .map(|(name, descriptor)| (name.clone(), descriptor.to_object_value()))
                .collect();
            members.push(ObjectMember::property(
                "props",
                self.builder.object_to_object_expression(&fields),
            ));
        }

        if !dependencies.is_empty() {
            let bindings = dependencies
                .iter()
                .map(|dependency| ObjectMember::shorthand(dependency))
                .collect();
            members.push(ObjectMember::property("components", JsExpr::Object(bindings)));
        }

        if !data.is_empty() {
            let fields: IndexMap<String, ObjectValue> = data
                .iter()
                .map(|(key, value)| (key.clone(), ObjectValue::Plain(value.clone())))
                .collect();
            let data_object = self.builder.object_to_object_expression(&fields);
            members.push(ObjectMember::method("data", vec![JsStmt::Return(data_object)]));
        }

        if !methods.is_empty() {
            let compiler = EventStatementCompiler::new(self.builder, &uidl.prop_definitions);
            let compiled = compiler.compile_methods(methods, diagnostics);
            let method_members = compiled
                .into_iter()
                .map(|(event, body)| ObjectMember::method(&event, body))
                .collect();
            members.push(ObjectMember::property("methods", JsExpr::Object(method_members)));
        }

        Ok(ComponentDeclaration { members })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::js_ast::JsAstBuilder;
    use serde_json::json;

    fn uidl(name: &str) -> ComponentUIDL {
        ComponentUIDL {
            name: name.to_string(),
            prop_definitions: IndexMap::new(),
            state_definitions: IndexMap::new(),
        }
    }

    #[test]
    fn name_only_when_everything_else_is_empty() {
        let builder = JsAstBuilder;
        let mut diagnostics = Diagnostics::new();
        let declaration = ComponentAssembler::new(&builder)
            .assemble(
                &uidl("Empty"),
                &[],
                &IndexMap::new(),
                &IndexMap::new(),
                &mut diagnostics,
            )
            .unwrap();

        assert_eq!(declaration.member_keys(), vec!["name"]);
        assert_eq!(
            declaration.members[0],
            ObjectMember::property("name", JsExpr::str("Empty"))
        );
    }

    #[test]
    fn dependencies_become_shorthand_bindings() {
        let builder = JsAstBuilder;
        let mut diagnostics = Diagnostics::new();
        let deps = vec!["Bar".to_string(), "Baz".to_string()];
        let declaration = ComponentAssembler::new(&builder)
            .assemble(
                &uidl("Foo"),
                &deps,
                &IndexMap::new(),
                &IndexMap::new(),
                &mut diagnostics,
            )
            .unwrap();

        let Some(ObjectMember::Property { value: JsExpr::Object(bindings), .. }) =
            declaration.member("components")
        else {
            panic!("expected components object");
        };
        assert_eq!(bindings[0], ObjectMember::shorthand("Bar"));
        assert_eq!(bindings[1], ObjectMember::shorthand("Baz"));
    }

    #[test]
    fn data_is_a_method_returning_the_mapping() {
        let builder = JsAstBuilder;
        let mut diagnostics = Diagnostics::new();
        let mut data = IndexMap::new();
        data.insert("count".to_string(), json!(0));

        let declaration = ComponentAssembler::new(&builder)
            .assemble(&uidl("Foo"), &[], &data, &IndexMap::new(), &mut diagnostics)
            .unwrap();

        let Some(ObjectMember::Method { body, .. }) = declaration.member("data") else {
            panic!("expected data method");
        };
        assert_eq!(
            body,
            &vec![JsStmt::Return(JsExpr::Object(vec![ObjectMember::property(
                "count",
                JsExpr::Num(0.into()),
            )]))]
        );
    }

    #[test]
    fn unsupported_prop_type_propagates() {
        let builder = JsAstBuilder;
        let mut diagnostics = Diagnostics::new();
        let mut component = uidl("Broken");
        component.prop_definitions.insert(
            "weird".to_string(),
            crate::uidl::PropDefinition {
                prop_type: "tuple".to_string(),
                default_value: None,
                is_required: false,
            },
        );

        let result = ComponentAssembler::new(&builder).assemble(
            &component,
            &[],
            &IndexMap::new(),
            &IndexMap::new(),
            &mut diagnostics,
        );
        assert!(result.is_err());
    }
}
