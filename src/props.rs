/// Prop definition mapping
///
/// Translates UIDL prop definitions into Vue prop descriptors: the fixed
/// type-tag table, the default-value aliasing policy and the `required`
/// merge.
use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::js_ast::{JsExpr, ObjectValue, SyntaxBuilder};
use crate::uidl::PropDefinition;

/// Closed set of recognized UIDL prop type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropType {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Func,
}

impl PropType {
    pub fn from_tag(tag: &str) -> Option<PropType> {
        match tag {
            "string" => Some(PropType::String),
            "number" => Some(PropType::Number),
            "boolean" => Some(PropType::Boolean),
            "array" => Some(PropType::Array),
            "object" => Some(PropType::Object),
            "func" => Some(PropType::Func),
            _ => None,
        }
    }

    /// The JavaScript runtime-type constructor Vue checks props against.
    pub fn runtime_name(&self) -> &'static str {
        match self {
            PropType::String => "String",
            PropType::Number => "Number",
            PropType::Boolean => "Boolean",
            PropType::Array => "Array",
            PropType::Object => "Object",
            PropType::Func => "Function",
        }
    }

    /// Reference-typed defaults must be wrapped in factories so that
    /// every component instance owns an independent value.
    pub fn is_reference(&self) -> bool {
        matches!(self, PropType::Array | PropType::Object)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropDefault {
    Literal(Value),
    /// Zero-argument factory expression yielding a fresh default.
    Factory(JsExpr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropDescriptor {
    pub required: bool,
    pub prop_type: PropType,
    pub default: Option<PropDefault>,
}

impl PropDescriptor {
    /// Render the descriptor for the generated `props` object: a bare
    /// runtime-type identifier when nothing else is specified, otherwise
    /// an object literal with `required` first, then `type`, then
    /// `default`.
    pub fn to_object_value(&self) -> ObjectValue {
        let type_node = JsExpr::ident(self.prop_type.runtime_name());
        if !self.required && self.default.is_none() {
            return ObjectValue::Node(type_node);
        }

        let mut fields = IndexMap::new();
        if self.required {
            fields.insert("required".to_string(), ObjectValue::Plain(Value::Bool(true)));
        }
        fields.insert("type".to_string(), ObjectValue::Node(type_node));
        if let Some(default) = &self.default {
            let value = match default {
                PropDefault::Literal(v) => ObjectValue::Plain(v.clone()),
                PropDefault::Factory(expr) => ObjectValue::Node(expr.clone()),
            };
            fields.insert("default".to_string(), value);
        }
        ObjectValue::Map(fields)
    }
}

pub struct PropsMapper<'a, B: SyntaxBuilder> {
    builder: &'a B,
}

impl<'a, B: SyntaxBuilder> PropsMapper<'a, B> {
    pub fn new(builder: &'a B) -> Self {
        PropsMapper { builder }
    }

    /// Map every UIDL prop definition to its descriptor, preserving
    /// declaration order. An unrecognized type tag is fatal.
    pub fn map(
        &self,
        definitions: &IndexMap<String, PropDefinition>,
    ) -> Result<IndexMap<String, PropDescriptor>> {
        let mut descriptors = IndexMap::new();
        for (name, definition) in definitions {
            let prop_type = PropType::from_tag(&definition.prop_type)
                .ok_or_else(|| Error::unsupported_prop_type(name, definition))?;

            let default = match &definition.default_value {
                Some(value) if prop_type.is_reference() => Some(PropDefault::Factory(
                    JsExpr::factory(self.builder.convert_value_to_literal(value)),
                )),
                Some(value) => Some(PropDefault::Literal(value.clone())),
                None => None,
            };

            descriptors.insert(
                name.clone(),
                PropDescriptor {
                    required: definition.is_required,
                    prop_type,
                    default,
                },
            );
        }
        Ok(descriptors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::js_ast::JsAstBuilder;
    use serde_json::json;

    fn definition(tag: &str, default: Option<Value>, required: bool) -> PropDefinition {
        PropDefinition {
            prop_type: tag.to_string(),
            default_value: default,
            is_required: required,
        }
    }

    fn map_single(def: PropDefinition) -> Result<IndexMap<String, PropDescriptor>> {
        let builder = JsAstBuilder;
        let mut definitions = IndexMap::new();
        definitions.insert("value".to_string(), def);
        PropsMapper::new(&builder).map(&definitions)
    }

    #[test]
    fn maps_every_recognized_tag_to_its_runtime_type() {
        let table = [
            ("string", "String"),
            ("number", "Number"),
            ("boolean", "Boolean"),
            ("array", "Array"),
            ("object", "Object"),
            ("func", "Function"),
        ];
        for (tag, runtime) in table {
            let descriptors = map_single(definition(tag, None, false)).unwrap();
            assert_eq!(descriptors["value"].prop_type.runtime_name(), runtime);
        }
    }

    #[test]
    fn unknown_tag_is_fatal_and_carries_the_definition() {
        let def = definition("custom", Some(json!(3)), false);
        let serialized = serde_json::to_string(&def).unwrap();
        let err = map_single(def).unwrap_err();
        assert!(
            err.to_string().contains(&serialized),
            "error should embed the offending definition: {err}"
        );
    }

    #[test]
    fn reference_defaults_become_factories() {
        for (tag, default) in [("array", json!([1, 2])), ("object", json!({ "a": 1 }))] {
            let descriptors = map_single(definition(tag, Some(default), false)).unwrap();
            match &descriptors["value"].default {
                Some(PropDefault::Factory(JsExpr::Arrow { params, .. })) => {
                    assert!(params.is_empty(), "factory must take no arguments");
                }
                other => panic!("expected factory default for {tag}, got {other:?}"),
            }
        }
    }

    #[test]
    fn scalar_defaults_stay_literal() {
        let descriptors = map_single(definition("number", Some(json!(0)), false)).unwrap();
        assert_eq!(
            descriptors["value"].default,
            Some(PropDefault::Literal(json!(0)))
        );
    }

    #[test]
    fn required_descriptor_keeps_type_and_orders_required_first() {
        let descriptors = map_single(definition("string", None, true)).unwrap();
        let ObjectValue::Map(fields) = descriptors["value"].to_object_value() else {
            panic!("required prop must render as an object descriptor");
        };
        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["required", "type"]);
        assert_eq!(fields["required"], ObjectValue::Plain(json!(true)));
        assert_eq!(fields["type"], ObjectValue::Node(JsExpr::ident("String")));
    }

    #[test]
    fn bare_type_when_optional_and_defaultless() {
        let descriptors = map_single(definition("func", None, false)).unwrap();
        assert_eq!(
            descriptors["value"].to_object_value(),
            ObjectValue::Node(JsExpr::ident("Function"))
        );
    }
}
