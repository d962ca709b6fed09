/// JavaScript syntax nodes for the generated component declaration
///
/// The generator never renders source text; it produces these nodes and a
/// downstream printer turns them into JavaScript. Only the node kinds the
/// component declaration actually needs are modeled.
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum JsExpr {
    Ident(String),
    Str(String),
    Num(serde_json::Number),
    Bool(bool),
    Null,
    Array(Vec<JsExpr>),
    Object(Vec<ObjectMember>),
    /// Arrow function with an expression body, e.g. `() => [1, 2]`.
    Arrow { params: Vec<String>, body: Box<JsExpr> },
    Unary { op: UnaryOp, operand: Box<JsExpr> },
    Member { object: Box<JsExpr>, property: String },
    Call { callee: Box<JsExpr>, args: Vec<JsExpr> },
    Assign { target: Box<JsExpr>, value: Box<JsExpr> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    Not,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum JsStmt {
    Expression(JsExpr),
    Return(JsExpr),
}

/// A member of an object expression: a key/value property (possibly a
/// shorthand binding like `{ Dep }`) or a method with a statement body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ObjectMember {
    Property {
        key: String,
        value: JsExpr,
        shorthand: bool,
    },
    Method {
        key: String,
        body: Vec<JsStmt>,
    },
}

impl JsExpr {
    pub fn ident(name: &str) -> JsExpr {
        JsExpr::Ident(name.to_string())
    }

    pub fn str(value: &str) -> JsExpr {
        JsExpr::Str(value.to_string())
    }

    /// Member access on the component instance, `this.<field>`.
    pub fn this_member(field: &str) -> JsExpr {
        JsExpr::Member {
            object: Box::new(JsExpr::ident("this")),
            property: field.to_string(),
        }
    }

    /// Zero-argument arrow function wrapping `body`.
    pub fn factory(body: JsExpr) -> JsExpr {
        JsExpr::Arrow {
            params: Vec::new(),
            body: Box::new(body),
        }
    }
}

impl ObjectMember {
    pub fn property(key: &str, value: JsExpr) -> ObjectMember {
        ObjectMember::Property {
            key: key.to_string(),
            value,
            shorthand: false,
        }
    }

    /// Shorthand self-referential binding, `{ Dep }`.
    pub fn shorthand(name: &str) -> ObjectMember {
        ObjectMember::Property {
            key: name.to_string(),
            value: JsExpr::ident(name),
            shorthand: true,
        }
    }

    pub fn method(key: &str, body: Vec<JsStmt>) -> ObjectMember {
        ObjectMember::Method {
            key: key.to_string(),
            body,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            ObjectMember::Property { key, .. } => key,
            ObjectMember::Method { key, .. } => key,
        }
    }
}

/// A value destined for a generated object literal: a plain UIDL literal,
/// a pre-built syntax node that must be spliced in as-is, or a nested
/// mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectValue {
    Plain(Value),
    Node(JsExpr),
    Map(IndexMap<String, ObjectValue>),
}

/// Syntax-building capability the generator components depend on. The
/// default implementation is [`JsAstBuilder`]; tests can substitute their
/// own.
pub trait SyntaxBuilder {
    /// Convert an arbitrary UIDL literal value into an expression node.
    fn convert_value_to_literal(&self, value: &Value) -> JsExpr;

    /// Convert a mapping into an equivalent object expression, splicing
    /// pre-built nodes and recursing into nested maps.
    fn object_to_object_expression(&self, map: &IndexMap<String, ObjectValue>) -> JsExpr;
}

pub struct JsAstBuilder;

impl SyntaxBuilder for JsAstBuilder {
    fn convert_value_to_literal(&self, value: &Value) -> JsExpr {
        match value {
            Value::Null => JsExpr::Null,
            Value::Bool(b) => JsExpr::Bool(*b),
            Value::Number(n) => JsExpr::Num(n.clone()),
            Value::String(s) => JsExpr::Str(s.clone()),
            Value::Array(items) => {
                JsExpr::Array(items.iter().map(|v| self.convert_value_to_literal(v)).collect())
            }
            Value::Object(fields) => JsExpr::Object(
                fields
                    .iter()
                    .map(|(key, v)| ObjectMember::property(key, self.convert_value_to_literal(v)))
                    .collect(),
            ),
        }
    }

    fn object_to_object_expression(&self, map: &IndexMap<String, ObjectValue>) -> JsExpr {
        let members = map
            .iter()
            .map(|(key, value)| {
                let expr = match value {
                    ObjectValue::Plain(v) => self.convert_value_to_literal(v),
                    ObjectValue::Node(node) => node.clone(),
                    ObjectValue::Map(nested) => self.object_to_object_expression(nested),
                };
                ObjectMember::property(key, expr)
            })
            .collect();
        JsExpr::Object(members)
    }
}
