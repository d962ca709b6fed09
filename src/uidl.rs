/// UIDL input model
///
/// A UIDL document is a framework-agnostic description of a UI component:
/// its props, its local state and the declarative statements its event
/// handlers perform. These types mirror the persisted JSON shape; the
/// `type` field of a prop definition is kept as a raw string so that
/// unknown tags survive deserialization and are rejected at the
/// type-mapping boundary instead.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDefinition {
    #[serde(rename = "type")]
    pub prop_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub is_required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDefinition {
    pub default_value: Value,
}

/// One declarative side effect of a UI event: either a local state
/// mutation or an invocation of a capability supplied by the parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventHandlerStatement {
    #[serde(rename_all = "camelCase")]
    StateChange { modifies: String, new_state: Value },
    #[serde(rename_all = "camelCase")]
    PropCall {
        #[serde(default)]
        calls: Option<String>,
        #[serde(default)]
        args: Vec<Value>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentUIDL {
    pub name: String,
    #[serde(default)]
    pub prop_definitions: IndexMap<String, PropDefinition>,
    #[serde(default)]
    pub state_definitions: IndexMap<String, StateDefinition>,
}

impl ComponentUIDL {
    /// Deserialize a UIDL component from its persisted JSON form.
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }
}
