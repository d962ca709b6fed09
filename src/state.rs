/// State extraction
use indexmap::IndexMap;
use serde_json::Value;

use crate::uidl::StateDefinition;

/// Project state definitions onto their initial-data mapping: each key
/// maps to its declared default value. Pure and total.
pub fn extract_state_object(
    state_definitions: &IndexMap<String, StateDefinition>,
) -> IndexMap<String, Value> {
    state_definitions
        .iter()
        .map(|(key, definition)| (key.clone(), definition.default_value.clone()))
        .collect()
}
