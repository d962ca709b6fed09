/// Fatal generation errors
use thiserror::Error;

use crate::uidl::PropDefinition;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The UIDL declared a prop with a type tag outside the recognized
    /// set. Halts generation of the enclosing component; the message
    /// carries the serialized offending definition for diagnosability.
    #[error("unsupported prop type for \"{prop}\": {definition}")]
    UnsupportedPropType { prop: String, definition: String },
}

impl Error {
    pub(crate) fn unsupported_prop_type(prop: &str, definition: &PropDefinition) -> Error {
        let serialized = serde_json::to_string(definition)
            .unwrap_or_else(|_| format!("{definition:?}"));
        Error::UnsupportedPropType {
            prop: prop.to_string(),
            definition: serialized,
        }
    }
}
