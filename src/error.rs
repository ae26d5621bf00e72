//! Error types shared across the extension.
//!
//! DESIGN
//! ======
//! Only two failure classes exist: configuration that the panel cannot render
//! without, and field documents that do not fit the closed field schema.
//! Everything else (absent host API, unresolved selection, widget failures)
//! degrades to an empty or no-op state and never becomes an error.

/// Fatal configuration problems, meant for the operator rather than the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable was never configured.
    #[error("Missing environment variable: {0}")]
    MissingVariable(&'static str),
    /// The host-supplied configuration document could not be parsed.
    #[error("invalid extension config: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Invalid(err.to_string())
    }
}

/// Problems reading, replacing, or validating schema-driven fields.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// The `type` tag is not one of the known field kinds.
    #[error("unknown field type: {0}")]
    UnknownType(String),
    /// The document is not a valid field of its declared kind.
    #[error("malformed field: {0}")]
    Malformed(String),
    /// A replacement tried to change the kind of an existing field.
    #[error("field {id} is {expected}, replacement is {actual}")]
    KindMismatch { id: String, expected: &'static str, actual: &'static str },
    /// No field with this id exists in the list.
    #[error("field not found: {0}")]
    NotFound(String),
    /// A value or preset is outside of what the field kind allows.
    #[error("invalid {kind} field {id}: {reason}")]
    Invalid { id: String, kind: &'static str, reason: String },
}
