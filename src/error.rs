//! Error types for schema resolution

use thiserror::Error;

/// Result type for resolver operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Schema resolution errors
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A reference could not be resolved against the registry. Carries the
    /// fully-qualified lookup key, which the file loader also uses as the
    /// dependency filename stem.
    #[error("Unknown type: {name}")]
    UnknownType { name: String },

    #[error("Schema node missing required attribute: {0}")]
    MissingAttribute(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
