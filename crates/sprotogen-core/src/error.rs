//! Error types for sproto generation

use thiserror::Error;

/// Result type alias for generation operations
pub type GenResult<T> = Result<T, GenError>;

/// Boxed collaborator error, passed through unchanged
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for generation operations
#[derive(Error, Debug)]
pub enum GenError {
    /// The descriptor tree breaks an invariant the schema compiler guarantees
    #[error("{file}: {violation}")]
    Contract {
        file: String,
        violation: ContractViolation,
    },

    /// The descriptor tree could not be decoded
    #[error("descriptor error: {0}")]
    Descriptor(#[from] serde_json::Error),

    /// Rendering collaborator failed
    #[error("{file}: render failed: {source}")]
    Render {
        file: String,
        #[source]
        source: BoxError,
    },

    /// Formatting collaborator failed
    #[error("{file}: format failed: {source}")]
    Format {
        file: String,
        #[source]
        source: BoxError,
    },

    /// Invalid generator configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O error while reading descriptors or configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenError {
    /// Name of the schema file the error belongs to, if known
    pub fn file(&self) -> Option<&str> {
        match self {
            GenError::Contract { file, .. }
            | GenError::Render { file, .. }
            | GenError::Format { file, .. } => Some(file),
            GenError::Descriptor(_) | GenError::Config(_) | GenError::Io(_) => None,
        }
    }
}

/// Broken upstream invariant. Any of these aborts the whole file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// File descriptor has no name
    #[error("file descriptor has no name")]
    MissingFileName,

    /// A message or enum has no name; `index` counts within its own list
    #[error("{kind} #{index} has no name")]
    MissingDescriptorName { kind: &'static str, index: usize },

    /// A member of a descriptor has no name
    #[error("{descriptor}: member #{index} has no name")]
    MissingFieldName { descriptor: String, index: usize },

    /// A message field carries no type
    #[error("{descriptor}.{field}: field has no type")]
    MissingFieldType { descriptor: String, field: String },

    /// A struct or enum field does not name its referenced type
    #[error("{descriptor}.{field}: referenced type is not resolved")]
    UnresolvedReference { descriptor: String, field: String },

    /// Two fields of one message share a tag
    #[error("{descriptor}: duplicate tag {tag}")]
    DuplicateTag { descriptor: String, tag: i32 },

    /// Namespace is empty
    #[error("namespace is empty")]
    EmptyNamespace,
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML configuration could not be parsed
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON configuration could not be parsed
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A required value is missing or empty
    #[error("configuration error: {0}")]
    Invalid(String),
}
