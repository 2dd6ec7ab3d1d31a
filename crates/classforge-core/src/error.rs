//! Error types for class generation

use thiserror::Error;

/// Result type alias for generation operations
pub type ClassGenResult<T> = Result<T, ClassGenError>;

/// Error type for generation operations
#[derive(Error, Debug)]
pub enum ClassGenError {
    /// The schema asks for something it does not supply enough data for
    #[error("configuration error: {0}")]
    Configuration(String),

    /// No template is registered under the requested identifier
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Schema JSON could not be parsed
    #[error("schema error: {0}")]
    Schema(#[from] serde_json::Error),

    /// Generator configuration could not be parsed
    #[error("invalid configuration file: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O error while reading templates or configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClassGenError {
    /// Constructors were requested for a class without a name.
    pub fn missing_class_name() -> Self {
        ClassGenError::Configuration("name of class required to generate constructors".into())
    }

    /// Returns a stable numeric code, used as the CLI exit status
    pub fn error_code(&self) -> u8 {
        match self {
            ClassGenError::Configuration(_) => 2,
            ClassGenError::TemplateNotFound(_) => 3,
            ClassGenError::Schema(_) => 4,
            ClassGenError::Config(_) => 5,
            ClassGenError::Io(_) => 6,
        }
    }
}
