use thiserror::Error;

/// Key release policy error types.
///
/// These are type-level failures raised while loading or shaping inputs.
/// An unmet policy is never an error: the evaluator reports it as a
/// `success = false` verdict.
#[derive(Error, Debug)]
pub enum KrpError {
    /// Policy document is structurally not a key release policy
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    /// Policy declares an operator group with no registered comparison
    #[error("Unknown operator group: {group}")]
    UnknownOperator { group: String },

    /// Claims document is structurally not a claims map
    #[error("Invalid claims: {0}")]
    InvalidClaims(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for KrpError {
    fn from(err: serde_json::Error) -> Self {
        KrpError::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for KrpError {
    fn from(err: serde_yaml::Error) -> Self {
        KrpError::SerializationError(err.to_string())
    }
}

/// Result type alias for key release policy operations
pub type Result<T> = std::result::Result<T, KrpError>;
