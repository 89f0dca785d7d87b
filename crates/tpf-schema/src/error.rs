use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// The instance did not conform; one message per violation.
    #[error("Validation failed: {}", errors.join("; "))]
    ValidationFailed { errors: Vec<String> },

    #[error("Schema compilation error: {0}")]
    Compile(String),
}
