use super::ValidationError;

/// Top-level error type for the regcost workspace.
///
/// Engine operations only ever return [`RegcostError::Validation`]; the other
/// variants belong to the config and serialization surface.
#[derive(Debug, thiserror::Error)]
pub enum RegcostError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl RegcostError {
    /// Whether the caller should surface this as a client error.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::SerializationError(_))
    }
}

/// Convenience alias used across the workspace.
pub type RegcostResult<T> = Result<T, RegcostError>;
