use super::{ConfigError, EstimateError, StorageError};

/// Top-level error type for the SecureCheck engine.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum SecureCheckError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("estimation error: {0}")]
    Estimate(#[from] EstimateError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("unknown insight: {id}")]
    UnknownInsight { id: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias.
pub type SecureCheckResult<T> = Result<T, SecureCheckError>;
