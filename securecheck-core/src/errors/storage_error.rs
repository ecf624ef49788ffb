//! Storage-layer errors for SQLite operations.

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("dataset import failed: {message}")]
    Import { message: String },
}

impl StorageError {
    /// Wrap any rusqlite-shaped error message.
    pub fn sqlite(message: impl Into<String>) -> Self {
        Self::Sqlite {
            message: message.into(),
        }
    }
}
