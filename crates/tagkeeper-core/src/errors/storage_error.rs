/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("invalid key: {reason}")]
    InvalidKey { reason: String },

    #[error("corrupt row for {key}: {details}")]
    CorruptRow { key: String, details: String },
}
