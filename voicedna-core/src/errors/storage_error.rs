/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed: {reason}")]
    MigrationFailed { reason: String },

    #[error("version {version_number} already exists for clone '{clone_id}'")]
    VersionConflict {
        clone_id: String,
        version_number: i64,
    },
}
