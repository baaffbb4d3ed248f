//! Error types shared across the workspace.
//!
//! Domain errors live in their own modules; `DnaError` aggregates them so
//! crate boundaries can use a single result alias.

pub mod storage_error;
pub mod validation_error;

pub use storage_error::StorageError;
pub use validation_error::ValidationError;

/// Top-level error type for all Voice DNA operations.
#[derive(Debug, thiserror::Error)]
pub enum DnaError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no voice DNA found for clone '{clone_id}'")]
    ProfileNotFound { clone_id: String },

    #[error("version {version_number} not found for clone '{clone_id}'")]
    VersionNotFound {
        clone_id: String,
        version_number: i64,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Workspace-wide result alias.
pub type DnaResult<T> = Result<T, DnaError>;
