//! # voicedna-storage
//!
//! SQLite persistence for voice DNA version chains: connection pool,
//! migrations, version queries, and the `ProfileStore` engine.
//!
//! The versions table is append-only. There is deliberately no UPDATE
//! path: edits, regenerations, and reverts all allocate a new row, and
//! the current profile is derived as the highest version number.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;
pub mod versioning;

pub use engine::ProfileStore;
pub use versioning::VersionManager;

use voicedna_core::errors::{DnaError, StorageError};

/// Wrap a low-level SQLite failure message in the workspace error type.
pub(crate) fn to_storage_err(message: impl Into<String>) -> DnaError {
    DnaError::Storage(StorageError::SqliteError {
        message: message.into(),
    })
}
