//! v001: profile_versions table.
//!
//! The UNIQUE(clone_id, version_number) constraint is the cross-process
//! backstop for version allocation races; VersionManager retries once on
//! a detected conflict.

use rusqlite::Connection;

use voicedna_core::errors::{DnaError, StorageError};

pub fn migrate(conn: &Connection) -> Result<(), DnaError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS profile_versions (
            id                TEXT PRIMARY KEY,
            clone_id          TEXT NOT NULL,
            version_number    INTEGER NOT NULL,
            dimension_data    TEXT NOT NULL,
            prominence_scores TEXT,
            \"trigger\"         TEXT NOT NULL,
            model_used        TEXT NOT NULL DEFAULT '',
            created_at        TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            UNIQUE (clone_id, version_number)
        );

        CREATE INDEX IF NOT EXISTS idx_versions_clone ON profile_versions(clone_id);
        ",
    )
    .map_err(|e| {
        DnaError::Storage(StorageError::MigrationFailed {
            reason: e.to_string(),
        })
    })?;
    Ok(())
}
