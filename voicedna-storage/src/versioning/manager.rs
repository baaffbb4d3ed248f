//! Allocates version numbers and persists new version rows.

use chrono::Utc;
use rusqlite::Connection;
use uuid::Uuid;

use voicedna_core::dna::{ProfileVersion, VersionDraft};
use voicedna_core::errors::{DnaError, DnaResult, StorageError};

use crate::queries::version_ops;

/// Creates new profile versions with strictly increasing numbers.
pub struct VersionManager;

impl VersionManager {
    /// Persist a draft as the next version in the clone's chain.
    ///
    /// Allocation is max + 1 (1 if the clone has no versions). If the
    /// UNIQUE constraint reports a conflict because another writer
    /// allocated the same number first, the number is recomputed and the
    /// insert retried exactly once; a second conflict surfaces the error.
    pub fn create(
        conn: &Connection,
        clone_id: &str,
        draft: VersionDraft,
    ) -> DnaResult<ProfileVersion> {
        match Self::try_create(conn, clone_id, &draft) {
            Err(DnaError::Storage(StorageError::VersionConflict { version_number, .. })) => {
                tracing::warn!(
                    clone_id,
                    version_number,
                    "version allocation conflict, retrying once"
                );
                Self::try_create(conn, clone_id, &draft)
            }
            other => other,
        }
    }

    fn try_create(
        conn: &Connection,
        clone_id: &str,
        draft: &VersionDraft,
    ) -> DnaResult<ProfileVersion> {
        let version_number = version_ops::next_version_number(conn, clone_id)?;
        let version = ProfileVersion {
            id: Uuid::new_v4().to_string(),
            clone_id: clone_id.to_string(),
            version_number,
            dna: draft.dna.clone(),
            prominence_scores: draft.prominence_scores.clone(),
            trigger: draft.trigger,
            model_used: draft.model_used.clone(),
            created_at: Utc::now(),
        };
        version_ops::insert_version(conn, &version)?;
        tracing::debug!(
            clone_id,
            version_number,
            trigger = %version.trigger,
            "created profile version"
        );
        Ok(version)
    }
}
