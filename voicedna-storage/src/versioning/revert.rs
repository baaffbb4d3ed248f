//! Revert copies a historical version's content into a brand-new version.

use rusqlite::Connection;

use voicedna_core::dna::{ProfileVersion, VersionDraft};
use voicedna_core::errors::{DnaError, DnaResult};

use crate::queries::version_ops;
use crate::versioning::VersionManager;

/// Re-create `target_version`'s content as the newest version of the
/// chain, trigger `revert`, empty model.
///
/// History is never rewritten: two reverts to the same target produce
/// two rows with identical content but distinct numbers and timestamps.
pub fn revert_to_version(
    conn: &Connection,
    clone_id: &str,
    target_version: i64,
) -> DnaResult<ProfileVersion> {
    let target = version_ops::get_at_version(conn, clone_id, target_version)?.ok_or_else(|| {
        DnaError::VersionNotFound {
            clone_id: clone_id.to_string(),
            version_number: target_version,
        }
    })?;

    VersionManager::create(conn, clone_id, VersionDraft::revert_of(&target))
}
