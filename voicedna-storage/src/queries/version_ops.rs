//! Insert and fetch operations for profile version rows.
//!
//! Rows are append-only: there is no UPDATE or DELETE here on purpose.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use voicedna_core::dna::{ProfileVersion, ProminenceScores, Trigger, VoiceDna};
use voicedna_core::errors::{DnaResult, StorageError};

use crate::to_storage_err;

const COLUMNS: &str = "id, clone_id, version_number, dimension_data, prominence_scores, \
                       \"trigger\", model_used, created_at";

/// Insert a new version row.
///
/// A UNIQUE(clone_id, version_number) violation is mapped to
/// `StorageError::VersionConflict` so the caller can recompute the
/// number and retry.
pub fn insert_version(conn: &Connection, version: &ProfileVersion) -> DnaResult<()> {
    let dimension_data = serde_json::to_string(&version.dna)?;
    let prominence_scores = version
        .prominence_scores
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    let result = conn.execute(
        "INSERT INTO profile_versions (
            id, clone_id, version_number, dimension_data, prominence_scores,
            \"trigger\", model_used, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            version.id,
            version.clone_id,
            version.version_number,
            dimension_data,
            prominence_scores,
            version.trigger.as_str(),
            version.model_used,
            version.created_at.to_rfc3339(),
        ],
    );

    match result {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(StorageError::VersionConflict {
                clone_id: version.clone_id.clone(),
                version_number: version.version_number,
            }
            .into())
        }
        Err(e) => Err(to_storage_err(e.to_string())),
    }
}

/// A specific version of a clone's chain.
pub fn get_at_version(
    conn: &Connection,
    clone_id: &str,
    version_number: i64,
) -> DnaResult<Option<ProfileVersion>> {
    let raw = conn
        .query_row(
            &format!(
                "SELECT {COLUMNS} FROM profile_versions
                 WHERE clone_id = ?1 AND version_number = ?2"
            ),
            params![clone_id, version_number],
            raw_from_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(RawVersion::into_version).transpose()
}

/// The row with the highest version number for a clone.
pub fn get_current(conn: &Connection, clone_id: &str) -> DnaResult<Option<ProfileVersion>> {
    let raw = conn
        .query_row(
            &format!(
                "SELECT {COLUMNS} FROM profile_versions
                 WHERE clone_id = ?1
                 ORDER BY version_number DESC
                 LIMIT 1"
            ),
            params![clone_id],
            raw_from_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(RawVersion::into_version).transpose()
}

/// All versions for a clone, newest first.
pub fn list_versions(conn: &Connection, clone_id: &str) -> DnaResult<Vec<ProfileVersion>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {COLUMNS} FROM profile_versions
             WHERE clone_id = ?1
             ORDER BY version_number DESC"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![clone_id], raw_from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut versions = Vec::new();
    for raw in rows {
        versions.push(raw.map_err(|e| to_storage_err(e.to_string()))?.into_version()?);
    }
    Ok(versions)
}

/// Next version number to allocate: max + 1, or 1 if the clone has none.
pub fn next_version_number(conn: &Connection, clone_id: &str) -> DnaResult<i64> {
    let max: Option<i64> = conn
        .query_row(
            "SELECT MAX(version_number) FROM profile_versions WHERE clone_id = ?1",
            params![clone_id],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(max.unwrap_or(0) + 1)
}

/// Whether a clone has any version at all.
pub fn has_versions(conn: &Connection, clone_id: &str) -> DnaResult<bool> {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM profile_versions WHERE clone_id = ?1)",
            params![clone_id],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(exists != 0)
}

// ── Row mapping ──────────────────────────────────────────────────────

/// Column values as stored, before JSON/enum/timestamp parsing.
struct RawVersion {
    id: String,
    clone_id: String,
    version_number: i64,
    dimension_data: String,
    prominence_scores: Option<String>,
    trigger: String,
    model_used: String,
    created_at: String,
}

fn raw_from_row(row: &Row<'_>) -> rusqlite::Result<RawVersion> {
    Ok(RawVersion {
        id: row.get(0)?,
        clone_id: row.get(1)?,
        version_number: row.get(2)?,
        dimension_data: row.get(3)?,
        prominence_scores: row.get(4)?,
        trigger: row.get(5)?,
        model_used: row.get(6)?,
        created_at: row.get(7)?,
    })
}

impl RawVersion {
    fn into_version(self) -> DnaResult<ProfileVersion> {
        let dna: VoiceDna = serde_json::from_str(&self.dimension_data)
            .map_err(|e| to_storage_err(format!("corrupt dimension_data: {e}")))?;
        let prominence_scores: Option<ProminenceScores> = self
            .prominence_scores
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(|e| to_storage_err(format!("corrupt prominence_scores: {e}")))?;
        let trigger: Trigger = self.trigger.parse().map_err(to_storage_err)?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| to_storage_err(format!("corrupt created_at: {e}")))?
            .with_timezone(&Utc);

        Ok(ProfileVersion {
            id: self.id,
            clone_id: self.clone_id,
            version_number: self.version_number,
            dna,
            prominence_scores,
            trigger,
            model_used: self.model_used,
            created_at,
        })
    }
}
