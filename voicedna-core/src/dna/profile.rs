use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::prominence::ProminenceScores;
use super::trigger::Trigger;
use super::types::VoiceDna;
use crate::errors::ValidationError;

/// One immutable row of a clone's version chain.
///
/// `(clone_id, version_number)` is unique, numbers are gapless from 1,
/// and the current profile is always derived as the row with the highest
/// number, never a stored flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileVersion {
    /// UUID v4 identifier.
    pub id: String,
    /// Owning clone.
    pub clone_id: String,
    /// Position in the clone's version chain, starting at 1.
    pub version_number: i64,
    /// Typed dimension content.
    pub dna: VoiceDna,
    /// Partial prominence scores; None until an analysis computes them.
    pub prominence_scores: Option<ProminenceScores>,
    /// Why this version was created.
    pub trigger: Trigger,
    /// Provenance string; empty for manual edits and reverts.
    pub model_used: String,
    pub created_at: DateTime<Utc>,
}

impl ProfileVersion {
    /// Whether two versions carry the same profile content.
    ///
    /// Reverting twice to the same target yields rows that are
    /// `content_eq` but have distinct ids, numbers, and timestamps.
    pub fn content_eq(&self, other: &Self) -> bool {
        self.dna == other.dna && self.prominence_scores == other.prominence_scores
    }
}

/// What a caller hands to `create_version`: everything except the fields
/// the store assigns (id, version number, timestamp).
///
/// Callers are responsible for merging partial edits into a complete
/// `VoiceDna` before building a draft; no partial merge happens here.
#[derive(Debug, Clone)]
pub struct VersionDraft {
    pub dna: VoiceDna,
    pub prominence_scores: Option<ProminenceScores>,
    pub trigger: Trigger,
    pub model_used: String,
}

impl VersionDraft {
    /// Draft from a raw analysis-collaborator payload.
    ///
    /// Validates that every canonical dimension key is present; the
    /// missing-key check applies to all non-manual-edit paths.
    pub fn from_payload(
        dimension_data: &Value,
        prominence_scores: Option<ProminenceScores>,
        trigger: Trigger,
        model_used: &str,
    ) -> Result<Self, ValidationError> {
        let dna = VoiceDna::from_value(dimension_data)?;
        Ok(Self {
            dna,
            prominence_scores,
            trigger,
            model_used: model_used.to_string(),
        })
    }

    /// Draft for a manual edit: typed replacement content, empty model.
    /// Scores may be carried over (stale until the next analysis) or
    /// omitted.
    pub fn manual_edit(dna: VoiceDna, prominence_scores: Option<ProminenceScores>) -> Self {
        Self {
            dna,
            prominence_scores,
            trigger: Trigger::ManualEdit,
            model_used: String::new(),
        }
    }

    /// Draft that re-creates a historical version's content verbatim.
    pub fn revert_of(target: &ProfileVersion) -> Self {
        Self {
            dna: target.dna.clone(),
            prominence_scores: target.prominence_scores.clone(),
            trigger: Trigger::Revert,
            model_used: String::new(),
        }
    }
}
