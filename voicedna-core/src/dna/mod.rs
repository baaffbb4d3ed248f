//! The Voice DNA data model: dimensions, scores, typed dimension content,
//! provenance triggers, and the versioned profile row.

pub mod dimension;
pub mod profile;
pub mod prominence;
pub mod score;
pub mod trigger;
pub mod types;

pub use dimension::Dimension;
pub use profile::{ProfileVersion, VersionDraft};
pub use prominence::ProminenceScores;
pub use score::Score;
pub use trigger::Trigger;
pub use types::VoiceDna;
