use std::fmt;

use serde::Serialize;

use voicedna_core::constants::{DIFFERENT_THRESHOLD_POINTS, VERY_DIFFERENT_THRESHOLD_POINTS};
use voicedna_core::dna::Score;

/// How far apart two clones are on one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    Similar,
    Different,
    VeryDifferent,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Classification::Similar => "Similar",
            Classification::Different => "Different",
            Classification::VeryDifferent => "Very Different",
        };
        f.write_str(s)
    }
}

/// Classify the gap between two optional scores.
///
/// Missing scores count as zero. Boundaries are inclusive toward the
/// higher bucket: exactly 15 points is Different, exactly 40 is Very
/// Different.
pub fn classify(a: Option<Score>, b: Option<Score>) -> Classification {
    let a = a.map_or(0.0, Score::value);
    let b = b.map_or(0.0, Score::value);
    let delta = (a - b).abs() * 100.0;

    if delta >= VERY_DIFFERENT_THRESHOLD_POINTS {
        Classification::VeryDifferent
    } else if delta >= DIFFERENT_THRESHOLD_POINTS {
        Classification::Different
    } else {
        Classification::Similar
    }
}
