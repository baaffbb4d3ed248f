use serde::Serialize;

use voicedna_core::dna::{Dimension, ProfileVersion, Score};

use crate::classify::{classify, Classification};

/// One row of the side-by-side comparison view.
///
/// Raw optional scores are preserved so the view can render "—" for a
/// dimension that was never scored, even though classification treated
/// it as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionComparison {
    pub dimension: Dimension,
    pub score_a: Option<Score>,
    pub score_b: Option<Score>,
    pub classification: Classification,
}

/// Compare two clones' profiles dimension by dimension.
///
/// Always returns exactly 9 rows in canonical order, regardless of how
/// sparsely either profile populated its scores.
pub fn compare_profiles(a: &ProfileVersion, b: &ProfileVersion) -> Vec<DimensionComparison> {
    Dimension::ALL
        .into_iter()
        .map(|dimension| {
            let score_a = a
                .prominence_scores
                .as_ref()
                .and_then(|s| s.get(dimension));
            let score_b = b
                .prominence_scores
                .as_ref()
                .and_then(|s| s.get(dimension));
            DimensionComparison {
                dimension,
                score_a,
                score_b,
                classification: classify(score_a, score_b),
            }
        })
        .collect()
}
