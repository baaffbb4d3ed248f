use serde::Serialize;

use voicedna_core::constants::DELTA_SIGNIFICANCE_POINTS;
use voicedna_core::dna::{Dimension, ProfileVersion};

/// One significant score change, in whole points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionDelta {
    pub dimension: Dimension,
    pub points: i32,
}

impl DimensionDelta {
    /// Human-readable label for the timeline chip.
    pub fn label(&self) -> &'static str {
        self.dimension.label()
    }
}

/// Significant deltas between two versions of one clone, in canonical
/// dimension order.
///
/// A dimension is included only when scored on both sides and the
/// rounded change exceeds the significance gate; if either version has
/// no scores at all, the result is empty.
pub fn compute_deltas(current: &ProfileVersion, previous: &ProfileVersion) -> Vec<DimensionDelta> {
    let (Some(curr_scores), Some(prev_scores)) =
        (&current.prominence_scores, &previous.prominence_scores)
    else {
        return Vec::new();
    };

    Dimension::ALL
        .into_iter()
        .filter_map(|dimension| {
            let curr = curr_scores.get(dimension)?;
            let prev = prev_scores.get(dimension)?;
            let points = ((curr.value() - prev.value()) * 100.0).round() as i32;
            (points.abs() > DELTA_SIGNIFICANCE_POINTS)
                .then_some(DimensionDelta { dimension, points })
        })
        .collect()
}
