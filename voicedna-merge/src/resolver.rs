//! Source eligibility checks and weight normalization.

use std::collections::BTreeMap;

use voicedna_core::constants::{MAX_MERGE_SOURCES, MIN_MERGE_SOURCES};
use voicedna_core::dna::Dimension;
use voicedna_core::errors::{DnaResult, ValidationError};
use voicedna_core::traits::IProfileStorage;

use crate::weights::{NormalizedShares, WeightMatrix};

/// Validates merge candidates and turns raw weights into shares.
pub struct MergeWeightResolver;

impl MergeWeightResolver {
    /// Check a candidate source set: 2–5 clones, each with a current
    /// profile. A clone without DNA must never be selectable as a source.
    pub fn validate_sources(store: &dyn IProfileStorage, clone_ids: &[String]) -> DnaResult<()> {
        let count = clone_ids.len();
        if !(MIN_MERGE_SOURCES..=MAX_MERGE_SOURCES).contains(&count) {
            return Err(ValidationError::SourceCountOutOfRange { count }.into());
        }
        for clone_id in clone_ids {
            if !store.has_profile(clone_id)? {
                return Err(ValidationError::IneligibleSource {
                    clone_id: clone_id.clone(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Normalize each dimension independently: a source's share is its
    /// weight over the dimension's weight sum. A dimension whose weights
    /// are all zero falls back to equal shares rather than dividing by
    /// zero.
    pub fn normalize(matrix: &WeightMatrix) -> NormalizedShares {
        let sources: Vec<&str> = matrix.clone_ids().collect();
        let n = sources.len();

        let mut shares: BTreeMap<Dimension, BTreeMap<String, f64>> = BTreeMap::new();
        for dimension in Dimension::ALL {
            let sum: f64 = sources.iter().map(|id| matrix.get(id, dimension)).sum();
            let row = sources
                .iter()
                .map(|id| {
                    let share = if sum == 0.0 {
                        1.0 / n as f64
                    } else {
                        matrix.get(id, dimension) / sum
                    };
                    (id.to_string(), share)
                })
                .collect();
            shares.insert(dimension, row);
        }
        NormalizedShares::new(shares)
    }
}
