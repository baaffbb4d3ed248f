//! Raw weight matrix and its normalized form.

use std::collections::BTreeMap;

use serde::Serialize;

use voicedna_core::constants::{DEFAULT_MERGE_WEIGHT, MAX_MERGE_WEIGHT};
use voicedna_core::dna::Dimension;
use voicedna_core::errors::ValidationError;

/// Per-source, per-dimension influence weights in [0, 100].
///
/// Session-scoped and never persisted. Every cell starts at the default
/// weight when a source is added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightMatrix {
    cells: BTreeMap<String, BTreeMap<Dimension, f64>>,
}

impl WeightMatrix {
    /// A dense matrix over the given sources, every cell at the default.
    pub fn with_default_weights(clone_ids: &[String]) -> Self {
        let cells = clone_ids
            .iter()
            .map(|id| {
                let row = Dimension::ALL
                    .into_iter()
                    .map(|d| (d, DEFAULT_MERGE_WEIGHT))
                    .collect();
                (id.clone(), row)
            })
            .collect();
        Self { cells }
    }

    /// Set one cell. Rejects weights outside [0, 100].
    pub fn set(
        &mut self,
        clone_id: &str,
        dimension: Dimension,
        weight: f64,
    ) -> Result<(), ValidationError> {
        if !(0.0..=MAX_MERGE_WEIGHT).contains(&weight) {
            return Err(ValidationError::WeightOutOfRange {
                clone_id: clone_id.to_string(),
                dimension,
                weight,
            });
        }
        self.cells
            .entry(clone_id.to_string())
            .or_default()
            .insert(dimension, weight);
        Ok(())
    }

    /// One cell's weight; absent cells count as zero.
    pub fn get(&self, clone_id: &str, dimension: Dimension) -> f64 {
        self.cells
            .get(clone_id)
            .and_then(|row| row.get(&dimension))
            .copied()
            .unwrap_or(0.0)
    }

    /// Source ids in the matrix, in stable order.
    pub fn clone_ids(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Number of sources.
    pub fn source_count(&self) -> usize {
        self.cells.len()
    }
}

/// Normalized influence shares: dimension → clone id → share.
///
/// For every dimension the shares sum to 1.0 within floating tolerance.
/// This is the contract handed to the blending collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedShares {
    shares: BTreeMap<Dimension, BTreeMap<String, f64>>,
}

impl NormalizedShares {
    pub(crate) fn new(shares: BTreeMap<Dimension, BTreeMap<String, f64>>) -> Self {
        Self { shares }
    }

    /// One source's share of one dimension.
    pub fn share(&self, dimension: Dimension, clone_id: &str) -> Option<f64> {
        self.shares.get(&dimension).and_then(|row| row.get(clone_id)).copied()
    }

    /// All shares for one dimension.
    pub fn dimension_shares(&self, dimension: Dimension) -> Option<&BTreeMap<String, f64>> {
        self.shares.get(&dimension)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &BTreeMap<String, f64>)> {
        self.shares.iter().map(|(d, row)| (*d, row))
    }
}
