use crate::dna::Dimension;

/// Validation errors surfaced to callers; never retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("dimension data is missing required key '{key}'")]
    MissingDimension { key: &'static str },

    #[error("dimension data is not a JSON object")]
    NotAnObject,

    #[error("malformed dimension data: {reason}")]
    Malformed { reason: String },

    #[error("merge requires between 2 and 5 source clones, got {count}")]
    SourceCountOutOfRange { count: usize },

    #[error("source clone '{clone_id}' has no voice DNA")]
    IneligibleSource { clone_id: String },

    #[error("clone '{clone_id}' is not a selected merge source")]
    SourceNotSelected { clone_id: String },

    #[error("weight {weight} for clone '{clone_id}' dimension '{dimension}' is outside [0, 100]")]
    WeightOutOfRange {
        clone_id: String,
        dimension: Dimension,
        weight: f64,
    },
}
