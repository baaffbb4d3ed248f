//! # voicedna-timeline
//!
//! DeltaEngine: significant per-dimension score changes between two
//! versions of the *same* clone, for timeline display.
//!
//! Missing-data policy: a dimension contributes a delta only when both
//! versions carry a score for it; nothing is inferred from absence.
//! This intentionally differs from the comparison view, which defaults
//! missing scores to zero.

pub mod delta;

pub use delta::{compute_deltas, DimensionDelta};
