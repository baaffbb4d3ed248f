//! # voicedna-compare
//!
//! ComparisonEngine: dimension-level difference classification between
//! profiles of two *different* clones.
//!
//! Missing-data policy: a missing score counts as zero, so the
//! comparison view can always render all 9 dimensions, however sparse
//! either profile is. The timeline's delta engine deliberately does the
//! opposite (skips missing scores); the two views diverge on purpose.

pub mod classify;
pub mod compare;

pub use classify::{classify, Classification};
pub use compare::{compare_profiles, DimensionComparison};
