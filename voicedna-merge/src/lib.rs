//! # voicedna-merge
//!
//! MergeWeightResolver: validates a candidate set of 2–5 source clones
//! and normalizes a per-dimension weight matrix into shares for an
//! external blending collaborator. The session holding the raw matrix is
//! caller-owned and in-memory only; nothing here touches durable
//! storage except the source-eligibility check.
//!
//! Synthesis of merged profile content happens elsewhere; the normalized
//! matrix is the sole output this crate produces.

pub mod resolver;
pub mod session;
pub mod weights;

pub use resolver::MergeWeightResolver;
pub use session::MergeSession;
pub use weights::{NormalizedShares, WeightMatrix};
