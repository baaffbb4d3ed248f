//! # voicedna-core
//!
//! Foundation crate for the Voice DNA system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod dna;
pub mod errors;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::DnaConfig;
pub use dna::{
    Dimension, ProfileVersion, ProminenceScores, Score, Trigger, VersionDraft, VoiceDna,
};
pub use errors::{DnaError, DnaResult};
pub use traits::IProfileStorage;
