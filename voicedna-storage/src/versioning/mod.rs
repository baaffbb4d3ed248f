//! Monotonic, immutable version chains with revert.

pub mod manager;
pub mod revert;

pub use manager::VersionManager;
