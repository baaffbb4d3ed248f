//! SQL queries against the profile_versions table.

pub mod version_ops;
