//! Runtime configuration, loaded from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{DnaError, DnaResult};

/// Configuration for the Voice DNA store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnaConfig {
    /// Path of the SQLite database file.
    pub db_path: PathBuf,
    /// Number of read connections in the pool.
    pub read_pool_size: usize,
}

impl Default for DnaConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("voicedna.db"),
            read_pool_size: 4,
        }
    }
}

impl DnaConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml_str(s: &str) -> DnaResult<Self> {
        toml::from_str(s).map_err(|e| DnaError::Config {
            reason: e.to_string(),
        })
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> DnaResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DnaError::Config {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }
}
