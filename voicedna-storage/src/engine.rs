//! ProfileStore: owns the ConnectionPool, implements IProfileStorage,
//! runs migrations at open.

use std::path::Path;

use serde_json::Value;

use voicedna_core::config::DnaConfig;
use voicedna_core::dna::{ProfileVersion, ProminenceScores, Trigger, VersionDraft};
use voicedna_core::errors::DnaResult;
use voicedna_core::traits::IProfileStorage;

use crate::migrations;
use crate::pool::{ConnectionPool, ReadPool};
use crate::queries::version_ops;
use crate::versioning::{revert, VersionManager};

/// The main profile store. Owns the connection pool and provides the
/// full IProfileStorage interface.
pub struct ProfileStore {
    pool: ConnectionPool,
}

impl ProfileStore {
    /// Open a profile store backed by a file on disk.
    pub fn open(path: &Path) -> DnaResult<Self> {
        let pool = ConnectionPool::open(path, ReadPool::default_size())?;
        let store = Self { pool };
        store.initialize()?;
        Ok(store)
    }

    /// Open a store from a loaded config.
    pub fn open_with(config: &DnaConfig) -> DnaResult<Self> {
        let pool = ConnectionPool::open(&config.db_path, config.read_pool_size)?;
        let store = Self { pool };
        store.initialize()?;
        Ok(store)
    }

    /// Open an in-memory profile store (for testing). Writer-only: an
    /// in-memory database is private to its connection, so the pool
    /// routes reads through the writer.
    pub fn open_in_memory() -> DnaResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let store = Self { pool };
        store.initialize()?;
        Ok(store)
    }

    /// Run migrations.
    fn initialize(&self) -> DnaResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| migrations::run_migrations(conn))
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Persist an analysis collaborator's raw payload.
    ///
    /// The trigger is derived from the chain: `initial_analysis` for a
    /// clone's first version, `regeneration` afterwards. The payload is
    /// validated for the 9 required dimension keys before anything is
    /// written.
    pub fn ingest_analysis(
        &self,
        clone_id: &str,
        dimension_data: &Value,
        prominence_scores: Option<ProminenceScores>,
        model_used: &str,
    ) -> DnaResult<ProfileVersion> {
        self.pool.writer.with_conn_sync(|conn| {
            let trigger = if version_ops::has_versions(conn, clone_id)? {
                Trigger::Regeneration
            } else {
                Trigger::InitialAnalysis
            };
            let draft =
                VersionDraft::from_payload(dimension_data, prominence_scores, trigger, model_used)?;
            VersionManager::create(conn, clone_id, draft)
        })
    }

    fn with_reader<F, T>(&self, f: F) -> DnaResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> DnaResult<T>,
    {
        self.pool.with_reader(f)
    }
}

impl IProfileStorage for ProfileStore {
    fn create_version(&self, clone_id: &str, draft: VersionDraft) -> DnaResult<ProfileVersion> {
        self.pool
            .writer
            .with_conn_sync(|conn| VersionManager::create(conn, clone_id, draft))
    }

    fn revert(&self, clone_id: &str, target_version: i64) -> DnaResult<ProfileVersion> {
        self.pool
            .writer
            .with_conn_sync(|conn| revert::revert_to_version(conn, clone_id, target_version))
    }

    fn get_version(
        &self,
        clone_id: &str,
        version_number: i64,
    ) -> DnaResult<Option<ProfileVersion>> {
        self.with_reader(|conn| version_ops::get_at_version(conn, clone_id, version_number))
    }

    fn get_current(&self, clone_id: &str) -> DnaResult<Option<ProfileVersion>> {
        self.with_reader(|conn| version_ops::get_current(conn, clone_id))
    }

    fn list_versions(&self, clone_id: &str) -> DnaResult<Vec<ProfileVersion>> {
        self.with_reader(|conn| version_ops::list_versions(conn, clone_id))
    }

    fn has_profile(&self, clone_id: &str) -> DnaResult<bool> {
        self.with_reader(|conn| version_ops::has_versions(conn, clone_id))
    }
}
