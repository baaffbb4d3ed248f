//! Schema migrations, run at engine open. All statements are idempotent
//! (`IF NOT EXISTS`), so reopening an existing database is a no-op.

pub mod v001_profile_versions;

use rusqlite::Connection;

use voicedna_core::errors::DnaResult;

pub fn run_migrations(conn: &Connection) -> DnaResult<()> {
    v001_profile_versions::migrate(conn)?;
    Ok(())
}
