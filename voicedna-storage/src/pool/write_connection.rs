//! The single mutex-guarded write connection. All version allocation
//! goes through it, serializing writes within the process.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use voicedna_core::errors::DnaResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// Exclusive write connection to the database.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open the write connection for the given database path.
    pub fn open(path: &Path) -> DnaResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory write connection (for testing).
    pub fn open_in_memory() -> DnaResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a closure while holding the writer lock.
    pub fn with_conn_sync<F, T>(&self, f: F) -> DnaResult<T>
    where
        F: FnOnce(&Connection) -> DnaResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("write connection lock poisoned: {e}")))?;
        f(&guard)
    }
}
