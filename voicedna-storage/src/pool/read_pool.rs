//! Read connections for file-backed databases. Under WAL, readers are
//! never blocked by the writer, so version lookups and chain listings
//! run concurrently with version creation.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::{Connection, OpenFlags};

use voicedna_core::errors::DnaResult;

use super::pragmas::apply_read_pragmas;
use crate::to_storage_err;

const DEFAULT_POOL_SIZE: usize = 4;
const MAX_POOL_SIZE: usize = 8;

/// Fixed set of read-only connections, handed out round-robin.
pub struct ReadPool {
    readers: Box<[Mutex<Connection>]>,
    cursor: AtomicUsize,
}

impl ReadPool {
    /// Open `pool_size` read-only connections to the database file,
    /// clamped to [1, 8].
    pub fn open(path: &Path, pool_size: usize) -> DnaResult<Self> {
        let readers = (0..pool_size.clamp(1, MAX_POOL_SIZE))
            .map(|_| {
                let conn = Connection::open_with_flags(
                    path,
                    OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
                )
                .map_err(|e| to_storage_err(e.to_string()))?;
                apply_read_pragmas(&conn)?;
                Ok(Mutex::new(conn))
            })
            .collect::<DnaResult<Vec<_>>>()?;
        Ok(Self {
            readers: readers.into_boxed_slice(),
            cursor: AtomicUsize::new(0),
        })
    }

    /// Run a query on the next reader in round-robin order.
    pub fn with_conn<F, T>(&self, f: F) -> DnaResult<T>
    where
        F: FnOnce(&Connection) -> DnaResult<T>,
    {
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed) % self.readers.len();
        let guard = self.readers[idx]
            .lock()
            .map_err(|e| to_storage_err(format!("read connection lock poisoned: {e}")))?;
        f(&guard)
    }

    /// Number of reader connections.
    pub fn size(&self) -> usize {
        self.readers.len()
    }

    /// Pool size used when the config does not specify one.
    pub fn default_size() -> usize {
        DEFAULT_POOL_SIZE
    }
}
