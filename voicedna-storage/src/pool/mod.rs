//! Connection handling: one exclusive writer, and for file-backed
//! databases a pool of read connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::Path;

use rusqlite::Connection;

use voicedna_core::errors::DnaResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// The write connection plus, in file-backed mode, a read pool.
///
/// In-memory databases are private to their connection, so in-memory
/// mode carries no readers and every read goes through the writer.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    readers: Option<ReadPool>,
}

impl ConnectionPool {
    /// Open a pool for the given database file.
    pub fn open(path: &Path, read_pool_size: usize) -> DnaResult<Self> {
        Ok(Self {
            writer: WriteConnection::open(path)?,
            readers: Some(ReadPool::open(path, read_pool_size)?),
        })
    }

    /// Open a writer-only in-memory pool (for testing).
    pub fn open_in_memory() -> DnaResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory()?,
            readers: None,
        })
    }

    /// Run a read-only query on the best available connection: a pooled
    /// reader when one exists, otherwise the writer.
    pub fn with_reader<F, T>(&self, f: F) -> DnaResult<T>
    where
        F: FnOnce(&Connection) -> DnaResult<T>,
    {
        match &self.readers {
            Some(readers) => readers.with_conn(f),
            None => self.writer.with_conn_sync(f),
        }
    }

    /// The read pool, if this pool is file-backed.
    pub fn read_pool(&self) -> Option<&ReadPool> {
        self.readers.as_ref()
    }
}
