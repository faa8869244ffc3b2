pub mod audit;
pub mod initialize;
pub mod kv;
pub mod migrate;
pub mod pool;
pub mod stats;

use crate::errors::{AppError, AppResult};
use crate::store::{PersistenceAdapter, Snapshot};
use pool::DbPool;

/// SQLite-backed persistence adapter: the engine state lives under two
/// kv keys, the operation trail in the `audit` table.
pub struct SqliteAdapter {
    pool: DbPool,
}

impl SqliteAdapter {
    /// Open (or create) the database file and bring the schema up to
    /// date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        initialize::init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    /// In-memory adapter for tests.
    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        initialize::init_db(&pool.conn)?;
        Ok(Self { pool })
    }
}

impl PersistenceAdapter for SqliteAdapter {
    fn load(&mut self) -> AppResult<Snapshot> {
        kv::load_snapshot(&self.pool.conn)
    }

    fn save(&mut self, snapshot: &Snapshot) -> AppResult<()> {
        kv::save_snapshot(&mut self.pool.conn, snapshot)
            .map_err(|e| AppError::Persistence(e.to_string()))
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        // Trail writes are best-effort by contract.
        let _ = audit::record(&self.pool.conn, operation, target, message);
    }
}
