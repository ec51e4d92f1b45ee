//! Database Module
//!
//! Owns the embedded SurrealDB instance that backs the named collections.
//! The process runs on a RocksDB-backed store under the work directory;
//! tests use the in-memory engine through [`DbService::in_memory`].

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use repository::{RepoError, RepoResult};

/// Namespace all collections live under.
const NAMESPACE: &str = "liveshop";

/// Database service — owns the embedded document store
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (creating if missing) the store at `db_path` and select the
    /// configured logical database.
    pub async fn new(db_path: &str, database: &str) -> RepoResult<Self> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to open database: {e}")))?;
        Self::select(&db, database).await?;

        tracing::info!("Connected successfully to {database} database at {db_path}");
        Ok(Self { db })
    }

    /// Ephemeral in-memory store, used by the test suite.
    pub async fn in_memory(database: &str) -> RepoResult<Self> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| RepoError::Database(format!("Failed to open database: {e}")))?;
        Self::select(&db, database).await?;
        Ok(Self { db })
    }

    async fn select(db: &Surreal<Db>, database: &str) -> RepoResult<()> {
        db.use_ns(NAMESPACE)
            .use_db(database)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to select database: {e}")))?;
        Ok(())
    }

    /// Drop the connection. The embedded engine flushes on drop; this exists
    /// so shutdown paths read as an explicit teardown.
    pub fn close(self) {
        tracing::info!("Database connection closed");
    }
}
