use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;

/// Shared application state handed to every request handler.
///
/// Cloning is cheap: the embedded database handle is reference counted.
///
/// | Field | Type | Purpose |
/// |-------|------|---------|
/// | config | Config | immutable configuration |
/// | db | Surreal<Db> | embedded database |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// Initialize the state for a real deployment: ensure the work
    /// directory exists and open the on-disk database under it.
    ///
    /// # Panics
    ///
    /// Panics when the work directory cannot be created or the database
    /// fails to open. There is nothing useful to serve without either.
    pub async fn initialize(config: &Config) -> Self {
        let db_dir = config.database_dir();
        std::fs::create_dir_all(&db_dir).expect("Failed to create work directory structure");

        let db_path = db_dir.join("liveshop.db");
        let db_service = DbService::new(&db_path.to_string_lossy(), &config.database)
            .await
            .expect("Failed to initialize database");

        Self::new(config.clone(), db_service.db)
    }

    /// State backed by an in-memory database, used by the test suites.
    pub async fn in_memory(config: &Config) -> Self {
        let db_service = DbService::in_memory(&config.database)
            .await
            .expect("Failed to initialize in-memory database");

        Self::new(config.clone(), db_service.db)
    }
}
