//! Live Shop Server - backend for a live-shopping platform
//!
//! Sellers host live shows, stock inventory items, and buyers place
//! orders against an active show. Everything is served over a small
//! REST API backed by an embedded SurrealDB instance.
//!
//! # Module structure
//!
//! ```text
//! liveshop-server/src/
//! ├── core/          # configuration, state, server lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── services/      # business rules per resource
//! ├── db/            # models and repositories
//! └── utils/         # logging, time formatting, payload validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use db::DbService;

pub use utils::logger::init_logger_with_file;

/// Load `.env`, then bring up logging according to `LOG_LEVEL`/`LOG_DIR`.
///
/// Called once at the very top of `main`, before the config is read.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}
