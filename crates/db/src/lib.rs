//! Persistence adapter for the community micro-repair exchange.
//!
//! [`RepairStore`] is the data-access contract the presentation layer
//! programs against. Two interchangeable implementations are provided:
//!
//! - [`PgStore`] — sqlx/PostgreSQL, the real backing store.
//! - [`MemoryStore`] — in-memory equivalent for demos and tests.
//!
//! [`StoreConfig`] picks between them from the environment, degrading to
//! the in-memory store when PostgreSQL is not configured or unreachable.

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod error;
pub mod memory;
pub mod models;
pub mod pg;
pub mod repositories;
pub mod store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use pg::PgStore;
pub use store::{RepairStore, SignInOutcome};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}
