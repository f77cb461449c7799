//! Store selection from the environment.
//!
//! Credentials are an environment-level switch, not a code path: when
//! `DATABASE_URL` is absent, or PostgreSQL cannot be reached or migrated,
//! the process degrades to the in-memory store instead of failing hard.
//! The in-memory store behaves identically for the lifetime of the
//! process, so every caller keeps working in demo mode.

use std::sync::Arc;

use crate::memory::MemoryStore;
use crate::pg::PgStore;
use crate::store::RepairStore;
use crate::{create_pool, DbPool};

/// Embedded migrations, applied on every PostgreSQL connect.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// PostgreSQL connection string; `None` selects the in-memory store.
    pub database_url: Option<String>,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var        | Default                       |
    /// |----------------|-------------------------------|
    /// | `DATABASE_URL` | unset — use the in-memory store |
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.is_empty()),
        }
    }

    /// Connect to the configured store.
    ///
    /// Never fails: any configuration or connection fault falls back to a
    /// fresh [`MemoryStore`] with a logged warning.
    pub async fn connect(&self) -> Arc<dyn RepairStore> {
        let Some(url) = &self.database_url else {
            tracing::warn!("DATABASE_URL not set; using the in-memory store");
            return Arc::new(MemoryStore::new());
        };

        match create_pool(url).await {
            Ok(pool) => match run_migrations(&pool).await {
                Ok(()) => {
                    tracing::info!("connected to the PostgreSQL store");
                    Arc::new(PgStore::new(pool))
                }
                Err(error) => {
                    tracing::warn!(%error, "migration failed; falling back to the in-memory store");
                    Arc::new(MemoryStore::new())
                }
            },
            Err(error) => {
                tracing::warn!(%error, "PostgreSQL unreachable; falling back to the in-memory store");
                Arc::new(MemoryStore::new())
            }
        }
    }
}

async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
