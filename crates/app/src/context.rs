//! App Context

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::dayoffs::{DayOffsService, PgDayOffsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] MigrateError),
}

/// Reachability probe for the backing database.
#[automock]
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    /// Succeeds when the database answers a trivial query.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl DatabaseProbe for Db {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        Db::ping(self).await
    }
}

/// Probe a database that may not be reachable yet, connecting on each ping.
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed.
pub fn lazy_database_probe(
    url: &str,
    max_connections: u32,
) -> Result<Arc<dyn DatabaseProbe>, sqlx::Error> {
    let pool = database::connect_lazy(url, max_connections)?;

    Ok(Arc::new(Db::new(pool)))
}

#[derive(Clone)]
pub struct AppContext {
    pub day_offs: Arc<dyn DayOffsService>,
    pub database: Arc<dyn DatabaseProbe>,
}

impl AppContext {
    #[must_use]
    pub fn new(day_offs: Arc<dyn DayOffsService>, database: Arc<dyn DatabaseProbe>) -> Self {
        Self { day_offs, database }
    }

    /// Build application context from a database URL, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(url: &str, max_connections: u32) -> Result<Self, AppInitError> {
        let pool = database::connect(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        info!("database connection established");

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        info!("database migrations applied");

        let db = Db::new(pool);

        Ok(Self::new(
            Arc::new(PgDayOffsService::new(db.clone())),
            Arc::new(db),
        ))
    }
}
