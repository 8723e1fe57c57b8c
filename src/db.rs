//! Process-wide database handle.
//!
//! The connection is opened on first use, not at startup, and then shared by
//! every request. Concurrent first callers wait on the same attempt; a failed
//! attempt leaves the handle empty so the next caller tries again.

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use tokio::sync::OnceCell;
use tracing::{debug, error, info, instrument};

#[derive(Clone, Debug)]
pub struct DatabaseHandle {
    url: Option<Arc<str>>,
    auto_migrate: bool,
    connection: Arc<OnceCell<DatabaseConnection>>,
}

impl DatabaseHandle {
    /// Handle that connects to `url` on first use, applying pending
    /// migrations first when `auto_migrate` is set.
    pub fn new(url: impl Into<String>, auto_migrate: bool) -> Self {
        Self {
            url: Some(Arc::from(url.into())),
            auto_migrate,
            connection: Arc::new(OnceCell::new()),
        }
    }

    /// Handle around an already open connection.
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self {
            url: None,
            auto_migrate: false,
            connection: Arc::new(OnceCell::new_with(Some(connection))),
        }
    }

    #[cfg(test)]
    pub fn is_connected(&self) -> bool {
        self.connection.initialized()
    }

    /// Returns the shared connection, opening it if this is the first call.
    pub async fn get(&self) -> Result<&DatabaseConnection, DbErr> {
        self.connection.get_or_try_init(|| self.connect()).await
    }

    #[instrument(skip(self), fields(auto_migrate = self.auto_migrate))]
    async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        let Some(url) = self.url.as_deref() else {
            return Err(DbErr::Custom("No database URL configured".to_string()));
        };

        info!("Connecting to database");
        debug!("Database URL: {}", url);
        let connection = match Database::connect(url).await {
            Ok(connection) => connection,
            Err(e) => {
                error!("Failed to connect to database '{}': {}", url, e);
                return Err(e);
            }
        };

        if self.auto_migrate {
            info!("Applying pending migrations");
            if let Err(e) = Migrator::up(&connection, None).await {
                error!("Failed to run database migrations: {}", e);
                return Err(e);
            }
        }

        info!("Database connection established");
        Ok(connection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ConnectionTrait;

    #[tokio::test]
    async fn test_connects_lazily() {
        let handle = DatabaseHandle::new("sqlite::memory:", true);
        assert!(!handle.is_connected());

        let connection = handle.get().await.unwrap();
        connection.execute_unprepared("SELECT 1").await.unwrap();
        assert!(handle.is_connected());
    }

    #[tokio::test]
    async fn test_clones_share_one_connection() {
        let handle = DatabaseHandle::new("sqlite::memory:", true);
        let clone = handle.clone();

        let (first, second) = tokio::join!(handle.get(), clone.get());
        assert!(std::ptr::eq(first.unwrap(), second.unwrap()));
    }

    #[tokio::test]
    async fn test_failed_connect_leaves_handle_empty() {
        let handle = DatabaseHandle::new("not-a-database://nowhere", false);

        assert!(handle.get().await.is_err());
        assert!(!handle.is_connected());
        assert!(handle.get().await.is_err());
    }

    #[tokio::test]
    async fn test_from_connection_is_ready() {
        let connection = Database::connect("sqlite::memory:").await.unwrap();
        let handle = DatabaseHandle::from_connection(connection);
        assert!(handle.is_connected());
        assert!(handle.get().await.is_ok());
    }
}
