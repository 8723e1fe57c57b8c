use anyhow::Result;
use tracing::{debug, error, info, trace};

use crate::db::DatabaseHandle;

pub async fn init_database(database_url: &str) -> Result<()> {
    trace!("Entering init_database function");
    info!("Initializing database");
    debug!("Database URL: {}", database_url);

    let db = DatabaseHandle::new(database_url, true);
    match db.get().await {
        Ok(_) => {
            info!("Database migrations completed successfully");
        }
        Err(e) => {
            error!("Failed to initialize database '{}': {}", database_url, e);
            return Err(e.into());
        }
    }

    info!("Database initialization completed successfully!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_in_memory_database() {
        assert!(init_database("sqlite::memory:").await.is_ok());
    }

    #[tokio::test]
    async fn test_init_reports_bad_url() {
        assert!(init_database("unknown://database").await.is_err());
    }
}
