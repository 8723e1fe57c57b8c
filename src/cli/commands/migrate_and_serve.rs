use anyhow::Result;
use tracing::{debug, error, info, trace};

use super::serve::run_server;
use crate::config::AppConfig;
use crate::db::DatabaseHandle;

/// Opens the database and applies migrations before accepting requests.
pub async fn migrate_and_serve(config: AppConfig) -> Result<()> {
    trace!("Entering migrate_and_serve function");
    info!("Applying database migrations and starting server");
    debug!("Database URL: {}", config.database_url);

    let db = DatabaseHandle::new(config.database_url.clone(), true);
    match db.get().await {
        Ok(_) => {
            info!("Database migrations completed successfully");
        }
        Err(e) => {
            error!("Failed to migrate database '{}': {}", config.database_url, e);
            return Err(e.into());
        }
    }

    run_server(&config, db).await
}
