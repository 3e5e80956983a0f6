use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::{error, info};

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    /// Connects and applies pending migrations before handing out the connection.
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options.sqlx_logging(false);

        let db = Database::connect(options).await?;

        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await?;
        info!("database migrations applied");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}

/// Store failures are logged here and surfaced once; callers never retry.
pub(crate) fn map_db_error(context: &str, e: DbErr) -> CoreError {
    error!("Failed to {}: {}", context, e);
    CoreError::StoreUnavailable(format!("failed to {context}: {e}"))
}
