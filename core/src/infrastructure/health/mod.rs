use std::time::Instant;

use sea_orm::DatabaseConnection;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    },
    infrastructure::db::postgres::map_db_error,
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        let start = Instant::now();
        self.db
            .ping()
            .await
            .map_err(|e| map_db_error("ping database", e))?;

        Ok(start.elapsed().as_millis() as u64)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let response_time_ms = self.health().await?;

        Ok(DatabaseHealthStatus {
            status: "healthy".to_string(),
            response_time_ms,
        })
    }
}
