use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    pantry::ports::PantryItemRepository,
    recipe::ports::RecipeRepository,
    substitution::ports::SubstitutionRepository,
};

impl<P, S, RE, HC> HealthCheckService for Service<P, S, RE, HC>
where
    P: PantryItemRepository,
    S: SubstitutionRepository,
    RE: RecipeRepository,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::common::CacheConfig, infrastructure::memory::InMemoryStore};

    #[tokio::test]
    async fn test_readness_reports_store_state() {
        let store = InMemoryStore::new();
        let service = store.service(CacheConfig::default());

        let status = service.readness().await.unwrap();
        assert_eq!(status.status, "healthy");

        store.set_available(false);
        assert!(matches!(
            service.readness().await,
            Err(CoreError::StoreUnavailable(_))
        ));
    }
}
