use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::SubstitutionSet,
    pantry::ports::PantryItemRepository,
    recipe::ports::RecipeRepository,
    substitution::{
        entities::Substitution,
        ports::{SubstitutionRepository, SubstitutionService},
    },
};

impl<P, S, RE, HC> SubstitutionService for Service<P, S, RE, HC>
where
    P: PantryItemRepository,
    S: SubstitutionRepository,
    RE: RecipeRepository,
    HC: HealthCheckRepository,
{
    async fn list_all_substitutions(&self) -> Result<Vec<Substitution>, CoreError> {
        self.substitution_repository.fetch_all_substitutions().await
    }

    async fn list_substitutions(&self, household_id: Uuid) -> Result<Vec<Substitution>, CoreError> {
        self.substitution_repository
            .fetch_substitutions_by_household(household_id)
            .await
    }

    async fn substitution_set(&self, household_id: Uuid) -> Result<Arc<SubstitutionSet>, CoreError> {
        if let Some(set) = self.substitution_cache.get(household_id) {
            debug!(%household_id, "substitution cache hit");
            return Ok(set);
        }

        let generation = self.substitution_cache.generation();
        let substitutions = self
            .substitution_repository
            .fetch_substitutions_by_household(household_id)
            .await?;

        let set = Arc::new(substitutions.iter().collect::<SubstitutionSet>());
        self.substitution_cache
            .insert(household_id, set.clone(), generation);

        debug!(%household_id, pairs = set.len(), "substitution snapshot loaded");
        Ok(set)
    }

    #[instrument(skip(self))]
    async fn add_substitution(
        &self,
        household_id: Uuid,
        ingredient_a: String,
        ingredient_b: String,
    ) -> Result<Substitution, CoreError> {
        let substitution = Substitution::new(household_id, &ingredient_a, &ingredient_b)?;

        let result = self
            .substitution_repository
            .create_substitution(substitution)
            .await;
        // A failed insert may still have raced a concurrent one; drop the snapshot either way.
        self.substitution_cache.invalidate(household_id);

        let created = result?;
        info!(
            substitution_id = %created.id,
            ingredient_a = %created.ingredient_a,
            ingredient_b = %created.ingredient_b,
            "substitution registered"
        );

        Ok(created)
    }

    #[instrument(skip(self))]
    async fn remove_substitution(
        &self,
        household_id: Uuid,
        substitution_id: Uuid,
    ) -> Result<(), CoreError> {
        let deleted = self
            .substitution_repository
            .delete_substitution(substitution_id, household_id)
            .await?;
        self.substitution_cache.invalidate(household_id);

        if !deleted {
            return Err(CoreError::NotFound);
        }

        info!(%substitution_id, "substitution removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        domain::common::CacheConfig,
        infrastructure::memory::{InMemoryService, InMemoryStore},
    };

    fn service_with_ttl(store: &InMemoryStore, ttl: Duration) -> InMemoryService {
        store.service(CacheConfig {
            substitution_ttl: ttl,
        })
    }

    #[tokio::test]
    async fn test_add_substitution_persists_pair() {
        let store = InMemoryStore::new();
        let service = service_with_ttl(&store, Duration::from_secs(300));
        let household_id = Uuid::new_v4();

        let created = service
            .add_substitution(household_id, "Goat Milk".to_string(), "Milk".to_string())
            .await
            .unwrap();

        let listed = service.list_substitutions(household_id).await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_duplicate_pair_is_rejected_in_either_order() {
        let store = InMemoryStore::new();
        let service = service_with_ttl(&store, Duration::from_secs(300));
        let household_id = Uuid::new_v4();

        service
            .add_substitution(household_id, "EVOO".to_string(), "Olive Oil".to_string())
            .await
            .unwrap();

        let same = service
            .add_substitution(household_id, "EVOO".to_string(), "Olive Oil".to_string())
            .await;
        let reversed = service
            .add_substitution(household_id, "olive oil".to_string(), "evoo".to_string())
            .await;

        assert_eq!(same.unwrap_err(), CoreError::DuplicateSubstitution);
        assert_eq!(reversed.unwrap_err(), CoreError::DuplicateSubstitution);
        assert_eq!(service.list_substitutions(household_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_same_pair_is_allowed_in_another_household() {
        let store = InMemoryStore::new();
        let service = service_with_ttl(&store, Duration::from_secs(300));

        for household_id in [Uuid::new_v4(), Uuid::new_v4()] {
            service
                .add_substitution(household_id, "EVOO".to_string(), "Olive Oil".to_string())
                .await
                .unwrap();
        }

        assert_eq!(service.list_all_substitutions().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_add_invalidates_cached_snapshot() {
        let store = InMemoryStore::new();
        let service = service_with_ttl(&store, Duration::from_secs(300));
        let household_id = Uuid::new_v4();

        let before = service.substitution_set(household_id).await.unwrap();
        assert!(before.is_empty());

        service
            .add_substitution(household_id, "EVOO".to_string(), "Olive Oil".to_string())
            .await
            .unwrap();

        let after = service.substitution_set(household_id).await.unwrap();
        assert!(after.contains("EVOO", "Olive Oil"));
    }

    #[tokio::test]
    async fn test_snapshot_is_served_from_cache_within_ttl() {
        let store = InMemoryStore::new();
        let service = service_with_ttl(&store, Duration::from_secs(300));
        let household_id = Uuid::new_v4();

        service.substitution_set(household_id).await.unwrap();

        // A write that bypasses the service is not visible until the entry expires.
        store.insert_substitution(Substitution::new(household_id, "A2 Milk", "Milk").unwrap());
        let cached = service.substitution_set(household_id).await.unwrap();
        assert!(cached.is_empty());
    }

    #[tokio::test]
    async fn test_remove_substitution_invalidates_and_deletes() {
        let store = InMemoryStore::new();
        let service = service_with_ttl(&store, Duration::from_secs(300));
        let household_id = Uuid::new_v4();

        let created = service
            .add_substitution(household_id, "Goat Milk".to_string(), "Milk".to_string())
            .await
            .unwrap();
        assert!(!service.substitution_set(household_id).await.unwrap().is_empty());

        service
            .remove_substitution(household_id, created.id)
            .await
            .unwrap();

        assert!(service.substitution_set(household_id).await.unwrap().is_empty());
        assert!(service.list_substitutions(household_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_unknown_substitution_is_not_found() {
        let store = InMemoryStore::new();
        let service = service_with_ttl(&store, Duration::from_secs(300));

        let result = service
            .remove_substitution(Uuid::new_v4(), Uuid::new_v4())
            .await;
        assert_eq!(result.unwrap_err(), CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_remove_is_scoped_to_household() {
        let store = InMemoryStore::new();
        let service = service_with_ttl(&store, Duration::from_secs(300));
        let owner = Uuid::new_v4();

        let created = service
            .add_substitution(owner, "Goat Milk".to_string(), "Milk".to_string())
            .await
            .unwrap();

        let result = service.remove_substitution(Uuid::new_v4(), created.id).await;
        assert_eq!(result.unwrap_err(), CoreError::NotFound);
        assert_eq!(service.list_substitutions(owner).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = InMemoryStore::new();
        let service = service_with_ttl(&store, Duration::from_secs(300));
        store.set_available(false);

        let result = service
            .add_substitution(Uuid::new_v4(), "EVOO".to_string(), "Olive Oil".to_string())
            .await;
        assert!(matches!(result, Err(CoreError::StoreUnavailable(_))));
    }
}
