use std::sync::Arc;

use crate::domain::{
    common::CacheConfig,
    health::ports::HealthCheckRepository,
    pantry::{locks::HouseholdLocks, ports::PantryItemRepository},
    recipe::ports::RecipeRepository,
    substitution::{cache::SubstitutionCache, ports::SubstitutionRepository},
};

/// Entry point for every core operation. Store handles are injected, nothing is ambient.
#[derive(Clone)]
pub struct Service<P, S, RE, HC>
where
    P: PantryItemRepository,
    S: SubstitutionRepository,
    RE: RecipeRepository,
    HC: HealthCheckRepository,
{
    pub(crate) pantry_repository: P,
    pub(crate) substitution_repository: S,
    pub(crate) recipe_repository: RE,
    pub(crate) health_check_repository: HC,
    pub(crate) substitution_cache: Arc<SubstitutionCache>,
    pub(crate) household_locks: Arc<HouseholdLocks>,
}

impl<P, S, RE, HC> Service<P, S, RE, HC>
where
    P: PantryItemRepository,
    S: SubstitutionRepository,
    RE: RecipeRepository,
    HC: HealthCheckRepository,
{
    pub fn new(
        pantry_repository: P,
        substitution_repository: S,
        recipe_repository: RE,
        health_check_repository: HC,
        cache: CacheConfig,
    ) -> Self {
        Self {
            pantry_repository,
            substitution_repository,
            recipe_repository,
            health_check_repository,
            substitution_cache: Arc::new(SubstitutionCache::new(cache.substitution_ttl)),
            household_locks: Arc::new(HouseholdLocks::default()),
        }
    }
}
