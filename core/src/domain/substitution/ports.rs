use std::future::Future;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError, ingredient::SubstitutionSet,
    substitution::entities::Substitution,
};

/// Persistence contract for substitution pairs.
#[cfg_attr(test, mockall::automock)]
pub trait SubstitutionRepository: Send + Sync {
    fn fetch_all_substitutions(
        &self,
    ) -> impl Future<Output = Result<Vec<Substitution>, CoreError>> + Send;

    fn fetch_substitutions_by_household(
        &self,
        household_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Substitution>, CoreError>> + Send;

    /// Fails with [`CoreError::DuplicateSubstitution`] when the unordered pair
    /// already exists for the household.
    fn create_substitution(
        &self,
        substitution: Substitution,
    ) -> impl Future<Output = Result<Substitution, CoreError>> + Send;

    /// Returns `false` when no row with this id belongs to the household.
    fn delete_substitution(
        &self,
        substitution_id: Uuid,
        household_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SubstitutionService: Send + Sync {
    fn list_all_substitutions(
        &self,
    ) -> impl Future<Output = Result<Vec<Substitution>, CoreError>> + Send;

    fn list_substitutions(
        &self,
        household_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Substitution>, CoreError>> + Send;

    /// Snapshot consulted by the matcher, no older than the configured TTL.
    fn substitution_set(
        &self,
        household_id: Uuid,
    ) -> impl Future<Output = Result<Arc<SubstitutionSet>, CoreError>> + Send;

    fn add_substitution(
        &self,
        household_id: Uuid,
        ingredient_a: String,
        ingredient_b: String,
    ) -> impl Future<Output = Result<Substitution, CoreError>> + Send;

    fn remove_substitution(
        &self,
        household_id: Uuid,
        substitution_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
