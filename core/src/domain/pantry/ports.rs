use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    pantry::{
        entities::PantryItem,
        value_objects::{
            AddPantryItemInput, Deduction, DeductForServingsInput, MergeOutcome, RecipeDiff,
            RecipeMatch, ShoppingListEntry,
        },
    },
};

/// Repository trait for pantry rows
#[cfg_attr(test, mockall::automock)]
pub trait PantryItemRepository: Send + Sync {
    /// Items of one household ordered by name, then id.
    fn fetch_items_by_household(
        &self,
        household_id: Uuid,
    ) -> impl Future<Output = Result<Vec<PantryItem>, CoreError>> + Send;

    fn count_items_by_household(
        &self,
        household_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn get_item_by_id(
        &self,
        item_id: Uuid,
        household_id: Uuid,
    ) -> impl Future<Output = Result<Option<PantryItem>, CoreError>> + Send;

    fn create_item(
        &self,
        item: PantryItem,
    ) -> impl Future<Output = Result<PantryItem, CoreError>> + Send;

    fn update_item(
        &self,
        item: PantryItem,
    ) -> impl Future<Output = Result<PantryItem, CoreError>> + Send;

    fn delete_item(
        &self,
        item_id: Uuid,
        household_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for pantry reconciliation
#[cfg_attr(test, mockall::automock)]
pub trait PantryService: Send + Sync {
    fn list_items(
        &self,
        household_id: Uuid,
    ) -> impl Future<Output = Result<Vec<PantryItem>, CoreError>> + Send;

    fn count_items(
        &self,
        household_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Merges into the first existing item whose name matches, otherwise inserts.
    fn add_or_merge_item(
        &self,
        input: AddPantryItemInput,
    ) -> impl Future<Output = Result<MergeOutcome, CoreError>> + Send;

    /// Sets an explicit quantity; zero removes the item.
    fn adjust_item_quantity(
        &self,
        household_id: Uuid,
        item_id: Uuid,
        quantity: f64,
    ) -> impl Future<Output = Result<Option<PantryItem>, CoreError>> + Send;

    fn remove_item(
        &self,
        household_id: Uuid,
        item_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn diff_recipe_against_pantry(
        &self,
        recipe_id: Uuid,
        household_id: Uuid,
    ) -> impl Future<Output = Result<RecipeDiff, CoreError>> + Send;

    /// Every known recipe with its diff, best match first.
    fn rank_recipes(
        &self,
        household_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RecipeMatch>, CoreError>> + Send;

    fn shopping_list(
        &self,
        household_id: Uuid,
        recipe_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<ShoppingListEntry>, CoreError>> + Send;

    /// Consumes scaled requirement quantities; not reversible.
    fn deduct_for_servings(
        &self,
        input: DeductForServingsInput,
    ) -> impl Future<Output = Result<Vec<Deduction>, CoreError>> + Send;
}
