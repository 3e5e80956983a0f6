use std::collections::HashSet;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::find_match,
    pantry::{
        entities::PantryItem,
        ports::{PantryItemRepository, PantryService},
        reconcile::{
            PantryWrite, build_shopping_list, diff_requirements, plan_deductions, scale_factor,
            sort_matches,
        },
        value_objects::{
            AddPantryItemInput, Deduction, DeductForServingsInput, MergeOutcome, RecipeDiff,
            RecipeMatch, ShoppingListEntry,
        },
    },
    recipe::ports::RecipeRepository,
    substitution::ports::{SubstitutionRepository, SubstitutionService},
};

impl<P, S, RE, HC> PantryService for Service<P, S, RE, HC>
where
    P: PantryItemRepository,
    S: SubstitutionRepository,
    RE: RecipeRepository,
    HC: HealthCheckRepository,
{
    async fn list_items(&self, household_id: Uuid) -> Result<Vec<PantryItem>, CoreError> {
        self.pantry_repository
            .fetch_items_by_household(household_id)
            .await
    }

    async fn count_items(&self, household_id: Uuid) -> Result<u64, CoreError> {
        self.pantry_repository
            .count_items_by_household(household_id)
            .await
    }

    #[instrument(skip(self), fields(household_id = %input.household_id, name = %input.name))]
    async fn add_or_merge_item(&self, input: AddPantryItemInput) -> Result<MergeOutcome, CoreError> {
        // Validate before touching the store.
        let candidate = PantryItem::new(
            input.household_id,
            &input.name,
            input.quantity,
            &input.unit,
        )?;

        let _guard = self.household_locks.acquire(input.household_id).await;

        let substitutions = self.substitution_set(input.household_id).await?;
        let existing = self
            .pantry_repository
            .fetch_items_by_household(input.household_id)
            .await?;

        if let Some(matched) = find_match(&candidate.name, &existing, &substitutions) {
            let mut item = matched.clone();
            let previous_name = item.name.clone();
            item.merge(&candidate.name, candidate.quantity)?;

            let item = self.pantry_repository.update_item(item).await?;
            info!(
                item_id = %item.id,
                previous_name = %previous_name,
                quantity = item.quantity,
                "merged into existing pantry item"
            );
            return Ok(MergeOutcome::Merged { item });
        }

        let item = self.pantry_repository.create_item(candidate).await?;
        info!(item_id = %item.id, quantity = item.quantity, "created pantry item");

        Ok(MergeOutcome::Created { item })
    }

    #[instrument(skip(self))]
    async fn adjust_item_quantity(
        &self,
        household_id: Uuid,
        item_id: Uuid,
        quantity: f64,
    ) -> Result<Option<PantryItem>, CoreError> {
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(CoreError::Invalid(format!("invalid quantity {quantity}")));
        }

        let _guard = self.household_locks.acquire(household_id).await;

        let mut item = self
            .pantry_repository
            .get_item_by_id(item_id, household_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if quantity == 0.0 {
            self.pantry_repository
                .delete_item(item_id, household_id)
                .await?;
            info!(%item_id, "pantry item emptied and removed");
            return Ok(None);
        }

        item.set_quantity(quantity)?;
        let item = self.pantry_repository.update_item(item).await?;

        Ok(Some(item))
    }

    #[instrument(skip(self))]
    async fn remove_item(&self, household_id: Uuid, item_id: Uuid) -> Result<(), CoreError> {
        let _guard = self.household_locks.acquire(household_id).await;

        self.pantry_repository
            .get_item_by_id(item_id, household_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.pantry_repository
            .delete_item(item_id, household_id)
            .await?;
        info!(%item_id, "pantry item removed");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn diff_recipe_against_pantry(
        &self,
        recipe_id: Uuid,
        household_id: Uuid,
    ) -> Result<RecipeDiff, CoreError> {
        let requirements = self
            .recipe_repository
            .fetch_ingredients_by_recipe(recipe_id)
            .await?;
        if requirements.is_empty() {
            return Ok(RecipeDiff::empty());
        }

        let substitutions = self.substitution_set(household_id).await?;
        let pantry = self
            .pantry_repository
            .fetch_items_by_household(household_id)
            .await?;

        let diff = diff_requirements(requirements, &pantry, &substitutions);
        debug!(
            total = diff.total,
            have = diff.have.len(),
            match_pct = diff.match_pct,
            "recipe diffed against pantry"
        );

        Ok(diff)
    }

    #[instrument(skip(self))]
    async fn rank_recipes(&self, household_id: Uuid) -> Result<Vec<RecipeMatch>, CoreError> {
        let recipes = self.recipe_repository.fetch_recipes().await?;
        let substitutions = self.substitution_set(household_id).await?;
        let pantry = self
            .pantry_repository
            .fetch_items_by_household(household_id)
            .await?;

        let mut matches = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            let requirements = self
                .recipe_repository
                .fetch_ingredients_by_recipe(recipe.id)
                .await?;
            let diff = diff_requirements(requirements, &pantry, &substitutions);
            matches.push(RecipeMatch { recipe, diff });
        }

        sort_matches(&mut matches);
        Ok(matches)
    }

    #[instrument(skip(self))]
    async fn shopping_list(
        &self,
        household_id: Uuid,
        recipe_ids: Vec<Uuid>,
    ) -> Result<Vec<ShoppingListEntry>, CoreError> {
        let substitutions = self.substitution_set(household_id).await?;
        let pantry = self
            .pantry_repository
            .fetch_items_by_household(household_id)
            .await?;

        let mut seen = HashSet::new();
        let mut diffs = Vec::new();
        for recipe_id in recipe_ids {
            if !seen.insert(recipe_id) {
                continue;
            }

            let requirements = self
                .recipe_repository
                .fetch_ingredients_by_recipe(recipe_id)
                .await?;
            diffs.push((
                recipe_id,
                diff_requirements(requirements, &pantry, &substitutions),
            ));
        }

        Ok(build_shopping_list(&diffs, &substitutions))
    }

    #[instrument(skip(self), fields(recipe_id = %input.recipe_id, household_id = %input.household_id))]
    async fn deduct_for_servings(
        &self,
        input: DeductForServingsInput,
    ) -> Result<Vec<Deduction>, CoreError> {
        let scale = scale_factor(input.servings, input.recipe_base_servings);

        let _guard = self.household_locks.acquire(input.household_id).await;

        let requirements = self
            .recipe_repository
            .fetch_ingredients_by_recipe(input.recipe_id)
            .await?;
        let substitutions = self.substitution_set(input.household_id).await?;
        let snapshot = self
            .pantry_repository
            .fetch_items_by_household(input.household_id)
            .await?;

        let steps = plan_deductions(&requirements, snapshot, scale, &substitutions);

        // Writes are applied in requirement order; a failure leaves earlier ones committed.
        let mut log = Vec::with_capacity(steps.len());
        for step in steps {
            match step.write {
                PantryWrite::Update(item) => {
                    self.pantry_repository.update_item(item).await?;
                }
                PantryWrite::Delete {
                    item_id,
                    household_id,
                } => {
                    self.pantry_repository
                        .delete_item(item_id, household_id)
                        .await?;
                }
            }

            info!(deduction = %step.deduction, "pantry deduction applied");
            log.push(step.deduction);
        }

        Ok(log)
    }
}
