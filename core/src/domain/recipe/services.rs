use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    pantry::ports::PantryItemRepository,
    recipe::{
        entities::{Recipe, RecipeIngredient},
        ports::{RecipeRepository, RecipeService},
        value_objects::{CreateRecipeInput, RecipeDetails},
    },
    substitution::ports::SubstitutionRepository,
};

impl<P, S, RE, HC> RecipeService for Service<P, S, RE, HC>
where
    P: PantryItemRepository,
    S: SubstitutionRepository,
    RE: RecipeRepository,
    HC: HealthCheckRepository,
{
    async fn list_recipes(&self) -> Result<Vec<Recipe>, CoreError> {
        self.recipe_repository.fetch_recipes().await
    }

    async fn get_recipe(&self, recipe_id: Uuid) -> Result<RecipeDetails, CoreError> {
        let recipe = self
            .recipe_repository
            .get_recipe_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        let ingredients = self
            .recipe_repository
            .fetch_ingredients_by_recipe(recipe_id)
            .await?;

        Ok(RecipeDetails {
            recipe,
            ingredients,
        })
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn create_recipe(&self, input: CreateRecipeInput) -> Result<RecipeDetails, CoreError> {
        if let Some(servings) = input.servings
            && servings <= 0
        {
            return Err(CoreError::Invalid(format!("invalid servings {servings}")));
        }

        let recipe = Recipe::new(&input.title, input.servings)?;
        let ingredients = input
            .ingredients
            .into_iter()
            .enumerate()
            .map(|(position, requirement)| {
                RecipeIngredient::new(
                    recipe.id,
                    position as i32,
                    &requirement.name,
                    requirement.quantity,
                    requirement.unit,
                    requirement.note,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let recipe = self
            .recipe_repository
            .create_recipe(recipe, ingredients.clone())
            .await?;
        info!(recipe_id = %recipe.id, requirements = ingredients.len(), "recipe created");

        Ok(RecipeDetails {
            recipe,
            ingredients,
        })
    }
}
