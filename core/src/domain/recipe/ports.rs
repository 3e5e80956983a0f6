use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Recipe, RecipeIngredient},
        value_objects::{CreateRecipeInput, RecipeDetails},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn get_recipe_by_id(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn fetch_recipes(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// Requirements in their defined order.
    fn fetch_ingredients_by_recipe(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RecipeIngredient>, CoreError>> + Send;

    fn create_recipe(
        &self,
        recipe: Recipe,
        ingredients: Vec<RecipeIngredient>,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn list_recipes(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipe(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<RecipeDetails, CoreError>> + Send;

    fn create_recipe(
        &self,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<RecipeDetails, CoreError>> + Send;
}
