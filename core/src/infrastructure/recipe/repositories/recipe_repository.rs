use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{
            entities::{Recipe, RecipeIngredient},
            ports::RecipeRepository,
        },
    },
    entity::{recipe_ingredients, recipes},
    infrastructure::db::postgres::map_db_error,
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn get_recipe_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let recipe = recipes::Entity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_error("get recipe", e))?;

        Ok(recipe.map(Recipe::from))
    }

    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, CoreError> {
        let recipes = recipes::Entity::find()
            .order_by_asc(recipes::Column::Title)
            .all(&self.db)
            .await
            .map_err(|e| map_db_error("fetch recipes", e))?;

        Ok(recipes.into_iter().map(Recipe::from).collect())
    }

    async fn fetch_ingredients_by_recipe(
        &self,
        recipe_id: Uuid,
    ) -> Result<Vec<RecipeIngredient>, CoreError> {
        let ingredients = recipe_ingredients::Entity::find()
            .filter(recipe_ingredients::Column::RecipeId.eq(recipe_id))
            .order_by_asc(recipe_ingredients::Column::Position)
            .order_by_asc(recipe_ingredients::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| map_db_error("fetch recipe ingredients", e))?;

        Ok(ingredients.into_iter().map(RecipeIngredient::from).collect())
    }

    async fn create_recipe(
        &self,
        recipe: Recipe,
        ingredients: Vec<RecipeIngredient>,
    ) -> Result<Recipe, CoreError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| map_db_error("begin recipe transaction", e))?;

        let created = recipes::Entity::insert(recipes::ActiveModel {
            id: Set(recipe.id),
            title: Set(recipe.title.clone()),
            servings: Set(recipe.servings),
            created_at: Set(recipe.created_at.fixed_offset()),
        })
        .exec_with_returning(&txn)
        .await
        .map_err(|e| map_db_error("create recipe", e))?;

        if !ingredients.is_empty() {
            let models = ingredients
                .into_iter()
                .map(|ingredient| recipe_ingredients::ActiveModel {
                    id: Set(ingredient.id),
                    recipe_id: Set(created.id),
                    position: Set(ingredient.position),
                    name: Set(ingredient.name),
                    quantity: Set(ingredient.quantity),
                    unit: Set(ingredient.unit),
                    note: Set(ingredient.note),
                });

            recipe_ingredients::Entity::insert_many(models)
                .exec(&txn)
                .await
                .map_err(|e| map_db_error("create recipe ingredients", e))?;
        }

        txn.commit()
            .await
            .map_err(|e| map_db_error("commit recipe", e))?;

        Ok(Recipe::from(created))
    }
}
