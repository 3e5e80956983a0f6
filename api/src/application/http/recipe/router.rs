use super::handlers::cook_recipe::{__path_cook_recipe, cook_recipe};
use super::handlers::create_recipe::{__path_create_recipe, create_recipe};
use super::handlers::diff_recipe::{__path_diff_recipe, diff_recipe};
use super::handlers::get_recipe::{__path_get_recipe, get_recipe};
use super::handlers::get_recipes::{__path_get_recipes, get_recipes};
use super::handlers::rank_recipes::{__path_rank_recipes, rank_recipes};
use super::handlers::shopping_list::{__path_shopping_list, shopping_list};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_recipes, get_recipe, create_recipe))]
pub struct RecipeApiDoc;

#[derive(OpenApi)]
#[openapi(paths(diff_recipe, cook_recipe, rank_recipes))]
pub struct HouseholdRecipeApiDoc;

#[derive(OpenApi)]
#[openapi(paths(shopping_list))]
pub struct ShoppingListApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/recipes", root_path),
            get(get_recipes).post(create_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", root_path),
            get(get_recipe),
        )
        .route(
            &format!(
                "{}/households/{{household_id}}/recipes/ranking",
                root_path
            ),
            get(rank_recipes),
        )
        .route(
            &format!(
                "{}/households/{{household_id}}/recipes/{{recipe_id}}/diff",
                root_path
            ),
            get(diff_recipe),
        )
        .route(
            &format!(
                "{}/households/{{household_id}}/recipes/{{recipe_id}}/cook",
                root_path
            ),
            post(cook_recipe),
        )
        .route(
            &format!("{}/households/{{household_id}}/shopping-list", root_path),
            post(shopping_list),
        )
}
