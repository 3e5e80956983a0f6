use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_keeper_core::domain::pantry::{ports::PantryService, value_objects::RecipeDiff};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DiffRecipeResponse {
    pub data: RecipeDiff,
}

#[utoipa::path(
    get,
    path = "/{recipe_id}/diff",
    tag = "recipe",
    summary = "Diff recipe against pantry",
    description = "Splits the recipe's requirements into those the pantry covers and those it lacks.",
    params(
        ("household_id" = Uuid, Path, description = "Household ID"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = DiffRecipeResponse)
    ),
)]
pub async fn diff_recipe(
    Path((household_id, recipe_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<DiffRecipeResponse>, ApiError> {
    let diff = state
        .service
        .diff_recipe_against_pantry(recipe_id, household_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DiffRecipeResponse { data: diff }))
}
