use crate::application::http::recipe::validators::CookRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_keeper_core::domain::{
    pantry::{
        ports::PantryService,
        value_objects::{DeductForServingsInput, Deduction},
    },
    recipe::ports::RecipeService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CookRecipeResponse {
    pub data: Vec<Deduction>,
    /// Human-readable form of each deduction, in the same order.
    pub log: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/cook",
    tag = "recipe",
    summary = "Cook recipe",
    description = "Deducts the recipe's requirements, scaled to the requested servings, from the pantry. Not reversible.",
    params(
        ("household_id" = Uuid, Path, description = "Household ID"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    request_body = CookRecipeValidator,
    responses(
        (status = 200, body = CookRecipeResponse)
    ),
)]
pub async fn cook_recipe(
    Path((household_id, recipe_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CookRecipeValidator>,
) -> Result<Response<CookRecipeResponse>, ApiError> {
    let recipe_base_servings = match payload.recipe_base_servings {
        Some(base) => base,
        None => state
            .service
            .get_recipe(recipe_id)
            .await
            .map_err(ApiError::from)?
            .recipe
            .base_servings(),
    };

    let deductions = state
        .service
        .deduct_for_servings(DeductForServingsInput {
            recipe_id,
            household_id,
            servings: payload.servings,
            recipe_base_servings,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CookRecipeResponse {
        log: deductions.iter().map(ToString::to_string).collect(),
        data: deductions,
    }))
}
