use crate::application::http::recipe::validators::CreateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantry_keeper_core::domain::recipe::{
    ports::RecipeService,
    value_objects::{CreateRecipeInput, RecipeDetails, RequirementInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateRecipeResponse {
    pub data: RecipeDetails,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Create recipe",
    request_body = CreateRecipeValidator,
    responses(
        (status = 201, body = CreateRecipeResponse)
    ),
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateRecipeValidator>,
) -> Result<Response<CreateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .create_recipe(CreateRecipeInput {
            title: payload.title,
            servings: payload.servings,
            ingredients: payload
                .ingredients
                .into_iter()
                .map(|requirement| RequirementInput {
                    name: requirement.name,
                    quantity: requirement.quantity,
                    unit: requirement.unit,
                    note: requirement.note,
                })
                .collect(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateRecipeResponse { data: recipe }))
}
