use crate::application::http::recipe::validators::ShoppingListValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_keeper_core::domain::pantry::{ports::PantryService, value_objects::ShoppingListEntry};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ShoppingListResponse {
    pub data: Vec<ShoppingListEntry>,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Build shopping list",
    description = "Collects the ingredients the pantry lacks for the given recipes, merging equivalent names.",
    params(
        ("household_id" = Uuid, Path, description = "Household ID"),
    ),
    request_body = ShoppingListValidator,
    responses(
        (status = 200, body = ShoppingListResponse)
    ),
)]
pub async fn shopping_list(
    Path(household_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ShoppingListValidator>,
) -> Result<Response<ShoppingListResponse>, ApiError> {
    let entries = state
        .service
        .shopping_list(household_id, payload.recipe_ids)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ShoppingListResponse { data: entries }))
}
