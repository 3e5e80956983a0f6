use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_keeper_core::domain::pantry::ports::PantryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RemovePantryItemResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{item_id}",
    tag = "pantry",
    summary = "Remove pantry item",
    params(
        ("household_id" = Uuid, Path, description = "Household ID"),
        ("item_id" = Uuid, Path, description = "Pantry item ID"),
    ),
    responses(
        (status = 200, body = RemovePantryItemResponse)
    ),
)]
pub async fn remove_item(
    Path((household_id, item_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<RemovePantryItemResponse>, ApiError> {
    state
        .service
        .remove_item(household_id, item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RemovePantryItemResponse {
        message: "Pantry item removed successfully".to_string(),
    }))
}
