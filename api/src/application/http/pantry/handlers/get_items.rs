use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_keeper_core::domain::pantry::{entities::PantryItem, ports::PantryService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPantryItemsResponse {
    pub data: Vec<PantryItem>,
    pub count: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "pantry",
    summary = "List pantry items",
    description = "Retrieves the household's pantry, ordered by name.",
    params(
        ("household_id" = Uuid, Path, description = "Household ID"),
    ),
    responses(
        (status = 200, body = GetPantryItemsResponse)
    ),
)]
pub async fn get_items(
    Path(household_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetPantryItemsResponse>, ApiError> {
    let items = state
        .service
        .list_items(household_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPantryItemsResponse {
        count: items.len() as u64,
        data: items,
    }))
}
