use crate::application::http::pantry::validators::AdjustPantryItemValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_keeper_core::domain::pantry::{entities::PantryItem, ports::PantryService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AdjustPantryItemResponse {
    /// `null` when the item was emptied and removed.
    pub data: Option<PantryItem>,
}

#[utoipa::path(
    put,
    path = "/{item_id}",
    tag = "pantry",
    summary = "Adjust pantry item quantity",
    description = "Sets the item's quantity. A quantity of zero removes the item.",
    params(
        ("household_id" = Uuid, Path, description = "Household ID"),
        ("item_id" = Uuid, Path, description = "Pantry item ID"),
    ),
    request_body = AdjustPantryItemValidator,
    responses(
        (status = 200, body = AdjustPantryItemResponse)
    ),
)]
pub async fn adjust_item(
    Path((household_id, item_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AdjustPantryItemValidator>,
) -> Result<Response<AdjustPantryItemResponse>, ApiError> {
    let item = state
        .service
        .adjust_item_quantity(household_id, item_id, payload.quantity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AdjustPantryItemResponse { data: item }))
}
