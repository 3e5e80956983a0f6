use crate::application::http::pantry::validators::AddPantryItemValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_keeper_core::domain::pantry::{
    ports::PantryService,
    value_objects::{AddPantryItemInput, MergeOutcome},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddPantryItemResponse {
    pub data: MergeOutcome,
}

#[utoipa::path(
    post,
    path = "",
    tag = "pantry",
    summary = "Add pantry item",
    description = "Merges the quantity into an existing item with an equivalent name, or creates a new item. Returns 201 when an item was created and 200 on merge.",
    params(
        ("household_id" = Uuid, Path, description = "Household ID"),
    ),
    request_body = AddPantryItemValidator,
    responses(
        (status = 200, body = AddPantryItemResponse),
        (status = 201, body = AddPantryItemResponse)
    ),
)]
pub async fn add_item(
    Path(household_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AddPantryItemValidator>,
) -> Result<Response<AddPantryItemResponse>, ApiError> {
    let outcome = state
        .service
        .add_or_merge_item(AddPantryItemInput {
            household_id,
            name: payload.name,
            quantity: payload.quantity,
            unit: payload.unit,
        })
        .await
        .map_err(ApiError::from)?;

    if outcome.is_merge() {
        Ok(Response::OK(AddPantryItemResponse { data: outcome }))
    } else {
        Ok(Response::Created(AddPantryItemResponse { data: outcome }))
    }
}
