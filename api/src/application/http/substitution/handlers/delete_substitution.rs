use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_keeper_core::domain::substitution::ports::SubstitutionService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteSubstitutionResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{substitution_id}",
    tag = "substitution",
    summary = "Remove substitution",
    params(
        ("household_id" = Uuid, Path, description = "Household ID"),
        ("substitution_id" = Uuid, Path, description = "Substitution ID"),
    ),
    responses(
        (status = 200, body = DeleteSubstitutionResponse)
    ),
)]
pub async fn delete_substitution(
    Path((household_id, substitution_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<DeleteSubstitutionResponse>, ApiError> {
    state
        .service
        .remove_substitution(household_id, substitution_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteSubstitutionResponse {
        message: "Substitution removed successfully".to_string(),
    }))
}
