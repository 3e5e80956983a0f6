use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_keeper_core::domain::substitution::{entities::Substitution, ports::SubstitutionService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSubstitutionsResponse {
    pub data: Vec<Substitution>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "substitution",
    summary = "List substitutions",
    description = "Retrieves the substitution pairs registered by the household.",
    params(
        ("household_id" = Uuid, Path, description = "Household ID"),
    ),
    responses(
        (status = 200, body = GetSubstitutionsResponse)
    ),
)]
pub async fn get_substitutions(
    Path(household_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetSubstitutionsResponse>, ApiError> {
    let substitutions = state
        .service
        .list_substitutions(household_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSubstitutionsResponse {
        data: substitutions,
    }))
}
