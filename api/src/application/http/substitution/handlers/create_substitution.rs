use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::substitution::validators::CreateSubstitutionValidator;
use axum::extract::{Path, State};
use pantry_keeper_core::domain::substitution::{entities::Substitution, ports::SubstitutionService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateSubstitutionResponse {
    pub data: Substitution,
}

#[utoipa::path(
    post,
    path = "",
    tag = "substitution",
    summary = "Register substitution",
    description = "Declares two ingredient names interchangeable for the household. The pair is unordered.",
    params(
        ("household_id" = Uuid, Path, description = "Household ID"),
    ),
    request_body = CreateSubstitutionValidator,
    responses(
        (status = 201, body = CreateSubstitutionResponse),
        (status = 409, body = ApiErrorResponse, description = "The pair is already registered")
    ),
)]
pub async fn create_substitution(
    Path(household_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateSubstitutionValidator>,
) -> Result<Response<CreateSubstitutionResponse>, ApiError> {
    let substitution = state
        .service
        .add_substitution(household_id, payload.ingredient_a, payload.ingredient_b)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateSubstitutionResponse {
        data: substitution,
    }))
}
