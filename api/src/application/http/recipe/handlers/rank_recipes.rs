use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_keeper_core::domain::pantry::{ports::PantryService, value_objects::RecipeMatch};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RankRecipesResponse {
    pub data: Vec<RecipeMatch>,
}

#[utoipa::path(
    get,
    path = "/ranking",
    tag = "recipe",
    summary = "Rank recipes",
    description = "Every recipe diffed against the pantry, best coverage first.",
    params(
        ("household_id" = Uuid, Path, description = "Household ID"),
    ),
    responses(
        (status = 200, body = RankRecipesResponse)
    ),
)]
pub async fn rank_recipes(
    Path(household_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<RankRecipesResponse>, ApiError> {
    let ranking = state
        .service
        .rank_recipes(household_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RankRecipesResponse { data: ranking }))
}
