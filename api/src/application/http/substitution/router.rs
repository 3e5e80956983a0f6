use super::handlers::create_substitution::{__path_create_substitution, create_substitution};
use super::handlers::delete_substitution::{__path_delete_substitution, delete_substitution};
use super::handlers::get_substitutions::{__path_get_substitutions, get_substitutions};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_substitutions, create_substitution, delete_substitution))]
pub struct SubstitutionApiDoc;

pub fn substitution_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/households/{{household_id}}/substitutions",
                state.args.server.root_path
            ),
            get(get_substitutions).post(create_substitution),
        )
        .route(
            &format!(
                "{}/households/{{household_id}}/substitutions/{{substitution_id}}",
                state.args.server.root_path
            ),
            delete(delete_substitution),
        )
}
