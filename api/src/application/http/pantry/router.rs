use super::handlers::add_item::{__path_add_item, add_item};
use super::handlers::adjust_item::{__path_adjust_item, adjust_item};
use super::handlers::get_items::{__path_get_items, get_items};
use super::handlers::remove_item::{__path_remove_item, remove_item};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_items, add_item, adjust_item, remove_item))]
pub struct PantryApiDoc;

pub fn pantry_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/households/{{household_id}}/pantry",
                state.args.server.root_path
            ),
            get(get_items).post(add_item),
        )
        .route(
            &format!(
                "{}/households/{{household_id}}/pantry/{{item_id}}",
                state.args.server.root_path
            ),
            put(adjust_item).delete(remove_item),
        )
}
