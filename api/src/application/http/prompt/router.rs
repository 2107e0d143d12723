use super::handlers::create_prompt::{__path_create_prompt, create_prompt};
use super::handlers::delete_prompt::{__path_delete_prompt, delete_prompt};
use super::handlers::get_prompts::{__path_get_prompts, get_prompts};
use super::handlers::update_prompt::{__path_update_prompt, update_prompt};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_prompts, create_prompt, update_prompt, delete_prompt))]
pub struct PromptApiDoc;

pub fn prompt_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/prompts", state.args.server.root_path),
            get(get_prompts),
        )
        .route(
            &format!("{}/prompts", state.args.server.root_path),
            post(create_prompt),
        )
        .route(
            &format!("{}/prompts/{{id}}", state.args.server.root_path),
            put(update_prompt),
        )
        .route(
            &format!("{}/prompts/{{id}}", state.args.server.root_path),
            delete(delete_prompt),
        )
}
