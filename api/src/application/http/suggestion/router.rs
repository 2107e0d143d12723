use super::handlers::suggest_prompt_metadata::{
    __path_suggest_prompt_metadata, suggest_prompt_metadata,
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(suggest_prompt_metadata))]
pub struct SuggestionApiDoc;

pub fn suggestion_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/suggest", state.args.server.root_path),
        post(suggest_prompt_metadata),
    )
}
