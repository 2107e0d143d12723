use axum::extract::State;
use promptdeck_core::domain::prompt::entities::prompt::Prompt;
use promptdeck_core::domain::prompt::ports::PromptService;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "",
    tag = "prompt",
    summary = "List prompts",
    description = "Retrieves every prompt in the library, newest first.",
    responses(
        (status = 200, body = Vec<Prompt>)
    ),
)]
pub async fn get_prompts(
    State(state): State<AppState>,
) -> Result<Response<Vec<Prompt>>, ApiError> {
    let prompts = state.service.list_prompts().await.map_err(ApiError::from)?;

    Ok(Response::OK(prompts))
}
