use axum::extract::{Path, State};
use promptdeck_core::domain::prompt::ports::PromptService;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "prompt",
    summary = "Delete prompt",
    description = "Removes a prompt permanently.",
    params(
        ("id" = i64, Path, description = "Prompt id")
    ),
    responses(
        (status = 204, description = "Prompt deleted"),
        (status = 404, description = "Prompt not found")
    ),
)]
pub async fn delete_prompt(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_prompt(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
