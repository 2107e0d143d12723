use axum::extract::{Path, State};
use promptdeck_core::domain::prompt::entities::prompt::Prompt;
use promptdeck_core::domain::prompt::ports::PromptService;
use promptdeck_core::domain::prompt::value_objects::UpdatePromptInput;

use crate::application::http::prompt::validators::UpdatePromptValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "prompt",
    summary = "Update prompt",
    description = "Merges the provided fields into an existing prompt. Omitted fields keep their stored values.",
    request_body = UpdatePromptValidator,
    params(
        ("id" = i64, Path, description = "Prompt id")
    ),
    responses(
        (status = 200, body = Prompt),
        (status = 404, description = "Prompt not found")
    ),
)]
pub async fn update_prompt(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdatePromptValidator>,
) -> Result<Response<Prompt>, ApiError> {
    let prompt = state
        .service
        .update_prompt(
            id,
            UpdatePromptInput {
                title: payload.title,
                description: payload.description,
                prompt: payload.prompt,
                category: payload.category,
                kind: payload.kind,
                author: payload.author,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(prompt))
}
