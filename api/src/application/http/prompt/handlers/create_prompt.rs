use axum::extract::State;
use promptdeck_core::domain::prompt::entities::prompt::Prompt;
use promptdeck_core::domain::prompt::ports::PromptService;
use promptdeck_core::domain::prompt::value_objects::CreatePromptInput;

use crate::application::http::prompt::validators::CreatePromptValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "",
    tag = "prompt",
    summary = "Create prompt",
    description = "Creates a prompt. The store assigns the id and timestamps.",
    request_body = CreatePromptValidator,
    responses(
        (status = 201, body = Prompt)
    ),
)]
pub async fn create_prompt(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreatePromptValidator>,
) -> Result<Response<Prompt>, ApiError> {
    let prompt = state
        .service
        .create_prompt(CreatePromptInput {
            title: payload.title,
            description: payload.description,
            prompt: payload.prompt,
            category: payload.category,
            kind: payload.kind,
            author: payload.author,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(prompt))
}
