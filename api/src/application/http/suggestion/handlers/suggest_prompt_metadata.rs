use axum::extract::State;
use promptdeck_core::domain::suggestion::entities::Suggestion;
use promptdeck_core::domain::suggestion::ports::SuggestionService;

use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::suggestion::validators::SuggestValidator;

#[utoipa::path(
    post,
    path = "",
    tag = "suggestion",
    summary = "Suggest title and description",
    description = "Asks the chat completion provider for a concise title and description for a draft prompt body.",
    request_body = SuggestValidator,
    responses(
        (status = 200, body = Suggestion)
    ),
)]
pub async fn suggest_prompt_metadata(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SuggestValidator>,
) -> Result<Response<Suggestion>, ApiError> {
    let suggestion = state
        .service
        .suggest(payload.prompt)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(suggestion))
}
