use serde::Deserialize;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    suggestion::{
        entities::Suggestion,
        ports::{ChatCompletionClient, SuggestionService},
    },
};

const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that analyzes AI prompts and \
     suggests concise titles and descriptions. Title should be max 50 chars, description max \
     120 chars.";

const SUGGESTION_TEMPERATURE: f32 = 0.7;

fn build_user_message(prompt_body: &str) -> String {
    format!(
        "Analyze this AI prompt and suggest a concise title (max 50 chars) and description \
         (max 120 chars):\n\n\"{prompt_body}\"\n\nRespond in JSON format: \
         {{\"title\": \"...\", \"description\": \"...\"}}"
    )
}

/// Expected reply shape. Anything else is a parse failure, never fallback
/// content.
#[derive(Debug, Deserialize)]
struct SuggestionPayload {
    title: String,
    description: String,
}

impl<R, C> SuggestionService for Service<R, C>
where
    R: Send + Sync,
    C: ChatCompletionClient,
{
    async fn suggest(&self, prompt_body: String) -> Result<Suggestion, CoreError> {
        let content = self
            .suggestion_client
            .complete(
                SYSTEM_INSTRUCTION.to_string(),
                build_user_message(&prompt_body),
                SUGGESTION_TEMPERATURE,
            )
            .await?;

        let payload: SuggestionPayload = serde_json::from_str(content.trim())
            .map_err(|err| CoreError::SuggestionParse(err.to_string()))?;

        Ok(Suggestion::clamped(&payload.title, &payload.description))
    }
}
