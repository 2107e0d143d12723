use crate::domain::{common::entities::app_errors::CoreError, suggestion::entities::Suggestion};

#[cfg_attr(test, mockall::automock)]
pub trait SuggestionService: Send + Sync {
    fn suggest(
        &self,
        prompt_body: String,
    ) -> impl Future<Output = Result<Suggestion, CoreError>> + Send;
}

/// Outbound chat-completion port. One request, one plain-text reply; retry
/// and fallback policy stay with the caller.
#[cfg_attr(test, mockall::automock)]
pub trait ChatCompletionClient: Send + Sync {
    fn complete(
        &self,
        system: String,
        user: String,
        temperature: f32,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
