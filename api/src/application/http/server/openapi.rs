use utoipa::OpenApi;

use crate::application::http::health::router::HealthApiDoc;
use crate::application::http::prompt::router::PromptApiDoc;
use crate::application::http::suggestion::router::SuggestionApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "promptdeck API",
        description = "Shared library of reusable AI prompts"
    ),
    nest(
        (path = "/prompts", api = PromptApiDoc),
        (path = "/suggest", api = SuggestionApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
