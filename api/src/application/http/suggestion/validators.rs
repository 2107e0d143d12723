use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SuggestValidator {
    /// Draft prompt body to analyze.
    #[validate(length(min = 1, message = "prompt is required"))]
    pub prompt: String,
}
