use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const TITLE_MAX_CHARS: usize = 50;
pub const DESCRIPTION_MAX_CHARS: usize = 120;

/// Title and description proposed for a draft prompt body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
}

impl Suggestion {
    /// Applies the catalog's display limits. Truncation counts characters,
    /// not bytes, so multi-byte text never splits mid character.
    pub fn clamped(title: &str, description: &str) -> Self {
        Self {
            title: clamp_chars(title, TITLE_MAX_CHARS),
            description: clamp_chars(description, DESCRIPTION_MAX_CHARS),
        }
    }
}

fn clamp_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
