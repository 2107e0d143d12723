use crate::domain::prompt::entities::prompt::{DEFAULT_AUTHOR, DEFAULT_PROMPT_TYPE};

/// Create payload after boundary validation, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePromptInput {
    pub title: String,
    pub description: Option<String>,
    pub prompt: String,
    pub category: String,
    pub kind: Option<String>,
    pub author: Option<String>,
}

/// Normalized record handed to the store. `kind` and `author` carry their
/// defaults here so both backends persist identical values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPrompt {
    pub title: String,
    pub description: Option<String>,
    pub prompt: String,
    pub category: String,
    pub kind: String,
    pub author: String,
}

impl From<CreatePromptInput> for NewPrompt {
    fn from(input: CreatePromptInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
            prompt: input.prompt,
            category: input.category,
            kind: non_empty(input.kind).unwrap_or_else(|| DEFAULT_PROMPT_TYPE.to_string()),
            author: non_empty(input.author).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        }
    }
}

/// Merge-update payload: every field optional, omitted fields keep their
/// stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePromptInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub prompt: Option<String>,
    pub category: Option<String>,
    pub kind: Option<String>,
    pub author: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
