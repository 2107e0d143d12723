use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::prompt::value_objects::{NewPrompt, UpdatePromptInput};

/// Fixed category catalog surfaced by the client's filter dropdown.
pub const CATEGORIES: [&str; 12] = [
    "Writing",
    "Productivity",
    "Coding / Dev",
    "Marketing / Sales",
    "Business Strategy",
    "Data / Analysis",
    "Creative / Fun",
    "Customer Support",
    "Education / Learning",
    "Design / UX",
    "Legal / Compliance",
    "HR / Recruiting",
];

pub const PROMPT_TYPES: [&str; 5] = ["Compose", "Extract", "Summarize", "Rewrite", "Classify"];

pub const DEFAULT_PROMPT_TYPE: &str = "Compose";
pub const DEFAULT_AUTHOR: &str = "Unknown";

pub fn is_known_category(value: &str) -> bool {
    CATEGORIES.contains(&value)
}

pub fn is_known_prompt_type(value: &str) -> bool {
    PROMPT_TYPES.contains(&value)
}

fn default_kind() -> String {
    DEFAULT_PROMPT_TYPE.to_string()
}

/// A stored prompt. The read side tolerates legacy records: `description`
/// and `author` may be absent, and a missing `type` or `category` falls
/// back instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub prompt: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Prompt {
    pub fn new(id: i64, new: NewPrompt, at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            prompt: new.prompt,
            category: new.category,
            kind: new.kind,
            author: Some(new.author),
            created_at: at,
            updated_at: at,
        }
    }

    /// Merge update: provided fields overwrite, omitted fields keep their
    /// stored values. Must agree with the COALESCE statement the SQL
    /// backend runs, so both backends converge on the same record.
    pub fn merge(&mut self, changes: UpdatePromptInput, at: DateTime<Utc>) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(prompt) = changes.prompt {
            self.prompt = prompt;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(kind) = changes.kind {
            self.kind = kind;
        }
        if let Some(author) = changes.author {
            self.author = Some(author);
        }
        self.updated_at = at;
    }
}
