use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::prompt::entities::prompt::Prompt;

/// Row shape of the prompts table, kept apart from the domain entity so
/// column naming stays a storage concern.
#[derive(Debug, Clone, FromRow)]
pub struct PromptRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub prompt: String,
    pub category: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PromptRow> for Prompt {
    fn from(row: PromptRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            prompt: row.prompt,
            category: row.category,
            kind: row.kind,
            author: row.author,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
