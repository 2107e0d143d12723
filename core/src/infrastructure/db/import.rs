//! One-shot JSON-to-PostgreSQL import. Tolerant of legacy documents:
//! records missing required fields are skipped with a warning, optional
//! fields fall back, original timestamps are preserved when present.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::domain::{
    common::entities::app_errors::CoreError, prompt::entities::prompt::DEFAULT_PROMPT_TYPE,
};

pub const CREATE_PROMPTS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS prompts (
    id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    prompt TEXT NOT NULL,
    category TEXT NOT NULL,
    type TEXT NOT NULL,
    author TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// Lax record shape for legacy documents: nothing is structurally required,
/// validity is decided per record at import time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportDocument {
    pub prompts: Vec<ImportRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: u64,
    pub skipped: u64,
}

pub async fn ensure_schema(pool: &PgPool) -> Result<(), CoreError> {
    sqlx::query(CREATE_PROMPTS_TABLE)
        .execute(pool)
        .await
        .map_err(|err| CoreError::Store(format!("failed to create prompts table: {err}")))?;

    Ok(())
}

pub async fn import_document(
    pool: &PgPool,
    document: ImportDocument,
) -> Result<ImportSummary, CoreError> {
    let mut summary = ImportSummary::default();

    for (index, record) in document.prompts.into_iter().enumerate() {
        let (Some(title), Some(prompt), Some(category)) =
            (record.title, record.prompt, record.category)
        else {
            warn!(index, "skipping record without title, prompt or category");
            summary.skipped += 1;
            continue;
        };

        let now = Utc::now();
        let created_at = record.created_at.unwrap_or(now);
        let updated_at = record.updated_at.unwrap_or(created_at);

        sqlx::query(
            "INSERT INTO prompts (title, description, prompt, category, type, author, \
             created_at, updated_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&title)
        .bind(&record.description)
        .bind(&prompt)
        .bind(&category)
        .bind(record.kind.as_deref().unwrap_or(DEFAULT_PROMPT_TYPE))
        .bind(&record.author)
        .bind(created_at)
        .bind(updated_at)
        .execute(pool)
        .await
        .map_err(|err| CoreError::Store(format!("failed to import \"{title}\": {err}")))?;

        info!(title = %title, "imported prompt");
        summary.imported += 1;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_documents_parse_with_missing_fields() {
        let document: ImportDocument = serde_json::from_str(
            r#"{
                "prompts": [
                    { "title": "Full", "prompt": "p", "category": "Writing",
                      "type": "Compose", "author": "ada",
                      "createdAt": "2023-05-01T10:00:00Z",
                      "updatedAt": "2023-05-02T10:00:00Z" },
                    { "title": "Bare", "prompt": "p", "category": "Writing" },
                    { "description": "no title at all" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(document.prompts.len(), 3);
        assert_eq!(document.prompts[1].kind, None);
        assert_eq!(document.prompts[2].title, None);
    }
}
