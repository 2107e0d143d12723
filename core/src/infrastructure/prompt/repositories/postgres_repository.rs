use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::ports::HealthCheckRepository,
    prompt::{
        entities::prompt::Prompt,
        ports::PromptRepository,
        value_objects::{NewPrompt, UpdatePromptInput},
    },
};
use crate::infrastructure::prompt::mappers::PromptRow;

#[derive(Debug, Clone)]
pub struct PostgresPromptRepository {
    pool: PgPool,
}

impl PostgresPromptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PromptRepository for PostgresPromptRepository {
    async fn list_prompts(&self) -> Result<Vec<Prompt>, CoreError> {
        let rows =
            sqlx::query_as::<_, PromptRow>("SELECT * FROM prompts ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(|err| {
                    error!("failed to list prompts: {err}");
                    CoreError::Store(format!("failed to list prompts: {err}"))
                })?;

        Ok(rows.into_iter().map(Prompt::from).collect())
    }

    async fn create_prompt(&self, new: NewPrompt) -> Result<Prompt, CoreError> {
        let row = sqlx::query_as::<_, PromptRow>(
            "INSERT INTO prompts (title, description, prompt, category, type, author) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.prompt)
        .bind(&new.category)
        .bind(&new.kind)
        .bind(&new.author)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            error!("failed to create prompt: {err}");
            CoreError::Store(format!("failed to create prompt: {err}"))
        })?;

        Ok(Prompt::from(row))
    }

    async fn update_prompt(
        &self,
        id: i64,
        changes: UpdatePromptInput,
    ) -> Result<Prompt, CoreError> {
        let row = sqlx::query_as::<_, PromptRow>(
            "UPDATE prompts SET \
                title = COALESCE($1, title), \
                description = COALESCE($2, description), \
                prompt = COALESCE($3, prompt), \
                category = COALESCE($4, category), \
                type = COALESCE($5, type), \
                author = COALESCE($6, author), \
                updated_at = CURRENT_TIMESTAMP \
             WHERE id = $7 RETURNING *",
        )
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.prompt)
        .bind(&changes.category)
        .bind(&changes.kind)
        .bind(&changes.author)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            error!("failed to update prompt {id}: {err}");
            CoreError::Store(format!("failed to update prompt: {err}"))
        })?;

        row.map(Prompt::from).ok_or(CoreError::NotFound)
    }

    async fn delete_prompt(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM prompts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                error!("failed to delete prompt {id}: {err}");
                CoreError::Store(format!("failed to delete prompt: {err}"))
            })?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}

impl HealthCheckRepository for PostgresPromptRepository {
    async fn ping(&self) -> Result<DateTime<Utc>, CoreError> {
        sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
            .fetch_one(&self.pool)
            .await
            .map_err(|err| CoreError::Store(format!("liveness query failed: {err}")))
    }
}
