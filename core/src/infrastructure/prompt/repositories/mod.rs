pub mod json_file_repository;
pub mod postgres_repository;

use chrono::{DateTime, Utc};

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::ports::HealthCheckRepository,
    prompt::{
        entities::prompt::Prompt,
        ports::PromptRepository,
        value_objects::{NewPrompt, UpdatePromptInput},
    },
};
use json_file_repository::JsonFilePromptRepository;
use postgres_repository::PostgresPromptRepository;

/// Record store selected at startup. Keeps the service and the HTTP state
/// concrete while both backends satisfy the same ports.
#[derive(Debug, Clone)]
pub enum PromptStore {
    Postgres(PostgresPromptRepository),
    JsonFile(JsonFilePromptRepository),
}

impl PromptRepository for PromptStore {
    async fn list_prompts(&self) -> Result<Vec<Prompt>, CoreError> {
        match self {
            PromptStore::Postgres(repository) => repository.list_prompts().await,
            PromptStore::JsonFile(repository) => repository.list_prompts().await,
        }
    }

    async fn create_prompt(&self, new: NewPrompt) -> Result<Prompt, CoreError> {
        match self {
            PromptStore::Postgres(repository) => repository.create_prompt(new).await,
            PromptStore::JsonFile(repository) => repository.create_prompt(new).await,
        }
    }

    async fn update_prompt(
        &self,
        id: i64,
        changes: UpdatePromptInput,
    ) -> Result<Prompt, CoreError> {
        match self {
            PromptStore::Postgres(repository) => repository.update_prompt(id, changes).await,
            PromptStore::JsonFile(repository) => repository.update_prompt(id, changes).await,
        }
    }

    async fn delete_prompt(&self, id: i64) -> Result<(), CoreError> {
        match self {
            PromptStore::Postgres(repository) => repository.delete_prompt(id).await,
            PromptStore::JsonFile(repository) => repository.delete_prompt(id).await,
        }
    }
}

impl HealthCheckRepository for PromptStore {
    async fn ping(&self) -> Result<DateTime<Utc>, CoreError> {
        match self {
            PromptStore::Postgres(repository) => repository.ping().await,
            PromptStore::JsonFile(repository) => repository.ping().await,
        }
    }
}
