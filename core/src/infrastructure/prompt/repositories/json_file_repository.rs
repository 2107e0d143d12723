use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
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

/// On-disk document shape: `{ "prompts": [ ... ] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PromptDocument {
    prompts: Vec<Prompt>,
}

/// Millisecond-clock id source, forced strictly monotonic so two creations
/// in the same millisecond never collide and deleted ids are not reissued.
#[derive(Debug, Default)]
struct IdSource {
    last_issued: i64,
}

impl IdSource {
    fn next(&mut self, now: DateTime<Utc>, prompts: &[Prompt]) -> i64 {
        let floor = prompts.iter().map(|p| p.id).max().unwrap_or(0);
        let id = now.timestamp_millis().max(self.last_issued + 1).max(floor + 1);
        self.last_issued = id;
        id
    }
}

/// JSON-file store. The document is rewritten wholesale on every mutation
/// while the writer lock is held, so concurrent mutations cannot interleave
/// partial writes. Reads take the same lock and therefore never observe a
/// half-written document.
#[derive(Debug, Clone)]
pub struct JsonFilePromptRepository {
    path: PathBuf,
    writer: Arc<Mutex<IdSource>>,
}

impl JsonFilePromptRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            writer: Arc::new(Mutex::new(IdSource::default())),
        }
    }

    async fn load(&self) -> Result<PromptDocument, CoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            // A store that does not exist yet is an empty library.
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(PromptDocument::default());
            }
            Err(err) => {
                error!("failed to read {}: {err}", self.path.display());
                return Err(CoreError::Store(format!(
                    "failed to read prompts file: {err}"
                )));
            }
        };

        serde_json::from_str(&raw).map_err(|err| {
            error!("malformed prompts file {}: {err}", self.path.display());
            CoreError::Store(format!("malformed prompts file: {err}"))
        })
    }

    async fn persist(&self, document: &PromptDocument) -> Result<(), CoreError> {
        let raw = serde_json::to_string_pretty(document)
            .map_err(|err| CoreError::Store(format!("failed to encode prompts file: {err}")))?;

        tokio::fs::write(&self.path, raw).await.map_err(|err| {
            error!("failed to write {}: {err}", self.path.display());
            CoreError::Store(format!("failed to write prompts file: {err}"))
        })
    }
}

impl PromptRepository for JsonFilePromptRepository {
    async fn list_prompts(&self) -> Result<Vec<Prompt>, CoreError> {
        let _writer = self.writer.lock().await;
        let mut prompts = self.load().await?.prompts;
        // Same contract as the SQL backend: newest first, whatever order a
        // legacy document holds them in.
        prompts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(prompts)
    }

    async fn create_prompt(&self, new: NewPrompt) -> Result<Prompt, CoreError> {
        let mut ids = self.writer.lock().await;
        let mut document = self.load().await?;

        let now = Utc::now();
        let id = ids.next(now, &document.prompts);
        let prompt = Prompt::new(id, new, now);

        document.prompts.insert(0, prompt.clone());
        self.persist(&document).await?;

        Ok(prompt)
    }

    async fn update_prompt(
        &self,
        id: i64,
        changes: UpdatePromptInput,
    ) -> Result<Prompt, CoreError> {
        let _writer = self.writer.lock().await;
        let mut document = self.load().await?;

        let Some(stored) = document.prompts.iter_mut().find(|p| p.id == id) else {
            return Err(CoreError::NotFound);
        };

        stored.merge(changes, Utc::now());
        let updated = stored.clone();
        self.persist(&document).await?;

        Ok(updated)
    }

    async fn delete_prompt(&self, id: i64) -> Result<(), CoreError> {
        let _writer = self.writer.lock().await;
        let mut document = self.load().await?;

        let before = document.prompts.len();
        document.prompts.retain(|p| p.id != id);
        if document.prompts.len() == before {
            return Err(CoreError::NotFound);
        }

        self.persist(&document).await
    }
}

impl HealthCheckRepository for JsonFilePromptRepository {
    async fn ping(&self) -> Result<DateTime<Utc>, CoreError> {
        let _writer = self.writer.lock().await;
        self.load().await?;

        Ok(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::domain::prompt::value_objects::CreatePromptInput;

    fn repository(dir: &TempDir) -> JsonFilePromptRepository {
        JsonFilePromptRepository::new(dir.path().join("prompts.json"))
    }

    fn new_prompt(title: &str) -> NewPrompt {
        NewPrompt::from(CreatePromptInput {
            title: title.to_string(),
            description: Some(format!("{title} description")),
            prompt: format!("{title} body"),
            category: "Writing".to_string(),
            kind: None,
            author: None,
        })
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty_library() {
        let dir = TempDir::new().unwrap();
        let repository = repository(&dir);

        assert!(repository.list_prompts().await.unwrap().is_empty());
        assert!(repository.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_created_prompts_list_newest_first() {
        let dir = TempDir::new().unwrap();
        let repository = repository(&dir);

        let first = repository.create_prompt(new_prompt("First")).await.unwrap();
        let second = repository
            .create_prompt(new_prompt("Second"))
            .await
            .unwrap();

        let listed = repository.list_prompts().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
        assert_eq!(listed[0].author.as_deref(), Some("Unknown"));
    }

    #[tokio::test]
    async fn test_ids_strictly_monotonic_within_one_millisecond() {
        let dir = TempDir::new().unwrap();
        let repository = repository(&dir);

        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(
                repository
                    .create_prompt(new_prompt(&format!("P{i}")))
                    .await
                    .unwrap()
                    .id,
            );
        }

        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0], "ids must strictly increase: {ids:?}");
        }
    }

    #[tokio::test]
    async fn test_update_merges_and_refreshes_updated_at() {
        let dir = TempDir::new().unwrap();
        let repository = repository(&dir);

        let created = repository.create_prompt(new_prompt("Keep me")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let updated = repository
            .update_prompt(
                created.id,
                UpdatePromptInput {
                    description: Some("New description".to_string()),
                    ..UpdatePromptInput::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Keep me");
        assert_eq!(updated.description.as_deref(), Some("New description"));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        // The merged record is what later reads observe.
        let listed = repository.list_prompts().await.unwrap();
        assert_eq!(listed[0].description.as_deref(), Some("New description"));
    }

    #[tokio::test]
    async fn test_update_unknown_id_not_found() {
        let dir = TempDir::new().unwrap();
        let repository = repository(&dir);

        let err = repository
            .update_prompt(12345, UpdatePromptInput::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_not_idempotent() {
        let dir = TempDir::new().unwrap();
        let repository = repository(&dir);

        let created = repository.create_prompt(new_prompt("Short lived")).await.unwrap();

        assert!(repository.delete_prompt(created.id).await.is_ok());
        assert!(matches!(
            repository.delete_prompt(created.id).await,
            Err(CoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_document_shape_on_disk() {
        let dir = TempDir::new().unwrap();
        let repository = repository(&dir);

        repository.create_prompt(new_prompt("Shape")).await.unwrap();

        let raw = std::fs::read_to_string(dir.path().join("prompts.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let records = value.get("prompts").unwrap().as_array().unwrap();

        assert_eq!(records.len(), 1);
        assert!(records[0].get("createdAt").is_some());
        assert_eq!(records[0].get("type").unwrap(), "Compose");
    }

    #[tokio::test]
    async fn test_malformed_document_is_store_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompts.json");
        std::fs::write(&path, "{ not json").unwrap();

        let repository = JsonFilePromptRepository::new(path);
        assert!(matches!(
            repository.list_prompts().await,
            Err(CoreError::Store(_))
        ));
    }

    #[tokio::test]
    async fn test_type_less_legacy_record_lists_with_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompts.json");
        std::fs::write(
            &path,
            r#"{"prompts":[{"id":1,"title":"Old","prompt":"body","category":"Writing","createdAt":"2023-01-01T00:00:00Z","updatedAt":"2023-01-01T00:00:00Z"}]}"#,
        )
        .unwrap();

        let repository = JsonFilePromptRepository::new(path);
        let listed = repository.list_prompts().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].kind, "Compose");
    }
}
