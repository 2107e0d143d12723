use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    prompt::{
        entities::prompt::Prompt,
        ports::{PromptRepository, PromptService},
        value_objects::{CreatePromptInput, NewPrompt, UpdatePromptInput},
    },
};

impl<R, C> PromptService for Service<R, C>
where
    R: PromptRepository,
    C: Send + Sync,
{
    async fn list_prompts(&self) -> Result<Vec<Prompt>, CoreError> {
        self.repository.list_prompts().await
    }

    async fn create_prompt(&self, input: CreatePromptInput) -> Result<Prompt, CoreError> {
        self.repository.create_prompt(NewPrompt::from(input)).await
    }

    async fn update_prompt(&self, id: i64, input: UpdatePromptInput) -> Result<Prompt, CoreError> {
        self.repository.update_prompt(id, input).await
    }

    async fn delete_prompt(&self, id: i64) -> Result<(), CoreError> {
        self.repository.delete_prompt(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::prompt::ports::MockPromptRepository;

    fn create_input() -> CreatePromptInput {
        CreatePromptInput {
            title: "Release notes".to_string(),
            description: None,
            prompt: "Write release notes for the diff below".to_string(),
            category: "Writing".to_string(),
            kind: None,
            author: None,
        }
    }

    #[tokio::test]
    async fn test_create_normalizes_defaults_before_store() {
        let mut repository = MockPromptRepository::new();
        repository
            .expect_create_prompt()
            .withf(|new| new.kind == "Compose" && new.author == "Unknown")
            .returning(|new| Box::pin(async move { Ok(Prompt::new(1, new, Utc::now())) }));

        let service = Service::new(repository, ());
        let created = service.create_prompt(create_input()).await.unwrap();

        assert_eq!(created.kind, "Compose");
        assert_eq!(created.author.as_deref(), Some("Unknown"));
    }

    #[tokio::test]
    async fn test_update_propagates_not_found() {
        let mut repository = MockPromptRepository::new();
        repository
            .expect_update_prompt()
            .returning(|_, _| Box::pin(async { Err(CoreError::NotFound) }));

        let service = Service::new(repository, ());
        let err = service
            .update_prompt(42, UpdatePromptInput::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_passes_id_through() {
        let mut repository = MockPromptRepository::new();
        repository
            .expect_delete_prompt()
            .withf(|id| *id == 7)
            .returning(|_| Box::pin(async { Ok(()) }));

        let service = Service::new(repository, ());
        assert!(service.delete_prompt(7).await.is_ok());
    }
}
