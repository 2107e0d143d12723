use crate::domain::{
    common::entities::app_errors::CoreError,
    prompt::{
        entities::prompt::Prompt,
        value_objects::{CreatePromptInput, NewPrompt, UpdatePromptInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait PromptService: Send + Sync {
    fn list_prompts(&self) -> impl Future<Output = Result<Vec<Prompt>, CoreError>> + Send;

    fn create_prompt(
        &self,
        input: CreatePromptInput,
    ) -> impl Future<Output = Result<Prompt, CoreError>> + Send;

    fn update_prompt(
        &self,
        id: i64,
        input: UpdatePromptInput,
    ) -> impl Future<Output = Result<Prompt, CoreError>> + Send;

    fn delete_prompt(&self, id: i64) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PromptRepository: Send + Sync {
    fn list_prompts(&self) -> impl Future<Output = Result<Vec<Prompt>, CoreError>> + Send;

    fn create_prompt(
        &self,
        new: NewPrompt,
    ) -> impl Future<Output = Result<Prompt, CoreError>> + Send;

    fn update_prompt(
        &self,
        id: i64,
        changes: UpdatePromptInput,
    ) -> impl Future<Output = Result<Prompt, CoreError>> + Send;

    fn delete_prompt(&self, id: i64) -> impl Future<Output = Result<(), CoreError>> + Send;
}
