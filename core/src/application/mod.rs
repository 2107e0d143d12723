use crate::domain::common::{
    PromptdeckConfig, StorageConfig, entities::app_errors::CoreError, services::Service,
};
use crate::infrastructure::{
    db::postgres::Postgres,
    llm::openai_client::OpenAiChatClient,
    prompt::repositories::{
        PromptStore, json_file_repository::JsonFilePromptRepository,
        postgres_repository::PostgresPromptRepository,
    },
};

pub type PromptdeckService = Service<PromptStore, OpenAiChatClient>;

/// Wires the configured backend and the chat-completion client into the
/// service. The pool is lazy, so this never blocks on connectivity.
pub fn create_service(config: PromptdeckConfig) -> Result<PromptdeckService, CoreError> {
    let store = match config.storage {
        StorageConfig::Postgres(database) => {
            let postgres = Postgres::new(&database)?;
            PromptStore::Postgres(PostgresPromptRepository::new(postgres.get_pool().clone()))
        }
        StorageConfig::JsonFile(path) => {
            PromptStore::JsonFile(JsonFilePromptRepository::new(path))
        }
    };

    Ok(Service::new(store, OpenAiChatClient::new(config.llm)))
}
