use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("prompt not found")]
    NotFound,

    #[error("store error: {0}")]
    Store(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("suggestion provider error: {0}")]
    ExternalService(String),

    #[error("invalid suggestion payload: {0}")]
    SuggestionParse(String),
}
