use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LlmConfig, entities::app_errors::CoreError},
    suggestion::ports::ChatCompletionClient,
};

#[derive(Debug, Clone)]
pub struct OpenAiChatClient {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

impl OpenAiChatClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            api_key: config.api_key,
            model: config.model,
            base_url: config.base_url,
            client: Client::new(),
        }
    }

    async fn call_chat_api(&self, request: ChatCompletionRequest) -> Result<String, CoreError> {
        if self.api_key.is_empty() {
            return Err(CoreError::ExternalService(
                "OPENAI_API_KEY is not configured".to_string(),
            ));
        }

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("chat completion request failed: {err}");
                CoreError::ExternalService(format!("chat completion request failed: {err}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("chat completion API returned {status}: {body}");
            return Err(CoreError::ExternalService(format!(
                "chat completion API returned {status}"
            )));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            tracing::error!("failed to decode chat completion response: {err}");
            CoreError::ExternalService(format!(
                "failed to decode chat completion response: {err}"
            ))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CoreError::ExternalService("empty chat completion".to_string()))
    }
}

impl ChatCompletionClient for OpenAiChatClient {
    async fn complete(
        &self,
        system: String,
        user: String,
        temperature: f32,
    ) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
        };

        self.call_chat_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: &str) -> OpenAiChatClient {
        OpenAiChatClient::new(LlmConfig {
            api_key: api_key.to_string(),
            model: "gpt-3.5-turbo".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        })
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_dialing() {
        let err = client("")
            .complete("system".to_string(), "user".to_string(), 0.7)
            .await
            .unwrap_err();

        match err {
            CoreError::ExternalService(message) => {
                assert!(message.contains("OPENAI_API_KEY"));
            }
            other => panic!("expected an external service error, got {other:?}"),
        }
    }

    #[test]
    fn test_request_serializes_in_provider_shape() {
        let request = ChatCompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "s".to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: "u".to_string(),
                },
            ],
            temperature: 0.7,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "u");
        assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }
}
