use async_trait::async_trait;

use crate::config::ModelConfig;
use crate::errors::PromptError;
use crate::models::request::ChatCompletionCreate;
use crate::models::response_direct::{ApiErrorBody, ChatCompletion};

/// A one-shot text completion: prompt in, model text out.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, PromptError>;
}

/// Talks to an OpenAI-compatible `/chat/completions` endpoint.
pub struct LLMClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model_name: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl LLMClient {
    pub fn new(client: reqwest::Client, model_config: &ModelConfig) -> Self {
        Self {
            client,
            base_url: model_config.api_url.trim_end_matches('/').to_string(),
            api_key: model_config.api_key.clone(),
            model_name: model_config.model_name.clone(),
            temperature: model_config.temperature,
            max_tokens: model_config.max_tokens,
        }
    }

    fn build_request(&self, prompt: &str) -> ChatCompletionCreate {
        let mut request = ChatCompletionCreate::single_prompt(&self.model_name, prompt);
        request.temperature = self.temperature;
        request.max_tokens = self.max_tokens;
        request
    }

    pub async fn request_chat_completion(
        &self,
        request: &ChatCompletionCreate,
    ) -> Result<ChatCompletion, PromptError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, "/chat/completions"))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.error.message)
                .unwrap_or(text);

            return Err(PromptError::DispatchError(format!(
                "upstream returned {status}: {message}"
            )));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl ChatClient for LLMClient {
    async fn complete(&self, prompt: &str) -> Result<String, PromptError> {
        let request = self.build_request(prompt);
        let completion = self.request_chat_completion(&request).await?;

        if let Some(usage) = &completion.usage {
            log::debug!(
                "usage: prompt {}, completion {}, total {}",
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens
            );
        }

        let choice = completion.choices.into_iter().next().ok_or_else(|| {
            PromptError::DispatchError("upstream response contained no choices".to_string())
        })?;

        Ok(choice.message.content.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_config() -> ModelConfig {
        ModelConfig {
            model_name: "test-model".to_string(),
            api_url: "http://localhost:8081/".to_string(),
            api_key: "test-key".to_string(),
            temperature: Some(0.7),
            max_tokens: Some(512),
            ..ModelConfig::default()
        }
    }

    #[test]
    fn test_trailing_slash_trimmed_from_base_url() {
        let client = LLMClient::new(reqwest::Client::new(), &model_config());
        assert_eq!(client.base_url, "http://localhost:8081");
    }

    #[test]
    fn test_build_request_applies_model_options() {
        let client = LLMClient::new(reqwest::Client::new(), &model_config());
        let request = client.build_request("Hello");

        assert_eq!(request.model, "test-model");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].content, "Hello");
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.max_tokens, Some(512));
    }
}
