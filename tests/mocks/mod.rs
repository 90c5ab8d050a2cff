#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use prompt_relay::errors::PromptError;
use prompt_relay::llm_client::ChatClient;

/// Replays queued outcomes in order and records every prompt it sees.
pub struct MockChatClient {
    responses: Arc<Mutex<VecDeque<Result<String, PromptError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(response: Result<String, PromptError>) -> Self {
        let client = Self::new();
        client.add_response(response);
        client
    }

    pub fn add_response(&self, response: Result<String, PromptError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, PromptError> {
        self.calls.lock().unwrap().push(prompt.to_string());
        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(PromptError::DispatchError(
                "no mock response queued".to_string(),
            ))
        })
    }
}

/// Answers each prompt with `echo: <prompt>` after a delay that shrinks with
/// prompt length, so concurrent calls finish out of submission order.
pub struct EchoChatClient;

#[async_trait]
impl ChatClient for EchoChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, PromptError> {
        let delay = 50u64.saturating_sub(prompt.len() as u64 * 5);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        if prompt.starts_with("fail") {
            return Err(PromptError::DispatchError(format!("refused {prompt}")));
        }
        Ok(format!("echo: {prompt}"))
    }
}
