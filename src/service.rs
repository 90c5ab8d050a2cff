use std::sync::Arc;

use crate::errors::PromptError;
use crate::llm_client::ChatClient;
use crate::models::prompt::PromptRequest;

pub struct PromptService {
    client: Arc<dyn ChatClient>,
}

impl PromptService {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    /// Sends the prompt upstream once. No retries.
    pub async fn dispatch(&self, request: &PromptRequest) -> Result<String, PromptError> {
        let prompt = request.prompt();
        log::debug!("dispatching prompt ({} chars)", prompt.chars().count());

        match self.client.complete(prompt).await {
            Ok(content) => {
                log::debug!("completion received ({} chars)", content.chars().count());
                Ok(content)
            }
            Err(e) => {
                log::error!("chat completion failed: {}", e);
                Err(match e {
                    PromptError::DispatchError(_) => e,
                    other => PromptError::DispatchError(other.message().to_string()),
                })
            }
        }
    }
}
