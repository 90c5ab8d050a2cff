use serde::{self, Deserialize, Serialize};

use crate::consts;
use crate::errors::PromptError;
use crate::validation;

/// Body of `POST /prompt` as it arrives on the wire.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PromptPayload {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// A prompt that passed validation. The text is kept exactly as sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    prompt: String,
}

impl PromptRequest {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

impl TryFrom<PromptPayload> for PromptRequest {
    type Error = PromptError;

    fn try_from(payload: PromptPayload) -> Result<Self, Self::Error> {
        let prompt = validation::validate_prompt(payload.prompt)?;
        Ok(Self { prompt })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatResult {
    pub content: Option<String>,
    pub error: Option<String>,
}

impl ChatResult {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            content: None,
            error: Some(error.into()),
        }
    }

    /// Validation errors are reported verbatim; anything else is a failed
    /// dispatch and gets the processing prefix.
    pub fn from_error(error: &PromptError) -> Self {
        match error {
            PromptError::ValidationError(msg) => Self::failure(msg.as_str()),
            other => Self::failure(format!("{}{}", consts::DISPATCH_ERROR_PREFIX, other.message())),
        }
    }
}
