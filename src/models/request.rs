use serde::{self, Deserialize, Serialize};

use super::Role;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatCompletionCreate {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_tokens: Option<u32>,
}

impl ChatCompletionCreate {
    /// A single-turn request: the prompt is the only message.
    pub fn single_prompt(model: &str, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![Message {
                role: Role::User,
                content: prompt.to_string(),
            }],
            temperature: None,
            max_tokens: None,
        }
    }
}
