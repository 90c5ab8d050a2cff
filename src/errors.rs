use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PromptError {
    ValidationError(String),
    DispatchError(String),
    ConfigError(String),
}

impl PromptError {
    /// The bare message, without the kind prefix used by `Display`.
    pub fn message(&self) -> &str {
        match self {
            PromptError::ValidationError(msg)
            | PromptError::DispatchError(msg)
            | PromptError::ConfigError(msg) => msg,
        }
    }
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            PromptError::DispatchError(msg) => write!(f, "Dispatch error: {}", msg),
            PromptError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<reqwest::Error> for PromptError {
    fn from(err: reqwest::Error) -> Self {
        PromptError::DispatchError(err.to_string())
    }
}

impl From<serde_json::Error> for PromptError {
    fn from(err: serde_json::Error) -> Self {
        PromptError::DispatchError(err.to_string())
    }
}

impl From<std::io::Error> for PromptError {
    fn from(err: std::io::Error) -> Self {
        PromptError::ConfigError(err.to_string())
    }
}
