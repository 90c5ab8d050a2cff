use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::PromptError;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: consts::SERVER_HOST.to_string(),
            port: consts::SERVER_PORT,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: consts::DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

/// Upstream chat model settings. In the config file `api_key` holds the name
/// of an environment variable; the loader swaps it for that variable's value.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ModelConfig {
    pub model_name: String,
    pub api_url: String,
    pub api_key: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_name: consts::DEFAULT_MODEL_NAME.to_string(),
            api_url: consts::DEFAULT_API_URL.to_string(),
            api_key: consts::DEFAULT_API_KEY_VAR.to_string(),
            temperature: None,
            max_tokens: None,
            connect_timeout_secs: consts::CONNECT_TIMEOUT_SECS,
            read_timeout_secs: consts::READ_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub model: ModelConfig,
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, PromptError>;
}

pub struct FileConfigLoader {
    path: PathBuf,
    required: bool,
}

impl FileConfigLoader {
    /// Uses `PR_CONFIG_FILE` when set, otherwise `./config.json`. Only an
    /// explicitly named file has to exist.
    pub fn new() -> Self {
        match std::env::var("PR_CONFIG_FILE") {
            Ok(path) => Self::with_path(path),
            Err(_) => Self {
                path: PathBuf::from(consts::DEFAULT_CONFIG_FILE),
                required: false,
            },
        }
    }

    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required: true,
        }
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load_config(&self) -> Result<Config, PromptError> {
        let mut config = if !self.required && !self.path.exists() {
            log::info!(
                "config file {} not found, using built-in defaults",
                self.path.display()
            );
            Config::default()
        } else {
            let config_str = std::fs::read_to_string(&self.path).map_err(|e| {
                PromptError::ConfigError(format!("{}: {}", self.path.display(), e))
            })?;
            serde_json::from_str(&config_str).map_err(|e| {
                PromptError::ConfigError(format!("{}: {}", self.path.display(), e))
            })?
        };

        config.model.api_key = resolve_api_key(&config.model.api_key, |name| {
            std::env::var(name).ok()
        });
        if config.model.api_key.is_empty() {
            log::warn!("no API key resolved for model {}", config.model.model_name);
        }

        Ok(config)
    }
}

pub(crate) fn resolve_api_key(var_name: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup(var_name).unwrap_or_default()
}

pub fn load_config() -> Result<Config, PromptError> {
    let loader = FileConfigLoader::new();
    loader.load_config()
}
