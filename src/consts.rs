pub const PROMPT_MIN_CHARS: usize = 2;
pub const PROMPT_MAX_CHARS: usize = 100_000;

pub const EMPTY_PROMPT_MESSAGE: &str = "Prompt cannot be empty";
pub const PROMPT_LENGTH_MESSAGE: &str = "Prompt must be between 2 and 100000 characters";
pub const DISPATCH_ERROR_PREFIX: &str = "Error processing request: ";
pub const INVALID_BODY_PREFIX: &str = "Invalid request body: ";
pub const NOT_FOUND_MESSAGE: &str = "Not found";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

// A prompt of PROMPT_MAX_CHARS four-byte characters, JSON-escaped, still fits.
pub const JSON_PAYLOAD_LIMIT: usize = 2 * 1024 * 1024;

pub(crate) const CONNECT_TIMEOUT_SECS: u64 = 30;
pub(crate) const READ_TIMEOUT_SECS: u64 = 60;
pub(crate) const SERVER_HOST: &str = "0.0.0.0";
pub(crate) const SERVER_PORT: u16 = 8080;
pub(crate) const CORS_MAX_AGE_SECS: usize = 3600;

pub(crate) const DEFAULT_CONFIG_FILE: &str = "./config.json";
pub(crate) const DEFAULT_ALLOWED_ORIGIN: &str = "http://127.0.0.1:5500";
pub(crate) const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub(crate) const DEFAULT_MODEL_NAME: &str = "gemini-2.0-flash";
pub(crate) const DEFAULT_API_KEY_VAR: &str = "GEMINI_API_KEY";
