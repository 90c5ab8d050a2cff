use crate::consts::{EMPTY_PROMPT_MESSAGE, PROMPT_LENGTH_MESSAGE, PROMPT_MAX_CHARS, PROMPT_MIN_CHARS};
use crate::errors::PromptError;

/// Checks a raw prompt and hands it back untouched if it is acceptable.
///
/// Blankness is judged on the trimmed text, length on the text as sent,
/// counted in characters rather than bytes.
pub fn validate_prompt(prompt: Option<String>) -> Result<String, PromptError> {
    let prompt = match prompt {
        Some(prompt) if !prompt.trim().is_empty() => prompt,
        _ => {
            return Err(PromptError::ValidationError(
                EMPTY_PROMPT_MESSAGE.to_string(),
            ));
        }
    };

    let length = prompt.chars().count();
    if !(PROMPT_MIN_CHARS..=PROMPT_MAX_CHARS).contains(&length) {
        return Err(PromptError::ValidationError(
            PROMPT_LENGTH_MESSAGE.to_string(),
        ));
    }

    Ok(prompt)
}
