#![allow(dead_code)]

use serde_json::{Value, json};

pub const ALLOWED_ORIGIN: &str = "http://127.0.0.1:5500";

pub fn sample_completion_response(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test-1",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 5, "completion_tokens": 1, "total_tokens": 6}
    })
}

pub fn null_content_response() -> Value {
    json!({
        "id": "chatcmpl-test-2",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": null},
            "finish_reason": "stop"
        }]
    })
}

pub fn empty_choices_response() -> Value {
    json!({
        "id": "chatcmpl-test-3",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "test-model",
        "choices": []
    })
}

pub fn prompt_body(prompt: &str) -> Value {
    json!({ "prompt": prompt })
}
