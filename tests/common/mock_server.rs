use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub async fn setup_chat_completion_mock(status: u16, body: impl Into<Value>) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body.into()))
        .mount(&mock_server)
        .await;

    mock_server
}

pub async fn setup_error_mock(
    status_code: u16,
    error_message: &str,
    error_type: &str,
) -> MockServer {
    let error_body = json!({
        "error": {
            "message": error_message,
            "type": error_type
        }
    });

    setup_chat_completion_mock(status_code, error_body).await
}
