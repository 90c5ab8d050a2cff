use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::{StatusCode, header};
use actix_web::web::{Data, Json};
use actix_web::{HttpRequest, HttpResponse, ResponseError};

use crate::consts;
use crate::errors::PromptError;
use crate::models::prompt::{ChatResult, PromptPayload, PromptRequest};
use crate::service::PromptService;

fn status_for(error: &PromptError) -> StatusCode {
    match error {
        PromptError::ValidationError(_) => StatusCode::BAD_REQUEST,
        PromptError::DispatchError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        PromptError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: &PromptError) -> HttpResponse {
    HttpResponse::build(status_for(error)).json(ChatResult::from_error(error))
}

pub async fn prompt(
    service: Data<PromptService>,
    payload: Json<PromptPayload>,
) -> HttpResponse {
    let request = match PromptRequest::try_from(payload.into_inner()) {
        Ok(request) => request,
        Err(e) => {
            log::info!("rejected prompt: {}", e);
            return error_response(&e);
        }
    };

    match service.dispatch(&request).await {
        Ok(content) => HttpResponse::Ok().json(ChatResult::success(content)),
        Err(e) => error_response(&e),
    }
}

/// Keeps undecodable bodies on the same JSON schema as every other reply.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::info!("rejected request body: {}", err);
    let response = HttpResponse::build(err.status_code()).json(ChatResult::failure(format!(
        "{}{}",
        consts::INVALID_BODY_PREFIX,
        err
    )));
    InternalError::from_response(err, response).into()
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "POST"))
        .json(ChatResult::failure(consts::METHOD_NOT_ALLOWED_MESSAGE))
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ChatResult::failure(consts::NOT_FOUND_MESSAGE))
}
