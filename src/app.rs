use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{Method, header};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, web};

use crate::{config, consts, handlers, service};

fn cors(cors_config: &config::CorsConfig) -> Cors {
    Cors::default()
        .allowed_origin(&cors_config.allowed_origin)
        .allowed_methods(vec![Method::POST])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(consts::CORS_MAX_AGE_SECS)
        .block_on_origin_mismatch(true)
}

pub fn create_app(
    prompt_service: Arc<service::PromptService>,
    config: Arc<config::Config>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .limit(consts::JSON_PAYLOAD_LIMIT)
        .error_handler(handlers::json_error_handler);

    App::new()
        .wrap(cors(&config.cors))
        .wrap(Logger::default())
        .app_data(Data::from(prompt_service))
        .app_data(json_config)
        .service(
            web::resource("/prompt")
                .route(web::post().to(handlers::prompt))
                .default_service(web::to(handlers::method_not_allowed)),
        )
        .default_service(web::to(handlers::not_found))
}
