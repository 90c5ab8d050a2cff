use std::sync::Arc;
use std::time::Duration;

use prompt_relay::app::create_app;
use prompt_relay::config;
use prompt_relay::llm_client::LLMClient;
use prompt_relay::service::PromptService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing prompt relay service...");

    let config = config::load_config().map_err(|e| std::io::Error::other(e.to_string()))?;

    let http_client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(config.model.connect_timeout_secs))
        .read_timeout(Duration::from_secs(config.model.read_timeout_secs))
        .build()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let llm_client = LLMClient::new(http_client, &config.model);
    let prompt_service = Arc::new(PromptService::new(Arc::new(llm_client)));

    let bind_addr = (config.server.host.clone(), config.server.port);
    log::info!(
        "model {} via {}, accepting origin {}",
        config.model.model_name,
        config.model.api_url,
        config.cors.allowed_origin
    );
    let config = Arc::new(config);

    let app_factory = move || create_app(prompt_service.clone(), config.clone());

    let server = actix_web::HttpServer::new(app_factory);

    server.bind(bind_addr)?.run().await
}
