use actix_web::{App, HttpServer, middleware::Logger, web};
use log::info;
use reqwest::Client;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use storyforge::{config::Config, handlers, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {e}");
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    // Story generation can take minutes; the storage write should not.
    let inference_client = Client::builder()
        .connect_timeout(Duration::from_secs(120))
        .timeout(Duration::from_secs(300))
        .build()
        .expect("failed to build inference client");
    let storage_client = Client::builder()
        .connect_timeout(Duration::from_secs(60))
        .timeout(Duration::from_secs(60))
        .build()
        .expect("failed to build storage client");

    let state = Arc::new(AppState {
        config: config.clone(),
        inference_client,
        storage_client,
    });

    info!("Server running at http://localhost:{port}");
    info!("Inference backend: {}", config.inference_url);
    info!("Model: {}", config.model_id);
    info!("Storage backend: {}", config.storage_url);
    info!("Destination bucket: {}", config.bucket);
    info!(
        "Generation params: maxTokens={}, temperature={}, topP={}",
        config.max_tokens, config.temperature, config.top_p
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(state.clone()))
            .wrap(Logger::default())
            .service(web::resource("/stories").route(web::post().to(handlers::create_story)))
            .service(web::resource("/health").route(web::get().to(handlers::health)))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
