use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use iris_backend::classifier::config::{ModelConfig, ModelConfigError};
use iris_backend::classifier::model::Model;
use iris_backend::config::ServerConfig;
use iris_backend::routes::configure_routes;
use std::io::ErrorKind;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(ErrorKind::InvalidInput, e.to_string()))?;

    let model_config = match ModelConfig::load(&config.model_config) {
        Ok(model_config) => model_config,
        Err(ModelConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            log::warn!(
                "Model config {} not found, using built-in centroids",
                config.model_config.display()
            );
            ModelConfig::default()
        }
        Err(e) => {
            log::error!("Failed to load model config: {}", e);
            return Err(std::io::Error::new(
                ErrorKind::Other,
                format!("Model loading failed: {}", e),
            ));
        }
    };

    let model = web::Data::new(Model::new(model_config));
    log::info!(
        "Model classes: {}",
        model.labels().collect::<Vec<_>>().join(", ")
    );

    let frontend_dir = config.frontend_dir.clone();
    let bind_address = config.bind_address();
    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(model.clone())
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
