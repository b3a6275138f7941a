use actix_files::Files;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use log::{error, info, warn};
use shared::{ErrorResponse, Measurement, PredictResponse};
use std::path::PathBuf;

use crate::classifier::model::{InferenceError, Model};

pub const WELCOME: &str = "Welcome to the Iris ML API!";

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    cfg.configure(configure_api)
        .service(Files::new("/static", frontend_dir).index_file("index.html"));
}

/// `/` and `/predict`. Expects a `web::Data<Model>` in app data.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::resource("/").route(web::get().to(home)))
        .service(web::resource("/predict").route(web::post().to(predict)));
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        warn!("Rejected prediction payload: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse {
            error: err.to_string(),
        });
        InternalError::from_response(err, response).into()
    })
}

async fn home() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body(WELCOME)
}

async fn predict(model: web::Data<Model>, body: web::Json<Measurement>) -> HttpResponse {
    let measurement = body.into_inner();
    match model.predict(&measurement) {
        Ok(label) => {
            info!("Predicted {} for {:?}", label, measurement.to_array());
            HttpResponse::Ok().json(PredictResponse {
                prediction: label.to_string(),
            })
        }
        // JSON cannot carry NaN or infinities, so this only fires for callers
        // that build a Measurement outside the Json extractor.
        Err(e @ InferenceError::InvalidInput(_)) => {
            warn!("Rejected prediction input: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse { error: e.to_string() })
        }
        Err(e) => {
            error!("Model inference error: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse { error: e.to_string() })
        }
    }
}
