use actix_web::{App, HttpResponse, HttpServer, web};
use iris_backend::classifier::model::Model;
use iris_backend::routes::configure_api;
use shared::error::{NETWORK_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE};
use shared::{
    Field, FormState, Measurement, PredictionClient, Settlement, SubmissionController,
    SubmissionOutcome, predict_url,
};

struct ReqwestClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ReqwestClient {
    fn new(endpoint: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl PredictionClient for ReqwestClient {
    async fn send(&self, measurement: &Measurement) -> Settlement {
        let response = match self
            .http
            .post(predict_url(&self.endpoint))
            .json(measurement)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Settlement::Failed(e.to_string()),
        };
        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => Settlement::Responded { status, body },
            Err(e) => Settlement::Failed(e.to_string()),
        }
    }
}

fn spawn_server(configure: fn(&mut web::ServiceConfig)) -> String {
    let server = HttpServer::new(move || App::new().configure(configure))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind test server");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}

fn real_service(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::Data::new(Model::default()))
        .configure(configure_api);
}

fn controller_for(endpoint: String) -> SubmissionController<ReqwestClient> {
    SubmissionController::new(ReqwestClient::new(endpoint))
}

fn filled_form(values: [&str; 4]) -> FormState {
    let mut form = FormState::new();
    for (field, value) in Field::ALL.into_iter().zip(values) {
        form.update(field, value);
    }
    form
}

#[actix_web::test]
async fn classifies_against_real_service() {
    let controller = controller_for(spawn_server(real_service));

    let mut form = FormState::new();
    form.update_named("sepal_length", "5.1");
    form.update_named("sepal_width", "3.5");
    form.update_named("petal_length", "1.4");
    form.update_named("petal_width", "0.2");

    assert!(controller.submit(&mut form).await);
    assert_eq!(form.outcome(), &SubmissionOutcome::Success(Some("setosa".into())));
    assert_eq!(form.error(), None);

    let mut form = filled_form(["6.3", "3.3", "6.0", "2.5"]);
    controller.submit(&mut form).await;
    assert_eq!(form.prediction(), Some("virginica"));
}

#[actix_web::test]
async fn application_error_message_is_surfaced() {
    fn reject(cfg: &mut web::ServiceConfig) {
        cfg.route(
            "/predict",
            web::post().to(|| async {
                HttpResponse::BadRequest().json(serde_json::json!({ "error": "invalid input" }))
            }),
        );
    }
    let controller = controller_for(spawn_server(reject));
    let mut form = filled_form(["1", "2", "3", "4"]);

    controller.submit(&mut form).await;

    assert_eq!(form.outcome(), &SubmissionOutcome::Failure("invalid input".into()));
}

#[actix_web::test]
async fn empty_server_error_falls_back() {
    fn crash(cfg: &mut web::ServiceConfig) {
        cfg.route(
            "/predict",
            web::post().to(|| async { HttpResponse::InternalServerError().finish() }),
        );
    }
    let controller = controller_for(spawn_server(crash));
    let mut form = filled_form(["1", "2", "3", "4"]);

    controller.submit(&mut form).await;

    assert_eq!(form.error(), Some(UNKNOWN_ERROR_MESSAGE));
    assert!(!form.is_loading());
}

#[actix_web::test]
async fn non_json_success_is_a_network_error() {
    fn html(cfg: &mut web::ServiceConfig) {
        cfg.route(
            "/predict",
            web::post().to(|| async {
                HttpResponse::Ok().content_type("text/html").body("<h1>gateway</h1>")
            }),
        );
    }
    let controller = controller_for(spawn_server(html));
    let mut form = filled_form(["1", "2", "3", "4"]);

    controller.submit(&mut form).await;

    assert_eq!(form.error(), Some(NETWORK_ERROR_MESSAGE));
}

#[actix_web::test]
async fn connection_refused_is_a_network_error() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("reserve port")
        .port();
    let controller = controller_for(format!("http://127.0.0.1:{}", port));
    let mut form = filled_form(["5.1", "3.5", "1.4", "0.2"]);

    assert!(controller.submit(&mut form).await);

    assert_eq!(form.outcome(), &SubmissionOutcome::Failure(NETWORK_ERROR_MESSAGE.into()));

    // The failed cycle must not leave the guard engaged.
    assert!(controller.begin(&mut form).is_some());
    assert_eq!(form.error(), None);
}

#[actix_web::test]
async fn missing_prediction_is_accepted_as_empty_success() {
    fn silent(cfg: &mut web::ServiceConfig) {
        cfg.route(
            "/predict",
            web::post().to(|| async { HttpResponse::Ok().json(serde_json::json!({})) }),
        );
    }
    let controller = controller_for(spawn_server(silent));
    let mut form = filled_form(["1", "2", "3", "4"]);

    controller.submit(&mut form).await;

    assert_eq!(form.outcome(), &SubmissionOutcome::Success(None));
    assert_eq!(form.prediction(), None);
    assert_eq!(form.error(), None);
}
