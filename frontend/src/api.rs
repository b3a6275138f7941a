use gloo_console::error;
use gloo_net::http::Request;
use shared::{Measurement, PredictionClient, Settlement, predict_url};

/// Browser `fetch` transport for the prediction endpoint.
#[derive(Clone, PartialEq)]
pub struct GlooClient {
    endpoint: String,
}

impl GlooClient {
    pub fn new(endpoint: String) -> Self {
        Self { endpoint }
    }
}

impl PredictionClient for GlooClient {
    async fn send(&self, measurement: &Measurement) -> Settlement {
        let request = match Request::post(&predict_url(&self.endpoint)).json(measurement) {
            Ok(request) => request,
            Err(e) => return Settlement::Failed(format!("Failed to build request: {}", e)),
        };

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                match response.text().await {
                    Ok(body) => Settlement::Responded { status, body },
                    Err(e) => {
                        error!(format!("Failed to read response: {}", e));
                        Settlement::Failed(e.to_string())
                    }
                }
            }
            Err(e) => {
                error!(format!("Fetch error: {}", e));
                Settlement::Failed(e.to_string())
            }
        }
    }
}
